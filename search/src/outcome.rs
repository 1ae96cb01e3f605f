//! Search outcome types: termination reason and counters.

use std::time::Duration;

/// Why the search terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminationReasonV1 {
    /// A popped state satisfied the goal; a plan was reconstructed.
    GoalReached,
    /// The wall-clock budget elapsed before a goal state was popped.
    TimeBudgetExhausted,
    /// Every admitted state was expanded without reaching the goal. Returned
    /// as soon as the frontier empties, without waiting for the deadline.
    FrontierExhausted,
    /// The optional `max_expansions` cap was hit.
    ExpansionBudgetExhausted,
    /// An internal search-loop invariant was violated without panicking.
    FrontierInvariantViolation,
}

impl TerminationReasonV1 {
    /// Stable snake-case label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::GoalReached => "goal_reached",
            Self::TimeBudgetExhausted => "time_budget_exhausted",
            Self::FrontierExhausted => "frontier_exhausted",
            Self::ExpansionBudgetExhausted => "expansion_budget_exhausted",
            Self::FrontierInvariantViolation => "frontier_invariant_violation",
        }
    }

    /// Whether this reason carries a plan.
    #[must_use]
    pub const fn is_goal_reached(self) -> bool {
        matches!(self, Self::GoalReached)
    }
}

impl std::fmt::Display for TerminationReasonV1 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Counters collected over one search invocation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchStatsV1 {
    /// States popped and expanded (goal pop not counted).
    pub expansions: u64,
    /// Transitions yielded by the expansion graph.
    pub transitions_generated: u64,
    /// Transitions whose state was already visited.
    pub duplicates_suppressed: u64,
    /// States admitted to the frontier, start included.
    pub states_admitted: u64,
    /// Admitted states whose heuristic estimate was infinite.
    pub states_admitted_infinite: u64,
    /// Largest frontier size observed.
    pub frontier_high_water: u64,
    /// Wall time spent in the search loop.
    pub elapsed: Duration,
}

impl SearchStatsV1 {
    /// Canonical JSON form. Wall time is left out so reports stay
    /// byte-identical across runs.
    #[must_use]
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "duplicates_suppressed": self.duplicates_suppressed,
            "expansions": self.expansions,
            "frontier_high_water": self.frontier_high_water,
            "states_admitted": self.states_admitted,
            "states_admitted_infinite": self.states_admitted_infinite,
            "transitions_generated": self.transitions_generated,
        })
    }
}
