//! Search entry point and expansion loop.
//!
//! Time-boxed weighted best-first search (A*) over inventory states.
//!
//! # Bookkeeping
//!
//! Every admitted state gets exactly one [`SearchNodeV1`] in an arena, and
//! the arena is the cost, predecessor and inbound-action record in one.
//! Because a state is marked visited on admission and never re-opened, the
//! first cost recorded for a state is also its last; a cheaper route found
//! later is counted as a suppressed duplicate and dropped.

use std::time::Instant;

use log::{debug, trace};

use crafter_kernel::carrier::inventory::InventoryV1;

use crate::contract::{ExpansionGraph, GoalTest};
use crate::frontier::BestFirstFrontier;
use crate::heuristic::Heuristic;
use crate::node::SearchNodeV1;
use crate::outcome::{SearchStatsV1, TerminationReasonV1};
use crate::plan::{PlanStepV1, PlanV1};
use crate::policy::SearchPolicyV1;

/// Result of a search execution.
///
/// Check [`SearchResult::is_goal_reached`] or `termination_reason` for the
/// outcome. A plan is present iff the goal was reached; running out of time
/// is a normal result, never an error.
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// The reconstructed plan (goal reached only).
    pub plan: Option<PlanV1>,
    /// Why the loop stopped.
    pub termination_reason: TerminationReasonV1,
    /// Counters for this invocation.
    pub stats: SearchStatsV1,
}

impl SearchResult {
    /// Returns `true` if the search terminated because a goal was reached.
    #[must_use]
    pub fn is_goal_reached(&self) -> bool {
        self.termination_reason.is_goal_reached()
    }
}

/// Run best-first search from `start`.
///
/// Each loop iteration first checks the wall-clock budget (and the optional
/// expansion cap), then pops the lowest `(f_cost, state, action)` entry.
/// A popped goal state ends the search with a plan. Otherwise every
/// successor whose state has never been admitted is admitted with
/// `g = g(parent) + cost` and priority `g + heuristic(successor)`.
///
/// The goal test runs on pop, not on admission, so with a zero budget the
/// search fails even when `start` already satisfies the goal.
///
/// A finite reachable space that lacks the goal ends at once with
/// [`TerminationReasonV1::FrontierExhausted`], not at the deadline. Callers
/// that treat only `TimeBudgetExhausted` as failure will miss it; test
/// [`SearchResult::is_goal_reached`] instead.
pub fn search<G, T, H>(
    graph: &G,
    start: InventoryV1,
    goal: &T,
    policy: &SearchPolicyV1,
    heuristic: &H,
) -> SearchResult
where
    G: ExpansionGraph,
    T: GoalTest + ?Sized,
    H: Heuristic + ?Sized,
{
    let started = Instant::now();
    let mut frontier = BestFirstFrontier::new();
    let mut nodes: Vec<SearchNodeV1> = Vec::new();
    let mut stats = SearchStatsV1::default();

    debug!(
        "Search start: slots={}, budget={:?}, max_expansions={:?}",
        start.len(),
        policy.time_budget,
        policy.max_expansions
    );

    let root = SearchNodeV1 {
        node_id: 0,
        parent_id: None,
        state: start,
        depth: 0,
        g_cost: 0.0,
        h_cost: 0.0,
        producing_action: None,
    };
    frontier.push(&root);
    nodes.push(root);
    stats.states_admitted = 1;

    let mut goal_node_id = None;
    let termination_reason = loop {
        if started.elapsed() >= policy.time_budget {
            break TerminationReasonV1::TimeBudgetExhausted;
        }
        if policy
            .max_expansions
            .is_some_and(|cap| stats.expansions >= cap)
        {
            break TerminationReasonV1::ExpansionBudgetExhausted;
        }

        let Some(popped) = frontier.pop() else {
            break TerminationReasonV1::FrontierExhausted;
        };
        let Some(current) = node(&nodes, popped.node_id) else {
            break TerminationReasonV1::FrontierInvariantViolation;
        };
        let (g_cost, depth) = (current.g_cost, current.depth);

        if goal.is_goal(&popped.key.state) {
            goal_node_id = Some(popped.node_id);
            break TerminationReasonV1::GoalReached;
        }

        stats.expansions += 1;
        let mut admitted = 0u64;
        for transition in graph.expand(&popped.key.state) {
            stats.transitions_generated += 1;
            if frontier.is_visited(&transition.state) {
                stats.duplicates_suppressed += 1;
                continue;
            }

            let h_cost = heuristic.estimate(&transition.state);
            if h_cost.is_infinite() {
                stats.states_admitted_infinite += 1;
            }
            let child = SearchNodeV1 {
                node_id: nodes.len() as u64,
                parent_id: Some(popped.node_id),
                state: transition.state,
                depth: depth + 1,
                g_cost: g_cost + transition.cost,
                h_cost,
                producing_action: Some(transition.action),
            };
            frontier.push(&child);
            nodes.push(child);
            admitted += 1;
        }
        stats.states_admitted += admitted;

        trace!(
            "Expanded node {} (f={}, g={}): admitted={}, frontier={}",
            popped.node_id,
            popped.key.f_cost,
            g_cost,
            admitted,
            frontier.len()
        );
    };

    stats.frontier_high_water = frontier.high_water();
    stats.elapsed = started.elapsed();

    let plan = goal_node_id.and_then(|id| reconstruct_plan(&nodes, id));
    // A goal id whose chain cannot be walked means the arena is corrupt.
    let termination_reason = if termination_reason.is_goal_reached() && plan.is_none() {
        TerminationReasonV1::FrontierInvariantViolation
    } else {
        termination_reason
    };

    debug!(
        "Search complete: reason={}, expansions={}, admitted={}, duplicates={}, high_water={}, elapsed={:?}",
        termination_reason,
        stats.expansions,
        stats.states_admitted,
        stats.duplicates_suppressed,
        stats.frontier_high_water,
        stats.elapsed
    );

    SearchResult {
        plan,
        termination_reason,
        stats,
    }
}

fn node(nodes: &[SearchNodeV1], node_id: u64) -> Option<&SearchNodeV1> {
    usize::try_from(node_id).ok().and_then(|i| nodes.get(i))
}

/// Walk parent links from `goal_node_id` back to the start and return the
/// steps in start-to-goal order.
fn reconstruct_plan(nodes: &[SearchNodeV1], goal_node_id: u64) -> Option<PlanV1> {
    let goal = node(nodes, goal_node_id)?;
    let mut steps = Vec::with_capacity(goal.depth as usize + 1);
    let mut current = Some(goal);
    while let Some(n) = current {
        steps.push(PlanStepV1 {
            state: n.state.clone(),
            action: n.producing_action.clone(),
        });
        current = match n.parent_id {
            Some(parent) => Some(node(nodes, parent)?),
            None => None,
        };
    }
    steps.reverse();
    Some(PlanV1 {
        steps,
        total_cost: goal.g_cost,
    })
}
