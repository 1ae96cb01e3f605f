//! Search policy types.

use std::time::Duration;

use crate::error::SearchError;

/// Search budget configuration.
///
/// The wall-clock budget is the only bound the planner needs. The expansion
/// cap exists so tests and benchmarks can stop a search deterministically,
/// independent of machine speed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchPolicyV1 {
    /// Wall-clock budget, checked once per loop iteration.
    pub time_budget: Duration,
    /// Optional hard cap on node expansions (`None` = unbounded).
    pub max_expansions: Option<u64>,
}

impl SearchPolicyV1 {
    /// Default wall-clock budget: 30 seconds.
    pub const DEFAULT_TIME_BUDGET: Duration = Duration::from_secs(30);

    /// Build a policy from a budget in seconds.
    ///
    /// Negative budgets clamp to zero (the search then fails immediately).
    /// Budgets too large for a [`Duration`], including infinity, saturate
    /// to [`Duration::MAX`].
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidTimeBudget`] if `secs` is NaN.
    pub fn from_secs_f64(secs: f64) -> Result<Self, SearchError> {
        if secs.is_nan() {
            return Err(SearchError::InvalidTimeBudget {
                detail: "budget is NaN".into(),
            });
        }
        let time_budget = if secs <= 0.0 {
            Duration::ZERO
        } else {
            Duration::try_from_secs_f64(secs).unwrap_or(Duration::MAX)
        };
        Ok(Self {
            time_budget,
            max_expansions: None,
        })
    }

    /// Same policy with an expansion cap.
    #[must_use]
    pub fn with_max_expansions(mut self, cap: u64) -> Self {
        self.max_expansions = Some(cap);
        self
    }

    /// Canonical JSON form, echoed into run reports.
    #[must_use]
    pub fn to_json(&self) -> serde_json::Value {
        let budget_ms = u64::try_from(self.time_budget.as_millis()).unwrap_or(u64::MAX);
        serde_json::json!({
            "max_expansions": self.max_expansions,
            "time_budget_ms": budget_ms,
        })
    }
}

impl Default for SearchPolicyV1 {
    fn default() -> Self {
        Self {
            time_budget: Self::DEFAULT_TIME_BUDGET,
            max_expansions: None,
        }
    }
}
