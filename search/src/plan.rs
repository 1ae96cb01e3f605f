//! Plans: the ordered `(state, inbound action)` sequence a search returns.

use std::sync::Arc;

use crafter_kernel::carrier::catalog::ItemCatalogV1;
use crafter_kernel::carrier::inventory::InventoryV1;
use crafter_kernel::proof::canon::canonical_json_bytes;
use crafter_kernel::proof::hash::{canonical_hash, ContentHash, DOMAIN_PLAN};

/// One plan step. The first step is the start state with no action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanStepV1 {
    pub state: InventoryV1,
    pub action: Option<Arc<str>>,
}

/// A complete plan from the start state to a goal-satisfying state.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanV1 {
    /// Steps from start to goal; never empty.
    pub steps: Vec<PlanStepV1>,
    /// Sum of the applied recipes' costs, accumulated in step order.
    pub total_cost: f64,
}

impl PlanV1 {
    /// Number of actions (steps after the start).
    #[must_use]
    pub fn action_count(&self) -> usize {
        self.steps.len().saturating_sub(1)
    }

    /// Action names in application order.
    pub fn actions(&self) -> impl Iterator<Item = &str> {
        self.steps.iter().filter_map(|s| s.action.as_deref())
    }

    /// The start state.
    #[must_use]
    pub fn start_state(&self) -> Option<&InventoryV1> {
        self.steps.first().map(|s| &s.state)
    }

    /// The goal state.
    #[must_use]
    pub fn final_state(&self) -> Option<&InventoryV1> {
        self.steps.last().map(|s| &s.state)
    }

    /// Canonical JSON form: steps with sparse named states.
    #[must_use]
    pub fn to_json(&self, catalog: &ItemCatalogV1) -> serde_json::Value {
        let steps: Vec<serde_json::Value> = self
            .steps
            .iter()
            .map(|s| {
                serde_json::json!({
                    "action": s.action.as_deref(),
                    "state": s.state.to_sparse_json(catalog),
                })
            })
            .collect();
        serde_json::json!({
            "steps": steps,
            "total_cost": self.total_cost,
        })
    }

    /// Content hash of the canonical JSON form.
    #[must_use]
    pub fn digest(&self, catalog: &ItemCatalogV1) -> ContentHash {
        canonical_hash(DOMAIN_PLAN, &canonical_json_bytes(&self.to_json(catalog)))
    }
}
