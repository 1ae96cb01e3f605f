//! Search node and frontier ordering key.

use std::cmp::Ordering;
use std::sync::Arc;

use crafter_kernel::carrier::inventory::InventoryV1;

/// A node in the search arena.
///
/// Nodes are created once, when a state is admitted, and never updated.
/// `node_id` equals the node's index in the arena.
#[derive(Debug, Clone)]
pub struct SearchNodeV1 {
    /// Arena index, assigned in admission order.
    pub node_id: u64,
    /// Parent node ID (`None` for the start node).
    pub parent_id: Option<u64>,
    /// The admitted state.
    pub state: InventoryV1,
    /// Number of actions from the start.
    pub depth: u32,
    /// Cumulative path cost from the start.
    pub g_cost: f64,
    /// Heuristic estimate at admission (may be `f64::INFINITY`).
    pub h_cost: f64,
    /// The recipe that produced this node from its parent.
    pub producing_action: Option<Arc<str>>,
}

impl SearchNodeV1 {
    /// `f_cost = g_cost + h_cost` (the frontier priority).
    #[must_use]
    pub fn f_cost(&self) -> f64 {
        self.g_cost + self.h_cost
    }
}

/// The frontier ordering key: `(f_cost, state, action)`.
///
/// Lower `f_cost` first (IEEE total order, so `INFINITY` sorts after every
/// finite priority), then the state's lexicographic order, then the
/// inbound action name with the start's absent action first. Equal keys
/// can only arise from two entries for the same state, which the visited
/// set rules out.
#[derive(Debug, Clone)]
pub struct FrontierKey {
    pub f_cost: f64,
    pub state: InventoryV1,
    pub action: Option<Arc<str>>,
}

impl PartialEq for FrontierKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FrontierKey {}

impl PartialOrd for FrontierKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.f_cost
            .total_cmp(&other.f_cost)
            .then_with(|| self.state.cmp(&other.state))
            .then_with(|| self.action.cmp(&other.action))
    }
}

impl From<&SearchNodeV1> for FrontierKey {
    fn from(node: &SearchNodeV1) -> Self {
        Self {
            f_cost: node.f_cost(),
            state: node.state.clone(),
            action: node.producing_action.clone(),
        }
    }
}
