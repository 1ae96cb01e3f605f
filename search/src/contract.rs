//! Search contract traits: the expansion seam and the goal seam.

use crafter_kernel::carrier::inventory::InventoryV1;
use crafter_kernel::operators::goal::GoalV1;

use crate::graph::TransitionV1;

/// A graph the search can expand.
///
/// # Contract
///
/// - `expand` yields every legal transition out of `state`, in a fixed
///   order (the order is part of the search's tie-breaking).
/// - The sequence is finite and restartable: calling `expand` twice on the
///   same state yields the same transitions in the same order.
/// - Nothing is cached across calls.
pub trait ExpansionGraph {
    /// Lazy successor iterator borrowed from the graph and the state.
    type Successors<'a>: Iterator<Item = TransitionV1>
    where
        Self: 'a;

    /// Successor transitions of `state`.
    fn expand<'a>(&'a self, state: &'a InventoryV1) -> Self::Successors<'a>;
}

/// Goal membership test.
pub trait GoalTest {
    fn is_goal(&self, state: &InventoryV1) -> bool;
}

impl GoalTest for GoalV1 {
    fn is_goal(&self, state: &InventoryV1) -> bool {
        self.is_satisfied(state)
    }
}

impl<F> GoalTest for F
where
    F: Fn(&InventoryV1) -> bool,
{
    fn is_goal(&self, state: &InventoryV1) -> bool {
        self(state)
    }
}
