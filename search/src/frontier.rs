//! Best-first frontier with admission-time visited marking.
//!
//! A state is marked visited when it is pushed, not when it is popped, and
//! is never re-opened. A cheaper route found after admission is ignored.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashSet};

use crafter_kernel::carrier::inventory::InventoryV1;

use crate::node::{FrontierKey, SearchNodeV1};

/// A frontier entry: ordering key plus arena index.
///
/// `BinaryHeap` is a max-heap, so we use `Reverse<FrontierKey>` to get
/// min-heap behavior (lowest `f_cost` first).
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
struct FrontierEntry {
    key: Reverse<FrontierKey>,
    node_id: u64,
}

/// A popped entry.
#[derive(Debug)]
pub struct PoppedV1 {
    pub key: FrontierKey,
    pub node_id: u64,
}

/// Best-first frontier manager.
///
/// Maintains:
/// - A `BinaryHeap` for O(log n) pop of the best entry
/// - A `HashSet<InventoryV1>` of every state ever admitted
pub struct BestFirstFrontier {
    heap: BinaryHeap<FrontierEntry>,
    visited: HashSet<InventoryV1>,
    high_water: u64,
}

impl BestFirstFrontier {
    /// Create a new empty frontier.
    #[must_use]
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            visited: HashSet::new(),
            high_water: 0,
        }
    }

    /// Push a node and mark its state as visited.
    ///
    /// Returns `false` if the state was already visited (node not added).
    pub fn push(&mut self, node: &SearchNodeV1) -> bool {
        if !self.visited.insert(node.state.clone()) {
            return false;
        }
        self.heap.push(FrontierEntry {
            key: Reverse(FrontierKey::from(node)),
            node_id: node.node_id,
        });
        let size = self.heap.len() as u64;
        if size > self.high_water {
            self.high_water = size;
        }
        true
    }

    /// Pop the entry with the lowest key.
    #[must_use]
    pub fn pop(&mut self) -> Option<PoppedV1> {
        self.heap.pop().map(|e| PoppedV1 {
            key: e.key.0,
            node_id: e.node_id,
        })
    }

    /// Whether a state has ever been admitted.
    #[must_use]
    pub fn is_visited(&self, state: &InventoryV1) -> bool {
        self.visited.contains(state)
    }

    /// Number of states ever admitted.
    #[must_use]
    pub fn visited_count(&self) -> usize {
        self.visited.len()
    }

    /// Current frontier size.
    #[must_use]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Whether the frontier is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// High-water mark of frontier size.
    #[must_use]
    pub fn high_water(&self) -> u64 {
        self.high_water
    }
}

impl Default for BestFirstFrontier {
    fn default() -> Self {
        Self::new()
    }
}
