//! Heuristic functions over inventory states.
//!
//! The search adds `estimate(state)` to the cumulative cost to order the
//! frontier. [`PruningHeuristic`] is the planner's production heuristic: it
//! does not guide toward the goal at all, it only pushes over-stocked
//! states to the back of the frontier by returning positive infinity.
//!
//! # Soundness
//!
//! The pruning heuristic is not admissible. A goal that needs two of a
//! tool, or more of a material than its cap, is only reachable through
//! states the heuristic rates infinite. Such states still enter the
//! frontier (they are never discarded), but they sort after every finite
//! entry, so in practice the search times out first.

use crafter_kernel::carrier::catalog::ItemCatalogV1;
use crafter_kernel::carrier::inventory::InventoryV1;
use crafter_kernel::operators::recipe::{
    resolve_item, resolve_slots, ClauseV1, CompileFailure,
};

/// Estimate of remaining cost from a state. Must be deterministic.
pub trait Heuristic {
    /// Non-negative estimate, or `f64::INFINITY` to deprioritize the state.
    fn estimate(&self, state: &InventoryV1) -> f64;
}

/// Always zero: the search degenerates to uniform-cost order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ZeroHeuristic;

impl Heuristic for ZeroHeuristic {
    fn estimate(&self, _state: &InventoryV1) -> f64 {
        0.0
    }
}

impl<F> Heuristic for F
where
    F: Fn(&InventoryV1) -> f64,
{
    fn estimate(&self, state: &InventoryV1) -> f64 {
        self(state)
    }
}

/// Pruning tables by item name, as configured.
///
/// `tools` are items worth holding at most one of. `material_caps` bound
/// how many of a material are worth holding: the largest amount any single
/// recipe consumes. Caps are configuration, never derived from recipes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PruningTableV1 {
    pub tools: Vec<String>,
    pub material_caps: Vec<(String, i64)>,
}

impl PruningTableV1 {
    /// Resolve the tables against a catalog.
    ///
    /// # Errors
    ///
    /// Returns [`CompileFailure::UnknownItem`] if a tool or material is not
    /// declared, or [`CompileFailure::NegativeAmount`] for a negative cap.
    pub fn compile(&self, catalog: &ItemCatalogV1) -> Result<PruningHeuristic, CompileFailure> {
        let tools = self
            .tools
            .iter()
            .map(|tool| resolve_item(tool, catalog, "heuristic", ClauseV1::Tools))
            .collect::<Result<Box<[usize]>, _>>()?;
        let caps = resolve_slots(&self.material_caps, catalog, "heuristic", ClauseV1::Caps)?;
        Ok(PruningHeuristic {
            table: self.clone(),
            tools,
            caps: caps.into_boxed_slice(),
        })
    }

    /// JSON form for run reports. Entry order is preserved.
    #[must_use]
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "caps": self
                .material_caps
                .iter()
                .map(|(item, cap)| serde_json::json!([item, cap]))
                .collect::<Vec<_>>(),
            "tools": self.tools,
        })
    }
}

/// Compiled pruning heuristic: infinite when any tool exceeds 1 or any
/// capped material exceeds its cap, zero otherwise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PruningHeuristic {
    table: PruningTableV1,
    tools: Box<[usize]>,
    caps: Box<[(usize, i64)]>,
}

impl PruningHeuristic {
    /// The tables this heuristic was compiled from.
    #[must_use]
    pub fn table(&self) -> &PruningTableV1 {
        &self.table
    }

    /// Whether `state` holds more of some tool or material than is useful.
    #[must_use]
    pub fn is_overstocked(&self, state: &InventoryV1) -> bool {
        let quantity = |slot: usize| state.get(slot).unwrap_or(0);
        self.tools.iter().any(|&slot| quantity(slot) > 1)
            || self.caps.iter().any(|&(slot, cap)| quantity(slot) > cap)
    }
}

impl Heuristic for PruningHeuristic {
    fn estimate(&self, state: &InventoryV1) -> f64 {
        if self.is_overstocked(state) {
            f64::INFINITY
        } else {
            0.0
        }
    }
}
