//! Goal predicate: a compiled threshold test over an inventory.

use crate::carrier::catalog::ItemCatalogV1;
use crate::carrier::inventory::InventoryV1;
use crate::operators::recipe::{resolve_slots, ClauseV1, CompileFailure};

/// Compiled goal: satisfied iff every listed slot holds at least its minimum.
///
/// An empty goal is satisfied by every state, including the start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoalV1 {
    thresholds: Box<[(usize, i64)]>,
}

impl GoalV1 {
    /// Compile a goal threshold map against a catalog.
    ///
    /// # Errors
    ///
    /// Returns [`CompileFailure::UnknownItem`] if a goal item is not declared,
    /// or [`CompileFailure::NegativeAmount`] for a negative minimum.
    pub fn compile(
        thresholds: &[(String, i64)],
        catalog: &ItemCatalogV1,
    ) -> Result<Self, CompileFailure> {
        let thresholds = resolve_slots(thresholds, catalog, "goal", ClauseV1::Goal)?;
        Ok(Self {
            thresholds: thresholds.into_boxed_slice(),
        })
    }

    /// Whether `state` meets every threshold.
    #[must_use]
    pub fn is_satisfied(&self, state: &InventoryV1) -> bool {
        self.thresholds
            .iter()
            .all(|&(slot, minimum)| state.get(slot).unwrap_or(0) >= minimum)
    }

    /// Compiled `(slot, minimum)` pairs, in declared order.
    #[must_use]
    pub fn thresholds(&self) -> &[(usize, i64)] {
        &self.thresholds
    }

    /// JSON object of the thresholds keyed by item name.
    #[must_use]
    pub fn to_json(&self, catalog: &ItemCatalogV1) -> serde_json::Value {
        let map: serde_json::Map<String, serde_json::Value> = self
            .thresholds
            .iter()
            .map(|&(slot, minimum)| {
                (
                    catalog.name(slot).unwrap_or("?").to_string(),
                    serde_json::Value::from(minimum),
                )
            })
            .collect();
        serde_json::Value::Object(map)
    }
}
