//! `InventoryV1`: fixed-schema inventory snapshot.
//!
//! # Layout
//!
//! One signed quantity per catalog slot, in [`ItemCatalogV1`] slot order.
//! Every inventory in a run is built from the same catalog, so the key set
//! and key order are implied by position and never stored.
//!
//! # Equality, hashing and ordering
//!
//! `Eq`/`Hash` cover the full ordered quantity sequence, zero slots
//! included: two inventories are interchangeable as map keys iff every
//! slot matches. `Ord` is lexicographic over the same sequence and exists
//! only to break frontier ties deterministically.
//!
//! Quantities are signed. Correctly gated transitions never drive a slot
//! below zero, but the model does not clamp; see
//! [`RecipeV1::effect`](crate::operators::recipe::RecipeV1::effect).

use std::fmt;

use crate::carrier::catalog::{CatalogError, ItemCatalogV1};
use crate::proof::hash::{canonical_hash, ContentHash, DOMAIN_INVENTORY};

/// An inventory snapshot over a fixed catalog. Value type: `clone()` is the copy.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct InventoryV1 {
    quantities: Box<[i64]>,
}

impl InventoryV1 {
    /// All slots zero.
    #[must_use]
    pub fn zeroed(catalog: &ItemCatalogV1) -> Self {
        Self {
            quantities: vec![0; catalog.len()].into_boxed_slice(),
        }
    }

    /// Build from raw quantities in slot order.
    #[must_use]
    pub fn from_quantities(quantities: Vec<i64>) -> Self {
        Self {
            quantities: quantities.into_boxed_slice(),
        }
    }

    /// Zeroed inventory with the given slots overwritten (last write wins).
    ///
    /// This is how the starting state is built: catalog zeros overridden by
    /// the sparse initial inventory.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::UnknownItem`] if an override names an item
    /// outside the catalog.
    pub fn with_overrides<'a, I>(catalog: &ItemCatalogV1, overrides: I) -> Result<Self, CatalogError>
    where
        I: IntoIterator<Item = (&'a str, i64)>,
    {
        let mut inventory = Self::zeroed(catalog);
        for (item, quantity) in overrides {
            let slot = catalog.resolve(item)?;
            inventory.quantities[slot] = quantity;
        }
        Ok(inventory)
    }

    /// Number of slots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.quantities.len()
    }

    /// Whether the inventory has no slots.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.quantities.is_empty()
    }

    /// Quantity at a slot index.
    #[must_use]
    pub fn get(&self, slot: usize) -> Option<i64> {
        self.quantities.get(slot).copied()
    }

    /// Quantities in slot order.
    #[must_use]
    pub fn quantities(&self) -> &[i64] {
        &self.quantities
    }

    /// Quantity of a named item.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::UnknownItem`] if the name is not declared.
    pub fn quantity(&self, catalog: &ItemCatalogV1, item: &str) -> Result<i64, CatalogError> {
        let slot = catalog.resolve(item)?;
        Ok(self.quantities.get(slot).copied().unwrap_or(0))
    }

    /// Add `delta` to a slot, saturating at the `i64` bounds. Slot indices
    /// come from compiled rules. Gated transitions never reach a bound.
    pub(crate) fn add(&mut self, slot: usize, delta: i64) {
        if let Some(q) = self.quantities.get_mut(slot) {
            *q = q.saturating_add(delta);
        }
    }

    /// Serialize quantities to bytes (i64 little-endian per slot).
    #[must_use]
    pub fn identity_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.quantities.len() * 8);
        for q in self.quantities.iter() {
            bytes.extend_from_slice(&q.to_le_bytes());
        }
        bytes
    }

    /// Content hash of [`identity_bytes`](Self::identity_bytes).
    ///
    /// Diagnostic and report use only; the search keys maps on the
    /// inventory value itself.
    #[must_use]
    pub fn fingerprint(&self) -> ContentHash {
        canonical_hash(DOMAIN_INVENTORY, &self.identity_bytes())
    }

    /// Display adapter that names slots and omits zero quantities.
    #[must_use]
    pub fn display<'a>(&'a self, catalog: &'a ItemCatalogV1) -> InventoryDisplay<'a> {
        InventoryDisplay {
            inventory: self,
            catalog,
        }
    }

    /// JSON object of the non-zero slots, keyed by item name.
    #[must_use]
    pub fn to_sparse_json(&self, catalog: &ItemCatalogV1) -> serde_json::Value {
        let map: serde_json::Map<String, serde_json::Value> = self
            .nonzero(catalog)
            .map(|(name, q)| (name.to_string(), serde_json::Value::from(q)))
            .collect();
        serde_json::Value::Object(map)
    }

    fn nonzero<'a>(&'a self, catalog: &'a ItemCatalogV1) -> impl Iterator<Item = (&'a str, i64)> + 'a {
        self.quantities
            .iter()
            .enumerate()
            .filter(|(_, q)| **q != 0)
            .map(|(slot, q)| (catalog.name(slot).unwrap_or("?"), *q))
    }
}

/// See [`InventoryV1::display`]. Renders `{plank: 4, stick: 2}`.
pub struct InventoryDisplay<'a> {
    inventory: &'a InventoryV1,
    catalog: &'a ItemCatalogV1,
}

impl fmt::Display for InventoryDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (name, q)) in self.inventory.nonzero(self.catalog).enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{name}: {q}")?;
        }
        f.write_str("}")
    }
}
