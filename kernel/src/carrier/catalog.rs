//! `ItemCatalogV1`: the canonical item-index table for one planning run.
//!
//! The catalog fixes the slot order shared by every [`InventoryV1`] in a
//! run. Names are resolved to slot indices once, when rules are compiled;
//! the search itself never touches item names.
//!
//! Slot order is the declaration order of the item list. Duplicate names
//! are rejected at construction (no silent merge).
//!
//! [`InventoryV1`]: crate::carrier::inventory::InventoryV1

use std::collections::BTreeMap;

use crate::proof::canon::canonical_json_bytes;
use crate::proof::hash::{canonical_hash, ContentHash, DOMAIN_CATALOG};

/// The item catalog: slot index <-> item name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemCatalogV1 {
    /// Item names in slot order.
    items: Vec<String>,
    /// Reverse lookup, name -> slot index.
    index: BTreeMap<String, usize>,
}

/// Error type for catalog construction and lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// An item name was declared more than once.
    DuplicateItem { item: String },
    /// A name was looked up that the catalog does not declare.
    UnknownItem { item: String },
}

impl std::fmt::Display for CatalogError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateItem { item } => write!(f, "item '{item}' declared more than once"),
            Self::UnknownItem { item } => write!(f, "item '{item}' is not in the catalog"),
        }
    }
}

impl std::error::Error for CatalogError {}

impl ItemCatalogV1 {
    /// Create a catalog from item names in slot order.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::DuplicateItem`] if a name repeats.
    pub fn new<I, S>(items: I) -> Result<Self, CatalogError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut names = Vec::new();
        let mut index = BTreeMap::new();
        for item in items {
            let item = item.into();
            if index.contains_key(&item) {
                return Err(CatalogError::DuplicateItem { item });
            }
            index.insert(item.clone(), names.len());
            names.push(item);
        }
        Ok(Self {
            items: names,
            index,
        })
    }

    /// Number of slots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the catalog declares no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Slot index of an item, if declared.
    #[must_use]
    pub fn index_of(&self, item: &str) -> Option<usize> {
        self.index.get(item).copied()
    }

    /// Slot index of an item.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::UnknownItem`] if the name is not declared.
    pub fn resolve(&self, item: &str) -> Result<usize, CatalogError> {
        self.index_of(item).ok_or_else(|| CatalogError::UnknownItem {
            item: item.to_string(),
        })
    }

    /// Item name at a slot index.
    #[must_use]
    pub fn name(&self, slot: usize) -> Option<&str> {
        self.items.get(slot).map(String::as_str)
    }

    /// Item names in slot order.
    #[must_use]
    pub fn items(&self) -> &[String] {
        &self.items
    }

    /// Canonical JSON bytes: `{"items":[...]}` in slot order.
    #[must_use]
    pub fn canonical_bytes(&self) -> Vec<u8> {
        canonical_json_bytes(&serde_json::json!({ "items": self.items }))
    }

    /// Content hash of [`canonical_bytes`](Self::canonical_bytes).
    #[must_use]
    pub fn digest(&self) -> ContentHash {
        canonical_hash(DOMAIN_CATALOG, &self.canonical_bytes())
    }
}
