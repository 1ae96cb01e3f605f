//! Recipe compilation: raw rule definition -> executable precondition + effect + cost.
//!
//! A [`RecipeDefV1`] names items; a [`RecipeV1`] holds catalog slot indices.
//! Compilation is the only place item names are resolved, so an unknown
//! item is reported here, before any search begins, and never recovered.
//!
//! # Semantics
//!
//! - `Requires`: each listed item must be present (`> 0`). Not consumed.
//!   The listed amount is ignored; only presence matters.
//! - `Consumes`: each listed item must have at least the amount, and the
//!   amount is subtracted.
//! - `Produces`: each listed amount is added. A recipe whose result would
//!   exceed `i64::MAX` in some slot is not applicable.
//! - `cost`: positive, finite edge weight, used verbatim by the search.
//!
//! An item listed more than once in `Consumes` or `Produces` is merged into
//! one entry with the summed amount.

use std::collections::BTreeSet;
use std::sync::Arc;

use crate::carrier::catalog::ItemCatalogV1;
use crate::carrier::inventory::InventoryV1;
use crate::proof::canon::canonical_json_bytes;
use crate::proof::hash::{canonical_hash, ContentHash, DOMAIN_RECIPE_SET};

/// A raw rule definition, as supplied by a loader.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RecipeDefV1 {
    /// Unique recipe name (the plan's action label).
    pub name: String,
    /// Items that must be present (`> 0`); amounts are not checked.
    pub requires: Vec<(String, i64)>,
    /// Items consumed, with amounts.
    pub consumes: Vec<(String, i64)>,
    /// Items produced, with amounts.
    pub produces: Vec<(String, i64)>,
    /// Time units charged per application.
    pub cost: f64,
}

/// Which clause of a definition a failure refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClauseV1 {
    Requires,
    Consumes,
    Produces,
    Goal,
    Initial,
    Tools,
    Caps,
}

impl ClauseV1 {
    /// Canonical clause label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Requires => "Requires",
            Self::Consumes => "Consumes",
            Self::Produces => "Produces",
            Self::Goal => "Goal",
            Self::Initial => "Initial",
            Self::Tools => "Tools",
            Self::Caps => "Caps",
        }
    }
}

/// Typed compilation failure. Fail-closed: nothing partial is produced.
#[derive(Debug, Clone, PartialEq)]
pub enum CompileFailure {
    /// A clause references an item the catalog does not declare.
    UnknownItem {
        owner: String,
        clause: ClauseV1,
        item: String,
    },
    /// A clause carries a negative amount.
    NegativeAmount {
        owner: String,
        clause: ClauseV1,
        item: String,
        amount: i64,
    },
    /// The cost is not a finite, strictly positive number.
    InvalidCost { recipe: String, cost: f64 },
    /// Two recipes share a name.
    DuplicateRecipe { name: String },
    /// Repeated entries for one item sum past `i64::MAX`.
    AmountOverflow {
        owner: String,
        clause: ClauseV1,
        item: String,
    },
}

impl std::fmt::Display for CompileFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownItem {
                owner,
                clause,
                item,
            } => write!(
                f,
                "{owner}: {} references unknown item '{item}'",
                clause.as_str()
            ),
            Self::NegativeAmount {
                owner,
                clause,
                item,
                amount,
            } => write!(
                f,
                "{owner}: {} amount for '{item}' is negative ({amount})",
                clause.as_str()
            ),
            Self::InvalidCost { recipe, cost } => {
                write!(f, "recipe '{recipe}': cost must be finite and > 0, got {cost}")
            }
            Self::DuplicateRecipe { name } => write!(f, "recipe '{name}' declared more than once"),
            Self::AmountOverflow {
                owner,
                clause,
                item,
            } => write!(
                f,
                "{owner}: {} amounts for '{item}' overflow when summed",
                clause.as_str()
            ),
        }
    }
}

impl std::error::Error for CompileFailure {}

/// A compiled, immutable recipe.
#[derive(Debug, Clone, PartialEq)]
pub struct RecipeV1 {
    name: Arc<str>,
    requires: Box<[usize]>,
    consumes: Box<[(usize, i64)]>,
    produces: Box<[(usize, i64)]>,
    cost: f64,
}

impl RecipeV1 {
    /// Compile a definition against a catalog.
    ///
    /// # Errors
    ///
    /// Returns [`CompileFailure`] for unknown items, negative amounts, or a
    /// cost that is not finite and positive.
    pub fn compile(def: &RecipeDefV1, catalog: &ItemCatalogV1) -> Result<Self, CompileFailure> {
        let owner = format!("recipe '{}'", def.name);
        if !def.cost.is_finite() || def.cost <= 0.0 {
            return Err(CompileFailure::InvalidCost {
                recipe: def.name.clone(),
                cost: def.cost,
            });
        }

        let requires = def
            .requires
            .iter()
            .map(|(item, _)| resolve_item(item, catalog, &owner, ClauseV1::Requires))
            .collect::<Result<Box<[usize]>, _>>()?;
        let consumes = resolve_slots(&def.consumes, catalog, &owner, ClauseV1::Consumes)?;
        let consumes = merge_slots(consumes, catalog, &owner, ClauseV1::Consumes)?;
        let produces = resolve_slots(&def.produces, catalog, &owner, ClauseV1::Produces)?;
        let produces = merge_slots(produces, catalog, &owner, ClauseV1::Produces)?;

        Ok(Self {
            name: Arc::from(def.name.as_str()),
            requires,
            consumes,
            produces,
            cost: def.cost,
        })
    }

    /// Recipe name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Shared handle to the name, cheap to attach to every transition.
    #[must_use]
    pub fn name_handle(&self) -> &Arc<str> {
        &self.name
    }

    /// Edge weight.
    #[must_use]
    pub fn cost(&self) -> f64 {
        self.cost
    }

    /// Whether this recipe may be applied to `state`.
    ///
    /// True iff every consumed item has at least its amount, every
    /// required item is present, and no produced slot would overflow.
    #[must_use]
    pub fn precondition(&self, state: &InventoryV1) -> bool {
        let quantity = |slot: usize| state.get(slot).unwrap_or(0);
        self.consumes
            .iter()
            .all(|&(slot, amount)| quantity(slot) >= amount)
            && self.requires.iter().all(|&slot| quantity(slot) > 0)
            && self.produces.iter().all(|&(slot, amount)| {
                (quantity(slot) - self.consumed(slot))
                    .checked_add(amount)
                    .is_some()
            })
    }

    /// Apply this recipe to a copy of `state`: subtract `Consumes`, then
    /// add `Produces`.
    ///
    /// Performs no validation. The caller must have checked
    /// [`precondition`](Self::precondition) on the same state; misapplied,
    /// this silently drives quantities negative (saturating, never
    /// wrapping, at the `i64` bounds).
    #[must_use]
    pub fn effect(&self, state: &InventoryV1) -> InventoryV1 {
        let mut next = state.clone();
        for &(slot, amount) in self.consumes.iter() {
            next.add(slot, amount.saturating_neg());
        }
        for &(slot, amount) in self.produces.iter() {
            next.add(slot, amount);
        }
        next
    }

    fn consumed(&self, slot: usize) -> i64 {
        self.consumes
            .iter()
            .find(|&&(s, _)| s == slot)
            .map_or(0, |&(_, amount)| amount)
    }

    /// JSON form with item names, for digests and reports.
    #[must_use]
    pub fn to_json(&self, catalog: &ItemCatalogV1) -> serde_json::Value {
        let named = |pairs: &[(usize, i64)]| -> serde_json::Value {
            pairs
                .iter()
                .map(|&(slot, amount)| serde_json::json!([catalog.name(slot), amount]))
                .collect()
        };
        let requires: Vec<Option<&str>> = self.requires.iter().map(|&s| catalog.name(s)).collect();
        serde_json::json!({
            "consumes": named(&self.consumes),
            "cost": self.cost,
            "name": &*self.name,
            "produces": named(&self.produces),
            "requires": requires,
        })
    }
}

/// Resolve one item name for a clause.
///
/// # Errors
///
/// Returns [`CompileFailure::UnknownItem`] if the catalog does not declare it.
pub fn resolve_item(
    item: &str,
    catalog: &ItemCatalogV1,
    owner: &str,
    clause: ClauseV1,
) -> Result<usize, CompileFailure> {
    catalog
        .index_of(item)
        .ok_or_else(|| CompileFailure::UnknownItem {
            owner: owner.to_string(),
            clause,
            item: item.to_string(),
        })
}

/// Resolve `(item, amount)` pairs for a clause, rejecting negative amounts.
///
/// # Errors
///
/// Returns [`CompileFailure::UnknownItem`] or [`CompileFailure::NegativeAmount`].
pub fn resolve_slots(
    pairs: &[(String, i64)],
    catalog: &ItemCatalogV1,
    owner: &str,
    clause: ClauseV1,
) -> Result<Vec<(usize, i64)>, CompileFailure> {
    pairs
        .iter()
        .map(|(item, amount)| {
            let slot = resolve_item(item, catalog, owner, clause)?;
            if *amount < 0 {
                return Err(CompileFailure::NegativeAmount {
                    owner: owner.to_string(),
                    clause,
                    item: item.clone(),
                    amount: *amount,
                });
            }
            Ok((slot, *amount))
        })
        .collect()
}

/// Fold repeated slots into one entry each, keeping first-seen order.
fn merge_slots(
    pairs: Vec<(usize, i64)>,
    catalog: &ItemCatalogV1,
    owner: &str,
    clause: ClauseV1,
) -> Result<Box<[(usize, i64)]>, CompileFailure> {
    let mut merged: Vec<(usize, i64)> = Vec::with_capacity(pairs.len());
    for (slot, amount) in pairs {
        match merged.iter_mut().find(|(s, _)| *s == slot) {
            Some((_, total)) => {
                *total = total
                    .checked_add(amount)
                    .ok_or_else(|| CompileFailure::AmountOverflow {
                        owner: owner.to_string(),
                        clause,
                        item: catalog.name(slot).unwrap_or("?").to_string(),
                    })?;
            }
            None => merged.push((slot, amount)),
        }
    }
    Ok(merged.into_boxed_slice())
}

/// Compile a recipe table, preserving declared order.
///
/// # Errors
///
/// Returns the first [`CompileFailure`] encountered, including
/// [`CompileFailure::DuplicateRecipe`] for repeated names.
pub fn compile_recipes(
    defs: &[RecipeDefV1],
    catalog: &ItemCatalogV1,
) -> Result<Vec<RecipeV1>, CompileFailure> {
    let mut seen = BTreeSet::new();
    let mut recipes = Vec::with_capacity(defs.len());
    for def in defs {
        if !seen.insert(def.name.as_str()) {
            return Err(CompileFailure::DuplicateRecipe {
                name: def.name.clone(),
            });
        }
        recipes.push(RecipeV1::compile(def, catalog)?);
    }
    Ok(recipes)
}

/// Content hash of a compiled recipe table, in declared order.
#[must_use]
pub fn recipe_set_digest(recipes: &[RecipeV1], catalog: &ItemCatalogV1) -> ContentHash {
    let value = serde_json::json!({
        "recipes": recipes.iter().map(|r| r.to_json(catalog)).collect::<Vec<_>>(),
    });
    canonical_hash(DOMAIN_RECIPE_SET, &canonical_json_bytes(&value))
}
