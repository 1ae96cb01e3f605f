//! Recipe expansion graph: a state's successors under a compiled recipe set.

use std::sync::Arc;

use crafter_kernel::carrier::inventory::InventoryV1;
use crafter_kernel::operators::recipe::RecipeV1;

use crate::contract::ExpansionGraph;

/// One edge out of a state: `(action, resulting state, cost)`.
#[derive(Debug, Clone, PartialEq)]
pub struct TransitionV1 {
    /// Name of the recipe applied.
    pub action: Arc<str>,
    /// Resulting state.
    pub state: InventoryV1,
    /// Recipe cost, verbatim.
    pub cost: f64,
}

/// The recipe set, in declared order, as an expansion graph.
///
/// Owns its recipes. There is no ambient recipe table anywhere in the
/// workspace; every search gets its rules from a `RecipeGraph` value.
#[derive(Debug, Clone, Default)]
pub struct RecipeGraph {
    recipes: Vec<RecipeV1>,
}

impl RecipeGraph {
    #[must_use]
    pub fn new(recipes: Vec<RecipeV1>) -> Self {
        Self { recipes }
    }

    /// Recipes in declared (expansion) order.
    #[must_use]
    pub fn recipes(&self) -> &[RecipeV1] {
        &self.recipes
    }

    /// Look up a recipe by name.
    #[must_use]
    pub fn recipe(&self, name: &str) -> Option<&RecipeV1> {
        self.recipes.iter().find(|r| r.name() == name)
    }
}

impl ExpansionGraph for RecipeGraph {
    type Successors<'a> = Expand<'a>;

    fn expand<'a>(&'a self, state: &'a InventoryV1) -> Expand<'a> {
        Expand {
            recipes: self.recipes.iter(),
            state,
        }
    }
}

/// Lazy successor iterator. Each call to `next` tests recipes in order
/// until one's precondition holds, then applies its effect.
#[derive(Debug, Clone)]
pub struct Expand<'a> {
    recipes: std::slice::Iter<'a, RecipeV1>,
    state: &'a InventoryV1,
}

impl Iterator for Expand<'_> {
    type Item = TransitionV1;

    fn next(&mut self) -> Option<TransitionV1> {
        let state = self.state;
        let recipe = self.recipes.find(|r| r.precondition(state))?;
        Some(TransitionV1 {
            action: Arc::clone(recipe.name_handle()),
            state: recipe.effect(state),
            cost: recipe.cost(),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.recipes.size_hint().1)
    }
}
