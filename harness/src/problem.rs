//! Problem compilation: definition -> catalog, start state, goal, graph.
//!
//! Every item name in the definition is resolved here. After this point
//! nothing in a run looks up an item by name.

use crafter_kernel::carrier::catalog::ItemCatalogV1;
use crafter_kernel::carrier::inventory::InventoryV1;
use crafter_kernel::operators::goal::GoalV1;
use crafter_kernel::operators::recipe::{compile_recipes, resolve_slots, ClauseV1};
use crafter_search::graph::RecipeGraph;
use crafter_search::heuristic::PruningHeuristic;

use crate::definition::CraftingDefinitionV1;
use crate::error::HarnessError;

/// A compiled planning problem.
#[derive(Debug, Clone)]
pub struct CraftingProblemV1 {
    pub catalog: ItemCatalogV1,
    /// Catalog zeros overridden by the definition's `Initial` section.
    pub start: InventoryV1,
    pub goal: GoalV1,
    pub graph: RecipeGraph,
    /// Compiled pruning tables from the definition's `Heuristic` section.
    pub pruning: Option<PruningHeuristic>,
}

impl CraftingProblemV1 {
    /// Compile a parsed definition.
    ///
    /// # Errors
    ///
    /// Returns [`HarnessError::Catalog`] for duplicate items, and
    /// [`HarnessError::Compile`] for any unknown item (recipes, goal,
    /// initial inventory, heuristic tables), negative amount or quantity,
    /// invalid cost or duplicate recipe.
    pub fn compile(def: &CraftingDefinitionV1) -> Result<Self, HarnessError> {
        let catalog = ItemCatalogV1::new(def.items.iter().cloned())?;

        let initial = resolve_slots(
            def.initial.entries(),
            &catalog,
            "initial inventory",
            ClauseV1::Initial,
        )?;
        let mut quantities = vec![0; catalog.len()];
        for (slot, quantity) in initial {
            if let Some(q) = quantities.get_mut(slot) {
                *q = quantity;
            }
        }
        let start = InventoryV1::from_quantities(quantities);

        let goal = GoalV1::compile(def.goal.entries(), &catalog)?;
        let recipes = compile_recipes(&def.recipe_defs(), &catalog)?;

        let pruning = def
            .pruning_table()
            .map(|table| table.compile(&catalog))
            .transpose()?;

        Ok(Self {
            catalog,
            start,
            goal,
            graph: RecipeGraph::new(recipes),
            pruning,
        })
    }
}
