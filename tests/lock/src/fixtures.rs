//! Small hand-built crafting worlds.
//!
//! Each builder returns a compiled [`World`]: catalog, start state, goal
//! and recipe graph, built straight from kernel types so the tests do not
//! depend on the JSON loader.

use crafter_kernel::carrier::catalog::ItemCatalogV1;
use crafter_kernel::carrier::inventory::InventoryV1;
use crafter_kernel::operators::goal::GoalV1;
use crafter_kernel::operators::recipe::{compile_recipes, RecipeDefV1};
use crafter_search::graph::RecipeGraph;

/// A compiled fixture world.
#[derive(Debug, Clone)]
pub struct World {
    pub catalog: ItemCatalogV1,
    pub start: InventoryV1,
    pub goal: GoalV1,
    pub graph: RecipeGraph,
}

/// Owned `(item, amount)` pairs from literals.
#[must_use]
pub fn pairs(items: &[(&str, i64)]) -> Vec<(String, i64)> {
    items.iter().map(|(k, v)| ((*k).to_string(), *v)).collect()
}

/// A recipe definition without `Requires`.
#[must_use]
pub fn recipe(
    name: &str,
    consumes: &[(&str, i64)],
    produces: &[(&str, i64)],
    cost: f64,
) -> RecipeDefV1 {
    RecipeDefV1 {
        name: name.into(),
        requires: Vec::new(),
        consumes: pairs(consumes),
        produces: pairs(produces),
        cost,
    }
}

/// Compile a world from parts.
///
/// # Panics
///
/// Panics if the parts do not compile; fixtures are expected to be valid.
#[must_use]
pub fn world(
    items: &[&str],
    initial: &[(&str, i64)],
    goal: &[(&str, i64)],
    recipes: &[RecipeDefV1],
) -> World {
    let catalog = ItemCatalogV1::new(items.iter().copied()).expect("fixture catalog");
    let start =
        InventoryV1::with_overrides(&catalog, initial.iter().copied()).expect("fixture start");
    let goal = GoalV1::compile(&pairs(goal), &catalog).expect("fixture goal");
    let recipes = compile_recipes(recipes, &catalog).expect("fixture recipes");
    World {
        catalog,
        start,
        goal,
        graph: RecipeGraph::new(recipes),
    }
}

/// One wood, one plank recipe, goal four planks.
#[must_use]
pub fn plank_world() -> World {
    world(
        &["wood", "plank"],
        &[("wood", 1)],
        &[("plank", 4)],
        &[recipe("craft_plank", &[("wood", 1)], &[("plank", 4)], 1.0)],
    )
}

/// Wood is free to punch forever, but nothing makes diamonds.
///
/// The reachable space is infinite, so only a budget ends the search.
#[must_use]
pub fn unreachable_world() -> World {
    world(
        &["wood", "plank", "diamond"],
        &[],
        &[("diamond", 1)],
        &[
            recipe("punch for wood", &[], &[("wood", 1)], 4.0),
            recipe("craft plank", &[("wood", 1)], &[("plank", 4)], 1.0),
        ],
    )
}

/// Two ways to get wood at different costs, then a plank.
///
/// `cheap_first` controls which wood recipe is declared first.
#[must_use]
pub fn two_route_world(cheap_first: bool) -> World {
    let cheap = recipe("cheap wood", &[], &[("wood", 1)], 1.0);
    let costly = recipe("costly wood", &[], &[("wood", 1)], 5.0);
    let plank = recipe("craft plank", &[("wood", 1)], &[("plank", 4)], 1.0);
    let recipes = if cheap_first {
        [cheap, costly, plank]
    } else {
        [costly, cheap, plank]
    };
    world(&["wood", "plank"], &[], &[("plank", 1)], &recipes)
}

/// A small tool chain: bench gates sticks, sticks gate a pickaxe.
#[must_use]
pub fn tool_chain_world() -> World {
    let mut stick = recipe("craft stick at bench", &[("plank", 2)], &[("stick", 4)], 1.0);
    stick.requires = pairs(&[("bench", 1)]);
    let mut pickaxe = recipe(
        "craft pickaxe at bench",
        &[("plank", 3), ("stick", 2)],
        &[("pickaxe", 1)],
        1.0,
    );
    pickaxe.requires = pairs(&[("bench", 1)]);
    world(
        &["bench", "wood", "plank", "stick", "pickaxe"],
        &[],
        &[("pickaxe", 1)],
        &[
            recipe("punch for wood", &[], &[("wood", 1)], 4.0),
            recipe("craft plank", &[("wood", 1)], &[("plank", 4)], 1.0),
            recipe("craft bench", &[("plank", 4)], &[("bench", 1)], 1.0),
            stick,
            pickaxe,
        ],
    )
}
