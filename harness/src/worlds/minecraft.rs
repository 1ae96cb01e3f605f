//! `Minecraft`: the default crafting world.
//!
//! Seventeen items and twenty-five recipes, from punching trees up to
//! rails and carts. The shipped goal is one stone pickaxe from an empty
//! inventory.
//!
//! The pruning tables are hand-tuned for this recipe set. Every tool is
//! worth holding once; each material cap is roughly the largest amount a
//! single recipe consumes (eight cobble for a furnace, six ingots for
//! rails). Goals asking for a second tool or more material than its cap
//! are outside what these tables can solve.

use crafter_search::heuristic::PruningTableV1;

use crate::definition::{parse_definition, CraftingDefinitionV1, DefinitionError};
use crate::error::HarnessError;
use crate::problem::CraftingProblemV1;

/// The world definition, as persisted.
pub const CRAFTING_JSON: &str = include_str!("../../fixtures/crafting.json");

/// Items treated as single-use-worthy tools.
pub const TOOLS: [&str; 8] = [
    "furnace",
    "bench",
    "wooden_pickaxe",
    "wooden_axe",
    "stone_pickaxe",
    "stone_axe",
    "iron_pickaxe",
    "iron_axe",
];

/// Material caps: the most of each material worth holding at once.
pub const MATERIAL_CAPS: [(&str, i64); 7] = [
    ("coal", 1),
    ("cobble", 8),
    ("wood", 1),
    ("plank", 8),
    ("stick", 4),
    ("ore", 1),
    ("ingot", 6),
];

/// Parse the built-in definition.
///
/// # Errors
///
/// Returns [`DefinitionError::Parse`] only if the embedded file is corrupt.
pub fn definition() -> Result<CraftingDefinitionV1, DefinitionError> {
    parse_definition(CRAFTING_JSON)
}

/// The hand-tuned pruning tables.
#[must_use]
pub fn pruning_table() -> PruningTableV1 {
    PruningTableV1 {
        tools: TOOLS.iter().map(|t| (*t).to_string()).collect(),
        material_caps: MATERIAL_CAPS
            .iter()
            .map(|(m, cap)| ((*m).to_string(), *cap))
            .collect(),
    }
}

/// Compile the world with the given goal, with its pruning tables attached.
///
/// # Errors
///
/// Returns [`HarnessError::Compile`] if the goal names an unknown item.
pub fn problem<'a, I>(goal: I) -> Result<CraftingProblemV1, HarnessError>
where
    I: IntoIterator<Item = (&'a str, i64)>,
{
    let def = definition()?.with_goal(goal);
    with_tables(CraftingProblemV1::compile(&def)?)
}

/// Compile the world with its shipped goal (one stone pickaxe).
///
/// # Errors
///
/// As for [`problem`].
pub fn default_problem() -> Result<CraftingProblemV1, HarnessError> {
    with_tables(CraftingProblemV1::compile(&definition()?)?)
}

fn with_tables(mut problem: CraftingProblemV1) -> Result<CraftingProblemV1, HarnessError> {
    problem.pruning = Some(pruning_table().compile(&problem.catalog)?);
    Ok(problem)
}
