//! Shared helpers for crafter benchmark suites.

#![forbid(unsafe_code)]

use std::time::Duration;

use crafter_harness::problem::CraftingProblemV1;
use crafter_harness::worlds::minecraft;
use crafter_search::heuristic::PruningHeuristic;
use crafter_search::policy::SearchPolicyV1;
use crafter_search::search::{search, SearchResult};

/// One benchmark workload: a compiled problem plus the policy to run it with.
pub struct Regime {
    pub name: &'static str,
    pub problem: CraftingProblemV1,
    pub policy: SearchPolicyV1,
}

/// Minecraft goals of increasing depth, each solved with pruning.
///
/// # Panics
///
/// Panics if the built-in world fails to compile.
#[must_use]
pub fn minecraft_regimes() -> Vec<Regime> {
    ["bench", "wooden_pickaxe", "stone_pickaxe"]
        .into_iter()
        .map(|item| Regime {
            name: item,
            problem: minecraft::problem([(item, 1)]).expect("built-in world compiles"),
            policy: SearchPolicyV1::default(),
        })
        .collect()
}

/// A deep goal (a cart needs smelted ingots) searched without pruning and
/// stopped by a deterministic expansion cap instead of a clock, so the
/// regime measures raw expansion throughput.
///
/// # Panics
///
/// Panics if the built-in world fails to compile.
#[must_use]
pub fn capped_cart(max_expansions: u64) -> Regime {
    let mut problem = minecraft::problem([("cart", 1)]).expect("built-in world compiles");
    problem.pruning = None;
    Regime {
        name: "cart_capped",
        problem,
        policy: SearchPolicyV1 {
            time_budget: Duration::MAX,
            max_expansions: Some(max_expansions),
        },
    }
}

/// The regime's compiled pruning tables.
///
/// # Panics
///
/// Panics if the regime has no tables.
#[must_use]
pub fn pruning_for(regime: &Regime) -> &PruningHeuristic {
    regime.problem.pruning.as_ref().expect("regime has tables")
}

/// Run `search()` only, skipping replay and report construction.
#[must_use]
pub fn run_search_only(regime: &Regime, heuristic: &PruningHeuristic) -> SearchResult {
    search(
        &regime.problem.graph,
        regime.problem.start.clone(),
        &regime.problem.goal,
        &regime.policy,
        heuristic,
    )
}
