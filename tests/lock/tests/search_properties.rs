//! Search property lock tests.
//!
//! Proves:
//! 1. Repeated searches return identical plans and counters
//! 2. The goal predicate is exactly "every threshold met"
//! 3. A recipe's effect is `state + produces - consumes`, slot by slot
//! 4. Expanding the same state twice yields the same transitions
//! 5. A zero or negative budget fails immediately without error
//! 6. The pruning estimate is infinite exactly when a tool or cap is exceeded
//! 7. A slot at `i64::MAX` blocks production instead of overflowing

use crafter_kernel::carrier::inventory::InventoryV1;
use crafter_search::contract::ExpansionGraph;
use crafter_search::heuristic::{Heuristic, PruningTableV1, ZeroHeuristic};
use crafter_search::outcome::TerminationReasonV1;
use crafter_search::policy::SearchPolicyV1;
use crafter_search::search::search;
use lock_tests::fixtures::{pairs, plank_world, recipe, tool_chain_world, world};

/// Every inventory over `slots` slots with quantities in `0..=max`.
fn grid(slots: usize, max: i64) -> Vec<InventoryV1> {
    let mut out = vec![Vec::new()];
    for _ in 0..slots {
        out = out
            .into_iter()
            .flat_map(|prefix: Vec<i64>| {
                (0..=max).map(move |q| {
                    let mut next = prefix.clone();
                    next.push(q);
                    next
                })
            })
            .collect();
    }
    out.into_iter().map(InventoryV1::from_quantities).collect()
}

// ---------------------------------------------------------------------------
// 1. Determinism
// ---------------------------------------------------------------------------

/// ACCEPTANCE: SEARCH-DETERMINISM
#[test]
fn repeated_searches_are_identical() {
    let world = tool_chain_world();
    let policy = SearchPolicyV1::default();
    let first = search(&world.graph, world.start.clone(), &world.goal, &policy, &ZeroHeuristic);
    for _ in 0..5 {
        let again = search(&world.graph, world.start.clone(), &world.goal, &policy, &ZeroHeuristic);
        assert_eq!(again.plan, first.plan);
        assert_eq!(again.termination_reason, first.termination_reason);
        assert_eq!(again.stats.expansions, first.stats.expansions);
        assert_eq!(again.stats.states_admitted, first.stats.states_admitted);
    }
    assert!(first.is_goal_reached());
}

// ---------------------------------------------------------------------------
// 2. Goal predicate
// ---------------------------------------------------------------------------

/// ACCEPTANCE: GOAL-THRESHOLD
#[test]
fn goal_holds_iff_every_threshold_met() {
    let world = tool_chain_world();
    let goal = crafter_kernel::operators::goal::GoalV1::compile(
        &pairs(&[("plank", 2), ("stick", 1)]),
        &world.catalog,
    )
    .expect("goal");
    let plank = world.catalog.index_of("plank").expect("plank");
    let stick = world.catalog.index_of("stick").expect("stick");

    for state in grid(world.catalog.len(), 2) {
        let q = state.quantities();
        let expected = q[plank] >= 2 && q[stick] >= 1;
        assert_eq!(goal.is_satisfied(&state), expected, "state {q:?}");
    }
}

// ---------------------------------------------------------------------------
// 3. Effect
// ---------------------------------------------------------------------------

/// ACCEPTANCE: RECIPE-EFFECT
#[test]
fn effect_adds_produces_and_subtracts_consumes() {
    let world = tool_chain_world();
    let recipe = world.graph.recipe("craft stick at bench").expect("recipe");
    let plank = world.catalog.index_of("plank").expect("plank");
    let stick = world.catalog.index_of("stick").expect("stick");

    let mut checked = 0;
    for state in grid(world.catalog.len(), 3) {
        if !recipe.precondition(&state) {
            continue;
        }
        let after = recipe.effect(&state);
        assert_eq!(after.len(), state.len(), "slot layout unchanged");
        for (slot, (&before, &now)) in state.quantities().iter().zip(after.quantities()).enumerate() {
            let delta = if slot == plank {
                -2
            } else if slot == stick {
                4
            } else {
                0
            };
            assert_eq!(now, before + delta, "slot {slot} of {:?}", state.quantities());
        }
        checked += 1;
    }
    assert!(checked > 0, "grid contains applicable states");
}

/// ACCEPTANCE: RECIPE-EFFECT
#[test]
fn requires_is_presence_only() {
    let world = tool_chain_world();
    let recipe = world.graph.recipe("craft stick at bench").expect("recipe");
    let without_bench = InventoryV1::with_overrides(&world.catalog, [("plank", 2)]).expect("state");
    let with_bench =
        InventoryV1::with_overrides(&world.catalog, [("plank", 2), ("bench", 1)]).expect("state");

    assert!(!recipe.precondition(&without_bench));
    assert!(recipe.precondition(&with_bench));
    let after = recipe.effect(&with_bench);
    assert_eq!(after.quantity(&world.catalog, "bench"), Ok(1), "tool is not consumed");
}

// ---------------------------------------------------------------------------
// 4. Idempotent expansion
// ---------------------------------------------------------------------------

/// ACCEPTANCE: EXPAND-IDEMPOTENT
#[test]
fn expanding_twice_yields_same_transitions() {
    let world = tool_chain_world();
    for state in grid(world.catalog.len(), 2) {
        let first: Vec<_> = world.graph.expand(&state).collect();
        let second: Vec<_> = world.graph.expand(&state).collect();
        assert_eq!(first, second, "state {:?}", state.quantities());
    }
}

// ---------------------------------------------------------------------------
// 5. Zero and negative budgets
// ---------------------------------------------------------------------------

/// ACCEPTANCE: BUDGET-ZERO
#[test]
fn zero_and_negative_budgets_fail_immediately() {
    let world = plank_world();
    for secs in [0.0, -1.0, -0.001] {
        let policy = SearchPolicyV1::from_secs_f64(secs).expect("valid policy");
        let result = search(&world.graph, world.start.clone(), &world.goal, &policy, &ZeroHeuristic);
        assert_eq!(
            result.termination_reason,
            TerminationReasonV1::TimeBudgetExhausted,
            "budget {secs}"
        );
        assert!(result.plan.is_none());
        assert_eq!(result.stats.expansions, 0);
    }
}

/// ACCEPTANCE: BUDGET-ZERO
#[test]
fn nan_budget_is_rejected() {
    assert!(SearchPolicyV1::from_secs_f64(f64::NAN).is_err());
}

// ---------------------------------------------------------------------------
// 6. Pruning estimate
// ---------------------------------------------------------------------------

/// ACCEPTANCE: HEURISTIC-PRUNING
#[test]
fn pruning_is_infinite_exactly_when_overstocked() {
    let world = tool_chain_world();
    let table = PruningTableV1 {
        tools: vec!["bench".into(), "pickaxe".into()],
        material_caps: pairs(&[("plank", 3), ("stick", 2)]),
    };
    let heuristic = table.compile(&world.catalog).expect("tables compile");
    let bench = world.catalog.index_of("bench").expect("bench");
    let pickaxe = world.catalog.index_of("pickaxe").expect("pickaxe");
    let plank = world.catalog.index_of("plank").expect("plank");
    let stick = world.catalog.index_of("stick").expect("stick");

    for state in grid(world.catalog.len(), 4) {
        let q = state.quantities();
        let over = q[bench] > 1 || q[pickaxe] > 1 || q[plank] > 3 || q[stick] > 2;
        let h = heuristic.estimate(&state);
        if over {
            assert!(h.is_infinite(), "state {q:?}");
        } else {
            assert!(h.abs() < f64::EPSILON, "state {q:?}");
        }
    }
}

// ---------------------------------------------------------------------------
// 7. Quantity bounds
// ---------------------------------------------------------------------------

/// ACCEPTANCE: QUANTITY-BOUNDS
#[test]
fn full_slot_blocks_production_without_overflow() {
    let world = world(
        &["wood", "plank"],
        &[("wood", i64::MAX)],
        &[("plank", 1)],
        &[recipe("punch for wood", &[], &[("wood", 1)], 4.0)],
    );

    assert_eq!(world.graph.expand(&world.start).count(), 0);
    let result = search(
        &world.graph,
        world.start.clone(),
        &world.goal,
        &SearchPolicyV1::default(),
        &ZeroHeuristic,
    );
    assert_eq!(result.termination_reason, TerminationReasonV1::FrontierExhausted);
    assert!(result.plan.is_none());
    assert_eq!(result.stats.expansions, 1);
}

/// ACCEPTANCE: QUANTITY-BOUNDS
#[test]
fn search_stops_producing_at_the_bound() {
    let world = world(
        &["wood", "plank"],
        &[("wood", i64::MAX - 2)],
        &[("plank", 1)],
        &[recipe("punch for wood", &[], &[("wood", 1)], 4.0)],
    );
    let result = search(
        &world.graph,
        world.start.clone(),
        &world.goal,
        &SearchPolicyV1::default(),
        &ZeroHeuristic,
    );
    assert_eq!(result.termination_reason, TerminationReasonV1::FrontierExhausted);
    assert_eq!(result.stats.states_admitted, 3, "MAX-2, MAX-1, MAX");
}
