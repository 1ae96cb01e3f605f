//! Planning scenario lock tests.
//!
//! Proves:
//! 1. A one-step plan is found, with the exact final state and cost
//! 2. An unreachable goal over an infinite state space ends on the budget
//! 3. A finite space without the goal fails at once, not at the deadline
//! 4. Which of two routes to an intermediate wins depends on recipe order
//!    when the costlier route marks the intermediate visited first

use std::time::Duration;

use crafter_search::heuristic::ZeroHeuristic;
use crafter_search::outcome::TerminationReasonV1;
use crafter_search::policy::SearchPolicyV1;
use crafter_search::replay::replay_plan;
use crafter_search::search::search;
use lock_tests::fixtures::{plank_world, two_route_world, unreachable_world, World};

fn run(world: &World, policy: &SearchPolicyV1) -> crafter_search::search::SearchResult {
    search(
        &world.graph,
        world.start.clone(),
        &world.goal,
        policy,
        &ZeroHeuristic,
    )
}

// ---------------------------------------------------------------------------
// A. One-step plan
// ---------------------------------------------------------------------------

/// ACCEPTANCE: PLAN-SCENARIO-A
#[test]
fn one_step_plank_plan() {
    let world = plank_world();
    let result = run(&world, &SearchPolicyV1::default());

    assert_eq!(result.termination_reason, TerminationReasonV1::GoalReached);
    let plan = result.plan.expect("plan");
    assert_eq!(plan.steps.len(), 2);
    assert!(plan.steps[0].action.is_none());
    assert_eq!(plan.steps[0].state.quantities(), &[1, 0]);
    assert_eq!(plan.steps[1].action.as_deref(), Some("craft_plank"));
    assert_eq!(plan.steps[1].state.quantities(), &[0, 4]);
    assert!((plan.total_cost - 1.0).abs() < f64::EPSILON);
    assert_eq!(replay_plan(&plan, &world.graph, &world.goal), Ok(()));
}

// ---------------------------------------------------------------------------
// B. Unreachable goal
// ---------------------------------------------------------------------------

/// ACCEPTANCE: PLAN-SCENARIO-B
#[test]
fn unreachable_goal_ends_on_budget_without_plan() {
    let world = unreachable_world();
    let policy = SearchPolicyV1 {
        time_budget: Duration::from_millis(100),
        max_expansions: None,
    };
    let result = run(&world, &policy);

    assert_eq!(
        result.termination_reason,
        TerminationReasonV1::TimeBudgetExhausted
    );
    assert!(result.plan.is_none(), "no partial plan on failure");
    assert!(result.stats.expansions > 0);
    assert!(result.stats.elapsed >= policy.time_budget);
}

/// ACCEPTANCE: PLAN-SCENARIO-B
#[test]
fn unreachable_goal_with_expansion_cap_is_distinguishable() {
    let world = unreachable_world();
    let policy = SearchPolicyV1::default().with_max_expansions(200);
    let result = run(&world, &policy);

    assert_eq!(
        result.termination_reason,
        TerminationReasonV1::ExpansionBudgetExhausted
    );
    assert!(result.plan.is_none());
    assert_eq!(result.stats.expansions, 200);
}

/// ACCEPTANCE: PLAN-SCENARIO-B
#[test]
fn finite_space_without_goal_fails_before_deadline() {
    let world = lock_tests::fixtures::world(
        &["wood", "plank", "diamond"],
        &[("wood", 2)],
        &[("diamond", 1)],
        &[lock_tests::fixtures::recipe(
            "craft plank",
            &[("wood", 1)],
            &[("plank", 4)],
            1.0,
        )],
    );
    let result = run(&world, &SearchPolicyV1::default());

    assert_eq!(
        result.termination_reason,
        TerminationReasonV1::FrontierExhausted
    );
    assert!(!result.is_goal_reached());
    assert!(result.plan.is_none());
    assert_eq!(result.stats.expansions, 3);
    assert!(result.stats.elapsed < SearchPolicyV1::DEFAULT_TIME_BUDGET);
}

// ---------------------------------------------------------------------------
// C. Route ordering sensitivity
// ---------------------------------------------------------------------------

/// ACCEPTANCE: PLAN-SCENARIO-C
#[test]
fn cheap_route_declared_first_gives_minimum_cost() {
    let world = two_route_world(true);
    let plan = run(&world, &SearchPolicyV1::default())
        .plan
        .expect("plan");

    assert!((plan.total_cost - 2.0).abs() < f64::EPSILON);
    assert_eq!(
        plan.actions().collect::<Vec<_>>(),
        ["cheap wood", "craft plank"]
    );
}

/// A state is marked visited when first admitted and never re-opened, so
/// the costly route that reaches `{wood: 1}` first keeps it.
///
/// ACCEPTANCE: PLAN-SCENARIO-C
#[test]
fn costly_route_declared_first_is_kept() {
    let world = two_route_world(false);
    let result = run(&world, &SearchPolicyV1::default());
    let plan = result.plan.expect("plan");

    assert!((plan.total_cost - 6.0).abs() < f64::EPSILON);
    assert_eq!(
        plan.actions().collect::<Vec<_>>(),
        ["costly wood", "craft plank"]
    );
    assert!(
        result.stats.duplicates_suppressed >= 1,
        "the cheap route to the same state was suppressed"
    );
    assert_eq!(replay_plan(&plan, &world.graph, &world.goal), Ok(()));
}
