//! Plan replay verification.
//!
//! Re-derives every step of a plan from the recipe set and compares it to
//! what the plan records. A plan that replays cleanly is a valid witness:
//! each action was applicable, each recorded state is the action's effect,
//! the last state meets the goal, and the recorded cost is the sum of the
//! action costs.

use crafter_kernel::operators::goal::GoalV1;

use crate::graph::RecipeGraph;
use crate::plan::PlanV1;

/// Typed replay failure. `step` is the index into `PlanV1::steps`.
#[derive(Debug, Clone, PartialEq)]
pub enum ReplayFailure {
    /// The plan has no steps at all.
    EmptyPlan,
    /// Step 0 names an action; the start has none.
    StartHasAction { action: String },
    /// A step after the start carries no action.
    MissingAction { step: usize },
    /// A step names a recipe the graph does not contain.
    UnknownRecipe { step: usize, action: String },
    /// The recipe's precondition does not hold on the prior state.
    PreconditionFailed { step: usize, action: String },
    /// The recorded state differs from the recipe's effect.
    StateMismatch { step: usize, action: String },
    /// The final state does not satisfy the goal.
    GoalNotSatisfied,
    /// The recorded total cost differs from the recomputed one.
    CostMismatch { recorded: f64, recomputed: f64 },
}

impl std::fmt::Display for ReplayFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyPlan => write!(f, "plan has no steps"),
            Self::StartHasAction { action } => {
                write!(f, "step 0: start step must not carry an action, found '{action}'")
            }
            Self::MissingAction { step } => write!(f, "step {step}: no action recorded"),
            Self::UnknownRecipe { step, action } => {
                write!(f, "step {step}: unknown recipe '{action}'")
            }
            Self::PreconditionFailed { step, action } => {
                write!(f, "step {step}: precondition of '{action}' does not hold")
            }
            Self::StateMismatch { step, action } => {
                write!(f, "step {step}: recorded state is not the effect of '{action}'")
            }
            Self::GoalNotSatisfied => write!(f, "final state does not satisfy the goal"),
            Self::CostMismatch {
                recorded,
                recomputed,
            } => write!(
                f,
                "recorded total cost {recorded} does not match recomputed {recomputed}"
            ),
        }
    }
}

impl std::error::Error for ReplayFailure {}

/// Replay `plan` against `graph` and `goal`.
///
/// Costs are re-accumulated in step order, the same order the search
/// accumulates them, so an untampered plan matches exactly.
///
/// # Errors
///
/// Returns the first [`ReplayFailure`] found, scanning from the start.
#[allow(clippy::float_cmp)]
pub fn replay_plan(plan: &PlanV1, graph: &RecipeGraph, goal: &GoalV1) -> Result<(), ReplayFailure> {
    let (start, rest) = plan.steps.split_first().ok_or(ReplayFailure::EmptyPlan)?;
    if let Some(action) = &start.action {
        return Err(ReplayFailure::StartHasAction {
            action: action.to_string(),
        });
    }

    let mut prior = &start.state;
    let mut cost = 0.0_f64;
    for (offset, step) in rest.iter().enumerate() {
        let index = offset + 1;
        let action = step
            .action
            .as_deref()
            .ok_or(ReplayFailure::MissingAction { step: index })?;
        let recipe = graph
            .recipe(action)
            .ok_or_else(|| ReplayFailure::UnknownRecipe {
                step: index,
                action: action.to_string(),
            })?;
        if !recipe.precondition(prior) {
            return Err(ReplayFailure::PreconditionFailed {
                step: index,
                action: action.to_string(),
            });
        }
        if recipe.effect(prior) != step.state {
            return Err(ReplayFailure::StateMismatch {
                step: index,
                action: action.to_string(),
            });
        }
        cost += recipe.cost();
        prior = &step.state;
    }

    if !goal.is_satisfied(prior) {
        return Err(ReplayFailure::GoalNotSatisfied);
    }
    if cost != plan.total_cost {
        return Err(ReplayFailure::CostMismatch {
            recorded: plan.total_cost,
            recomputed: cost,
        });
    }
    Ok(())
}
