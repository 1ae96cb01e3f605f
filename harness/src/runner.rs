//! Harness runner: search, replay, and an auditable run report.
//!
//! # Pipeline
//!
//! ```text
//! resolve heuristic → search() → replay_plan() (plan only)
//!   → build report JSON → canonical bytes → digest
//! ```
//!
//! A plan is never reported unless it replays. The report is canonical
//! JSON and leaves out wall time, so two runs that reach the same result
//! produce byte-identical reports.

use log::{info, warn};

use crafter_kernel::proof::canon::canonical_json_bytes;
use crafter_kernel::proof::hash::{canonical_hash, ContentHash, DOMAIN_RUN_REPORT};
use crafter_kernel::operators::recipe::recipe_set_digest;
use crafter_search::heuristic::{PruningHeuristic, PruningTableV1, ZeroHeuristic};
use crafter_search::policy::SearchPolicyV1;
use crafter_search::replay::replay_plan;
use crafter_search::search::{search, SearchResult};

use crate::error::HarnessError;
use crate::problem::CraftingProblemV1;

/// Report schema identifier.
pub const RUN_REPORT_SCHEMA: &str = "crafter.run_report.v1";

/// Which heuristic a run uses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeuristicInputV1 {
    /// Uniform-cost search.
    Zero,
    /// Pruning with the given tables.
    Table(PruningTableV1),
    /// Pruning with the problem's own tables.
    FromDefinition,
}

/// Everything a run produced.
#[derive(Debug, Clone)]
pub struct RunOutcomeV1 {
    /// The raw search result (plan, reason, counters).
    pub result: SearchResult,
    /// Plan digest, when a plan was found.
    pub plan_digest: Option<ContentHash>,
    /// Canonical JSON report bytes.
    pub report_bytes: Vec<u8>,
    /// `canonical_hash(DOMAIN_RUN_REPORT, report_bytes)`.
    pub report_digest: ContentHash,
}

/// Run one planning search over a compiled problem.
///
/// # Errors
///
/// Returns [`HarnessError::MissingHeuristic`] for `FromDefinition` on a
/// problem without tables, [`HarnessError::Compile`] if a table names an
/// unknown item, and [`HarnessError::Replay`] if the returned plan fails
/// verification. Running out of budget is not an error.
pub fn run_plan(
    problem: &CraftingProblemV1,
    policy: &SearchPolicyV1,
    heuristic: &HeuristicInputV1,
) -> Result<RunOutcomeV1, HarnessError> {
    // The problem's own tables were compiled with the problem; explicit
    // tables are compiled here, against the problem's catalog.
    let compiled;
    let pruning: Option<&PruningHeuristic> = match heuristic {
        HeuristicInputV1::Zero => None,
        HeuristicInputV1::Table(table) => {
            compiled = table.compile(&problem.catalog)?;
            Some(&compiled)
        }
        HeuristicInputV1::FromDefinition => {
            Some(problem.pruning.as_ref().ok_or(HarnessError::MissingHeuristic)?)
        }
    };

    let result = match pruning {
        Some(pruning) => search(&problem.graph, problem.start.clone(), &problem.goal, policy, pruning),
        None => search(
            &problem.graph,
            problem.start.clone(),
            &problem.goal,
            policy,
            &ZeroHeuristic,
        ),
    };

    if let Some(plan) = &result.plan {
        replay_plan(plan, &problem.graph, &problem.goal)?;
    }
    let plan_digest = result.plan.as_ref().map(|p| p.digest(&problem.catalog));

    let heuristic_json = match pruning {
        Some(pruning) => serde_json::json!({"tables": pruning.table().to_json(), "type": "pruning"}),
        None => serde_json::json!({"type": "zero"}),
    };
    let report = serde_json::json!({
        "catalog_digest": problem.catalog.digest().as_str(),
        "goal": problem.goal.to_json(&problem.catalog),
        "heuristic": heuristic_json,
        "plan": result.plan.as_ref().map(|p| p.to_json(&problem.catalog)),
        "plan_digest": plan_digest.as_ref().map(ContentHash::as_str),
        "policy": policy.to_json(),
        "recipe_set_digest": recipe_set_digest(problem.graph.recipes(), &problem.catalog).as_str(),
        "schema_version": RUN_REPORT_SCHEMA,
        "start_fingerprint": problem.start.fingerprint().as_str(),
        "stats": result.stats.to_json(),
        "termination_reason": result.termination_reason.as_str(),
    });
    let report_bytes = canonical_json_bytes(&report);
    let report_digest = canonical_hash(DOMAIN_RUN_REPORT, &report_bytes);

    match &result.plan {
        Some(plan) => info!(
            "Plan found: actions={}, total_cost={}, expansions={}, elapsed={:?}",
            plan.action_count(),
            plan.total_cost,
            result.stats.expansions,
            result.stats.elapsed
        ),
        None => warn!(
            "No plan from {} within budget: reason={}, expansions={}, elapsed={:?}",
            problem.start.display(&problem.catalog),
            result.termination_reason,
            result.stats.expansions,
            result.stats.elapsed
        ),
    }

    Ok(RunOutcomeV1 {
        result,
        plan_digest,
        report_bytes,
        report_digest,
    })
}
