//! Plain-text rendering of a run for people.
//!
//! Diagnostic output only: nothing parses it and nothing hashes it.

use std::fmt::Write;

use crafter_kernel::carrier::catalog::ItemCatalogV1;
use crafter_search::plan::PlanV1;
use crafter_search::search::SearchResult;

/// Render a plan, one step per line:
///
/// ```text
/// start: {wood: 1}
/// 1. craft_plank -> {plank: 4}
/// total cost: 1
/// ```
#[must_use]
pub fn render_plan(plan: &PlanV1, catalog: &ItemCatalogV1) -> String {
    let mut out = String::new();
    for (i, step) in plan.steps.iter().enumerate() {
        let state = step.state.display(catalog);
        let _ = match &step.action {
            Some(action) => writeln!(out, "{i}. {action} -> {state}"),
            None => writeln!(out, "start: {state}"),
        };
    }
    let _ = writeln!(out, "total cost: {}", plan.total_cost);
    out
}

/// Render a whole search result: the plan, or the failure reason.
#[must_use]
pub fn render_result(result: &SearchResult, catalog: &ItemCatalogV1) -> String {
    let mut out = match &result.plan {
        Some(plan) => render_plan(plan, catalog),
        None => format!("no plan found ({})\n", result.termination_reason),
    };
    let _ = writeln!(
        out,
        "expansions: {}, states admitted: {}, elapsed: {:.3}s",
        result.stats.expansions,
        result.stats.states_admitted,
        result.stats.elapsed.as_secs_f64()
    );
    out
}
