//! Crafter Search: time-boxed best-first search over inventory states.
//!
//! This crate provides the search layer of the crafting planner. It depends
//! only on `crafter_kernel` and does NOT depend on `crafter_harness`.
//!
//! # Crate dependency graph
//!
//! ```text
//! crafter_kernel  ←  crafter_search  ←  crafter_harness
//! (state, recipes)   (frontier, loop)    (loading, runner, worlds)
//! ```
//!
//! # Key types
//!
//! - [`graph::RecipeGraph`]: compiled recipe set as a lazy expansion graph
//! - [`heuristic::PruningHeuristic`]: the inadmissible over-stock pruner
//! - [`node::SearchNodeV1`]: immutable arena node with cost and parent link
//! - [`policy::SearchPolicyV1`]: wall-clock budget and optional expansion cap
//! - [`search::search`]: the search entry point
//! - [`plan::PlanV1`]: the `(state, action)` sequence on success
//! - [`replay::replay_plan`]: independent plan verification

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod contract;
pub mod error;
pub mod frontier;
pub mod graph;
pub mod heuristic;
pub mod node;
pub mod outcome;
pub mod plan;
pub mod policy;
pub mod replay;
pub mod search;
