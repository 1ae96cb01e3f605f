//! Crafter Kernel: the deterministic state model of the crafting planner.
//!
//! # API Surface
//!
//! - [`carrier::catalog::ItemCatalogV1`] -- the canonical item-index table for a run
//! - [`carrier::inventory::InventoryV1`] -- fixed-schema inventory snapshot
//! - [`operators::recipe::compile_recipes`] -- compile rule definitions into executable recipes
//! - [`operators::goal::GoalV1::compile`] -- compile a goal threshold map into a predicate
//! - [`proof::hash::canonical_hash`] -- the one place content hashes are computed
//!
//! # Module Dependency Direction
//!
//! `proof` ← `carrier` ← `operators`
//!
//! One-way only. No cycles. `proof` depends on nothing internal.
//! The kernel never reads files, never prints, and never logs.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod carrier;
pub mod operators;
pub mod proof;
