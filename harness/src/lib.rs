//! Crafter Harness: definition loading and run orchestration.
//!
//! The harness turns a persisted crafting definition into a compiled
//! problem, runs the search over it, verifies the plan by replay, and
//! packages the result as a canonical run report.
//!
//! The harness does NOT implement search logic; it delegates to
//! `crafter_search`. Worlds provide definitions only; the harness owns
//! orchestration.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod definition;
pub mod error;
pub mod problem;
pub mod render;
pub mod runner;
pub mod worlds;
