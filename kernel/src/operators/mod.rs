//! Operators module: recipe compilation and the goal predicate.
//!
//! Depends on `carrier`. Item names are resolved here and nowhere later.

pub mod goal;
pub mod recipe;
