//! Proof module: canonical JSON and content hashing.
//!
//! Leaf of the kernel. Imports nothing internal.

pub mod canon;
pub mod hash;
