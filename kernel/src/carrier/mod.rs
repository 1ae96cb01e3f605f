//! Carrier module: the item catalog and the inventory state it indexes.
//!
//! Depends on `proof` for digests only.

pub mod catalog;
pub mod inventory;
