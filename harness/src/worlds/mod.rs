//! Built-in crafting worlds.

pub mod minecraft;
