//! Probabilistic ordered set.
//!
//! # Submodules
//!
//! - [`SkipList`]: a stack of sorted linked lists over an index arena; each
//!   level holds a random subset of the level below it
//! - [`SkipListParams`]: maximum height, promotion probability and seed of the
//!   level generator

mod level_generator;
mod list;

pub use level_generator::SkipListParams;
pub use list::*;
