//! Prefix tree over `char` sequences.
//!
//! # Submodules
//!
//! - [`Trie`]: word multiset with prefix queries

mod prefix_tree;

pub use prefix_tree::*;
