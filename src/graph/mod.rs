//! Weighted graphs stored as ordered adjacency maps.
//!
//! # Submodules
//!
//! - [`Graph`]: directed or undirected graph with traversals and connectivity queries

mod adjacency_map;

pub use adjacency_map::*;
