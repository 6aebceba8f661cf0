//! Searches over arrays, graphs, trees and hash tables.
//!
//! The array searches return the index of a matching element. All of them but
//! [`linear_search`] expect input sorted ascending; on unsorted input they may
//! miss a present element but never report a wrong index.
//!
//! # Submodules
//!
//! - [`linear_search`], [`binary_search`], [`exponential_search`],
//!   [`interpolation_search`], [`fibonacci_search`]: array searches
//! - [`AdjacencyList`]: BFS/DFS reachability and shortest paths over a directed graph
//! - [`bst_search`]: lookup in a [`BinarySearchTree`](crate::trees::BinarySearchTree)
//! - [`ModuloTable`]: chained lookup keyed by `key % size`
//! - [`SearchAlgorithm`]: name-based dispatch used by the command line

mod algorithm;
mod binary;
mod exponential;
mod fibonacci;
mod graph_search;
mod hash_search;
mod interpolation;
mod linear;
mod tree_search;

pub use algorithm::*;
pub use binary::*;
pub use exponential::*;
pub use fibonacci::*;
pub use graph_search::*;
pub use hash_search::*;
pub use interpolation::*;
pub use linear::*;
pub use tree_search::*;
