//! A catalog of classic data structures, algorithms and design patterns.
//!
//! Every unit is independent: containers in [`linear`], [`trees`], [`hashing`],
//! [`graph`], [`trie`] and [`skip_list`]; algorithms in [`sorting`] and
//! [`searching`]; the GoF catalog in [`patterns`]; SQL scripts in [`sql`].
//! Container operations on an empty or out-of-bounds target return
//! [`errors::ContainerError`] rather than panicking.
//!
//! ```
//! use classics::{linear::Stack, sorting::quick_sort, trees::AvlTree};
//!
//! let mut stack = Stack::new();
//! stack.push(1);
//! assert_eq!(stack.pop(), Ok(1));
//! assert!(stack.pop().is_err());
//!
//! let mut values = vec![3, 1, 2];
//! quick_sort(&mut values);
//! assert_eq!(values, [1, 2, 3]);
//!
//! let tree: AvlTree<u32> = (0..100).collect();
//! assert!(tree.is_balanced());
//! ```

pub mod demo;
pub mod errors;
pub mod fs;
pub mod graph;
pub mod hashing;
pub mod linear;
pub mod patterns;
pub mod searching;
pub mod skip_list;
pub mod sorting;
pub mod sql;
pub mod statistics;
pub mod trees;
pub mod trie;
