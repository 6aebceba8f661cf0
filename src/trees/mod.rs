//! Tree-shaped containers.
//!
//! # Submodules
//!
//! - [`BinaryTree`]: complete binary tree filled in level order
//! - [`BinarySearchTree`]: unbalanced ordered tree, duplicates kept on the right
//! - [`AvlTree`]: height-balanced ordered set
//! - [`Heap`]: array-backed binary heap, min or max ordered
//!
//! [`BinaryTree`] and [`BinarySearchTree`] share the boxed [`TreeNode`] and the
//! iterative traversals, drop and clone in `node`, so deep degenerate trees never
//! recurse.

mod avl_tree;
mod binary_search_tree;
mod binary_tree;
mod heap;
mod node;

pub use avl_tree::*;
pub use binary_search_tree::*;
pub use binary_tree::*;
pub use heap::*;
pub use node::TreeNode;
