use std::cmp::Ordering;

use crate::trees::{BinarySearchTree, TreeNode};

/// Descends from the root towards `key`.
///
/// # Returns
/// The matching node, if any, and the number of nodes visited on the way
fn descend<'a, T: Ord>(tree: &'a BinarySearchTree<T>, key: &T) -> (Option<&'a TreeNode<T>>, usize) {
    let mut visited = 0;
    let mut cursor = tree.root();
    while let Some(node) = cursor {
        visited += 1;
        cursor = match key.cmp(node.value()) {
            Ordering::Equal => return (Some(node), visited),
            Ordering::Less => node.left(),
            Ordering::Greater => node.right(),
        };
    }
    (None, visited)
}

/// The stored value equal to `key`, found in O(height).
pub fn bst_search<'a, T: Ord>(tree: &'a BinarySearchTree<T>, key: &T) -> Option<&'a T> {
    descend(tree, key).0.map(TreeNode::value)
}

/// Nodes inspected by [`bst_search`] for `key`, hit or miss.
pub fn bst_search_depth<T: Ord>(tree: &BinarySearchTree<T>, key: &T) -> usize {
    descend(tree, key).1
}
