use std::fmt;

use crate::{
    errors::{ContainerError, Result},
    trees::node::{self, Link, TreeNode},
};

/// Unbalanced binary search tree.
///
/// # Invariants
/// - every value in a node's left subtree is strictly smaller than the node's value
/// - every value in its right subtree is greater than or equal to it, so
///   duplicates accumulate on the right
///
/// All operations walk a single root-to-leaf path and cost O(height).
pub struct BinarySearchTree<T> {
    root: Link<T>,
    len: usize,
}

impl<T: Ord> BinarySearchTree<T> {
    pub fn new() -> Self {
        BinarySearchTree { root: None, len: 0 }
    }

    pub fn insert(&mut self, data: T) {
        let mut cursor = &mut self.root;
        while let Some(node) = cursor {
            cursor = if data < node.data {
                &mut node.left
            } else {
                &mut node.right
            };
        }
        *cursor = Some(TreeNode::leaf(data));
        self.len += 1;
    }

    /// The link holding the shallowest node equal to `data`, or the empty link
    /// where it would be inserted.
    fn slot_of(&mut self, data: &T) -> &mut Link<T> {
        let mut cursor = &mut self.root;
        while cursor.as_ref().is_some_and(|node| *data != node.data) {
            match cursor {
                Some(node) => {
                    cursor = if *data < node.data {
                        &mut node.left
                    } else {
                        &mut node.right
                    }
                }
                None => break,
            }
        }
        cursor
    }

    /// Removes one occurrence of `data`.
    ///
    /// # Returns
    /// `true` if a node was removed
    pub fn delete(&mut self, data: &T) -> bool {
        let removed = node::unlink(self.slot_of(data));
        if removed {
            self.len -= 1;
        }
        removed
    }

    pub fn contains(&self, data: &T) -> bool {
        let mut cursor = self.root();
        while let Some(node) = cursor {
            cursor = match data.cmp(&node.data) {
                std::cmp::Ordering::Less => node.left(),
                std::cmp::Ordering::Greater => node.right(),
                std::cmp::Ordering::Equal => return true,
            };
        }
        false
    }

    /// Smallest stored value.
    ///
    /// # Errors
    /// [`ContainerError::Empty`] on an empty tree.
    pub fn min(&self) -> Result<&T> {
        let mut node = self
            .root()
            .ok_or(ContainerError::empty("Binary search tree"))?;
        while let Some(left) = node.left() {
            node = left;
        }
        Ok(&node.data)
    }

    /// Largest stored value.
    ///
    /// # Errors
    /// [`ContainerError::Empty`] on an empty tree.
    pub fn max(&self) -> Result<&T> {
        let mut node = self
            .root()
            .ok_or(ContainerError::empty("Binary search tree"))?;
        while let Some(right) = node.right() {
            node = right;
        }
        Ok(&node.data)
    }
}

impl<T> BinarySearchTree<T> {
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    /// Read-only view of the root node, used by tree search algorithms.
    pub fn root(&self) -> Option<&TreeNode<T>> {
        self.root.as_deref()
    }

    pub fn inorder(&self) -> Vec<&T> {
        node::inorder(self.root())
    }

    pub fn preorder(&self) -> Vec<&T> {
        node::preorder(self.root())
    }

    pub fn postorder(&self) -> Vec<&T> {
        node::postorder(self.root())
    }

    pub fn level_order(&self) -> Vec<&T> {
        node::level_order(self.root())
    }

    pub fn height(&self) -> usize {
        node::height(self.root())
    }

    pub fn clear(&mut self) {
        node::drop_subtree(&mut self.root);
        self.len = 0;
    }
}

impl<T> Drop for BinarySearchTree<T> {
    fn drop(&mut self) {
        // sorted input yields a chain as deep as the tree is long
        node::drop_subtree(&mut self.root);
    }
}

impl<T: Clone> Clone for BinarySearchTree<T> {
    fn clone(&self) -> Self {
        BinarySearchTree {
            root: node::clone_subtree(&self.root),
            len: self.len,
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for BinarySearchTree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BinarySearchTree")
            .field("len", &self.len)
            .field("inorder", &node::inorder(self.root.as_deref()))
            .finish()
    }
}

impl<T: Ord> Default for BinarySearchTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> FromIterator<T> for BinarySearchTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = BinarySearchTree::new();
        for item in iter {
            tree.insert(item);
        }
        tree
    }
}
