use std::{collections::VecDeque, fmt};

use crate::trees::node::{self, Link, TreeNode};

/// Which child to follow from a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    Left,
    Right,
}

/// A binary tree that keeps itself complete by filling the first free child slot
/// in level order.
///
/// No ordering is imposed on the values, so lookups and deletes scan the tree
/// breadth first in O(n).
pub struct BinaryTree<T> {
    root: Link<T>,
    len: usize,
}

impl<T> BinaryTree<T> {
    pub fn new() -> Self {
        BinaryTree { root: None, len: 0 }
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn root(&self) -> Option<&TreeNode<T>> {
        self.root.as_deref()
    }

    /// Path from the root to the first node, in level order, matching `pred`.
    fn path_where(&self, mut pred: impl FnMut(&TreeNode<T>) -> bool) -> Option<Vec<Side>> {
        let mut queue: VecDeque<(&TreeNode<T>, Vec<Side>)> =
            self.root().map(|root| (root, Vec::new())).into_iter().collect();

        while let Some((node, path)) = queue.pop_front() {
            if pred(node) {
                return Some(path);
            }
            for (side, child) in [(Side::Left, node.left()), (Side::Right, node.right())] {
                if let Some(child) = child {
                    let mut child_path = path.clone();
                    child_path.push(side);
                    queue.push_back((child, child_path));
                }
            }
        }
        None
    }

    /// The link reached by following `path`: the root link for an empty path.
    fn slot_at(&mut self, path: &[Side]) -> &mut Link<T> {
        let mut link = &mut self.root;
        for side in path {
            match link {
                Some(node) => {
                    link = match side {
                        Side::Left => &mut node.left,
                        Side::Right => &mut node.right,
                    }
                }
                None => break,
            }
        }
        link
    }

    /// Places `data` in the first empty child slot found in level order.
    pub fn insert(&mut self, data: T) {
        let path = match self.path_where(|node| node.left.is_none() || node.right.is_none()) {
            Some(mut path) => {
                let parent = self.slot_at(&path).as_deref();
                let side = match parent {
                    Some(parent) if parent.left.is_none() => Side::Left,
                    _ => Side::Right,
                };
                path.push(side);
                path
            }
            None => Vec::new(),
        };
        *self.slot_at(&path) = Some(TreeNode::leaf(data));
        self.len += 1;
    }

    pub fn level_order(&self) -> Vec<&T> {
        node::level_order(self.root())
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

    pub fn height(&self) -> usize {
        node::height(self.root())
    }

    pub fn clear(&mut self) {
        node::drop_subtree(&mut self.root);
        self.len = 0;
    }
}

impl<T> Drop for BinaryTree<T> {
    fn drop(&mut self) {
        // deletes splice subtrees upward and can leave long chains behind
        node::drop_subtree(&mut self.root);
    }
}

impl<T: Clone> Clone for BinaryTree<T> {
    fn clone(&self) -> Self {
        BinaryTree {
            root: node::clone_subtree(&self.root),
            len: self.len,
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for BinaryTree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BinaryTree")
            .field("len", &self.len)
            .field("level_order", &self.level_order())
            .finish()
    }
}

impl<T: PartialEq> BinaryTree<T> {
    pub fn contains(&self, data: &T) -> bool {
        self.path_where(|node| node.data == *data).is_some()
    }

    /// Deletes the first node, in level order, holding `data`.
    ///
    /// # Returns
    /// `true` if a node was removed
    pub fn delete(&mut self, data: &T) -> bool {
        let Some(path) = self.path_where(|node| node.data == *data) else {
            return false;
        };
        let removed = node::unlink(self.slot_at(&path));
        if removed {
            self.len -= 1;
        }
        removed
    }
}

impl<T> Default for BinaryTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for BinaryTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = BinaryTree::new();
        for item in iter {
            tree.insert(item);
        }
        tree
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> BinaryTree<i32> {
        (1..=5).collect()
    }

    #[test]
    fn insertion_fills_levels_left_to_right() {
        let tree = sample();
        assert_eq!(tree.level_order(), vec![&1, &2, &3, &4, &5]);
        assert_eq!(tree.inorder(), vec![&4, &2, &5, &1, &3]);
        assert_eq!(tree.preorder(), vec![&1, &2, &4, &5, &3]);
        assert_eq!(tree.postorder(), vec![&4, &5, &2, &3, &1]);
        assert_eq!(tree.height(), 3);
        assert_eq!(tree.len(), 5);
    }

    #[test]
    fn contains_scans_every_node() {
        let tree = sample();
        assert!(tree.contains(&4));
        assert!(!tree.contains(&6));
        assert!(!BinaryTree::<i32>::new().contains(&1));
    }

    #[test]
    fn delete_inner_node_with_two_children() {
        let mut tree = sample();
        assert!(tree.delete(&2));
        // 2 has children 4 and 5: its in-order successor 5 takes its place
        assert_eq!(tree.level_order(), vec![&1, &5, &3, &4]);
        assert_eq!(tree.len(), 4);
    }

    #[test]
    fn delete_leaf_and_root() {
        let mut tree = sample();
        assert!(tree.delete(&5));
        assert_eq!(tree.level_order(), vec![&1, &2, &3, &4]);
        assert!(tree.delete(&1));
        assert_eq!(tree.level_order(), vec![&3, &2, &4]);
    }

    #[test]
    fn delete_missing_value() {
        let mut tree = sample();
        assert!(!tree.delete(&99));
        assert_eq!(tree.len(), 5);
    }

    #[test]
    fn deleting_everything_empties_tree() {
        let mut tree = sample();
        for value in 1..=5 {
            assert!(tree.delete(&value));
        }
        assert!(tree.is_empty());
        assert_eq!(tree.height(), 0);
    }

    #[test]
    fn clear_resets() {
        let mut tree = sample();
        tree.clear();
        assert!(tree.is_empty());
        assert!(tree.level_order().is_empty());
        tree.insert(9);
        assert_eq!(tree.level_order(), vec![&9]);
    }

    #[test]
    fn deep_left_chain_drops_and_clears() {
        let chain = |len: u32| {
            let mut root: Link<u32> = None;
            for value in 0..len {
                let mut node = TreeNode::leaf(value);
                node.left = root;
                root = Some(node);
            }
            BinaryTree { root, len: len as usize }
        };

        let tree = chain(150_000);
        assert_eq!(tree.height(), 150_000);
        let copy = tree.clone();
        drop(tree);
        assert_eq!(copy.level_order().first(), Some(&&149_999));

        let mut copy = copy;
        copy.clear();
        assert!(copy.is_empty());
        assert_eq!(copy.len(), 0);
    }

    #[test]
    fn clone_is_independent() {
        let tree = sample();
        let mut copy = tree.clone();
        assert!(copy.delete(&1));
        assert_eq!(tree.level_order(), vec![&1, &2, &3, &4, &5]);
        assert_eq!(format!("{tree:?}"), "BinaryTree { len: 5, level_order: [1, 2, 3, 4, 5] }");
    }
}

