use std::{cmp::Ordering, collections::VecDeque};

use tracing::trace;

use crate::errors::{ContainerError, Result};

type AvlLink<T> = Option<Box<AvlNode<T>>>;

#[derive(Debug, Clone)]
struct AvlNode<T> {
    data: T,
    /// Nodes on the longest path down from here, this node included.
    height: usize,
    left: AvlLink<T>,
    right: AvlLink<T>,
}

impl<T> AvlNode<T> {
    fn leaf(data: T) -> Box<Self> {
        Box::new(AvlNode {
            data,
            height: 1,
            left: None,
            right: None,
        })
    }

    fn balance_factor(&self) -> isize {
        height(&self.left) as isize - height(&self.right) as isize
    }

    fn update_height(&mut self) {
        self.height = 1 + height(&self.left).max(height(&self.right));
    }
}

fn height<T>(link: &AvlLink<T>) -> usize {
    link.as_ref().map_or(0, |node| node.height)
}

fn rotate_right<T>(mut y: Box<AvlNode<T>>) -> Box<AvlNode<T>> {
    let Some(mut x) = y.left.take() else {
        return y;
    };
    trace!("avl right rotation");
    y.left = x.right.take();
    y.update_height();
    x.right = Some(y);
    x.update_height();
    x
}

fn rotate_left<T>(mut x: Box<AvlNode<T>>) -> Box<AvlNode<T>> {
    let Some(mut y) = x.right.take() else {
        return x;
    };
    trace!("avl left rotation");
    x.right = y.left.take();
    x.update_height();
    y.left = Some(x);
    y.update_height();
    y
}

/// Restores `|balance factor| <= 1` at `node`, assuming both subtrees are AVL trees
/// whose heights differ by at most 2.
fn rebalance<T>(mut node: Box<AvlNode<T>>) -> Box<AvlNode<T>> {
    node.update_height();
    let balance = node.balance_factor();

    if balance > 1 {
        // left-right case first turns into left-left
        if node.left.as_ref().is_some_and(|left| left.balance_factor() < 0) {
            node.left = node.left.take().map(rotate_left);
        }
        return rotate_right(node);
    }
    if balance < -1 {
        if node.right.as_ref().is_some_and(|right| right.balance_factor() > 0) {
            node.right = node.right.take().map(rotate_right);
        }
        return rotate_left(node);
    }
    node
}

fn insert_node<T: Ord>(link: AvlLink<T>, data: T, inserted: &mut bool) -> Box<AvlNode<T>> {
    let Some(mut node) = link else {
        *inserted = true;
        return AvlNode::leaf(data);
    };
    match data.cmp(&node.data) {
        Ordering::Less => node.left = Some(insert_node(node.left.take(), data, inserted)),
        Ordering::Greater => node.right = Some(insert_node(node.right.take(), data, inserted)),
        Ordering::Equal => return node,
    }
    rebalance(node)
}

/// Detaches the minimum of the subtree rooted at `node`.
fn take_min<T>(mut node: Box<AvlNode<T>>) -> (AvlLink<T>, T) {
    match node.left.take() {
        Some(left) => {
            let (rest, min) = take_min(left);
            node.left = rest;
            (Some(rebalance(node)), min)
        }
        None => {
            let AvlNode { data, right, .. } = *node;
            (right, data)
        }
    }
}

fn delete_node<T: Ord>(link: AvlLink<T>, data: &T, removed: &mut bool) -> AvlLink<T> {
    let mut node = link?;
    match data.cmp(&node.data) {
        Ordering::Less => node.left = delete_node(node.left.take(), data, removed),
        Ordering::Greater => node.right = delete_node(node.right.take(), data, removed),
        Ordering::Equal => {
            *removed = true;
            match (node.left.take(), node.right.take()) {
                (None, None) => return None,
                (Some(child), None) | (None, Some(child)) => return Some(child),
                (Some(left), Some(right)) => {
                    let (rest, successor) = take_min(right);
                    node.data = successor;
                    node.left = Some(left);
                    node.right = rest;
                }
            }
        }
    }
    Some(rebalance(node))
}

/// Height-balanced binary search tree holding each value at most once.
///
/// # Invariants
/// - in-order traversal is strictly increasing
/// - for every node, the heights of its two subtrees differ by at most one
///
/// Insertion, deletion and lookup are O(log n).
///
/// # Examples
///
/// ```
/// use classics::trees::AvlTree;
///
/// let tree: AvlTree<u32> = (1..=7).collect();
/// assert_eq!(tree.height(), 3);
/// assert!(tree.is_balanced());
/// ```
#[derive(Debug, Clone)]
pub struct AvlTree<T> {
    root: AvlLink<T>,
    len: usize,
}

impl<T: Ord> AvlTree<T> {
    pub fn new() -> Self {
        AvlTree { root: None, len: 0 }
    }

    /// Inserts `data` unless an equal value is already present.
    ///
    /// # Returns
    /// `true` if the tree grew
    pub fn insert(&mut self, data: T) -> bool {
        let mut inserted = false;
        self.root = Some(insert_node(self.root.take(), data, &mut inserted));
        if inserted {
            self.len += 1;
        }
        inserted
    }

    /// # Returns
    /// `true` if `data` was present and has been removed
    pub fn delete(&mut self, data: &T) -> bool {
        let mut removed = false;
        self.root = delete_node(self.root.take(), data, &mut removed);
        if removed {
            self.len -= 1;
        }
        removed
    }

    pub fn contains(&self, data: &T) -> bool {
        let mut cursor = self.root.as_deref();
        while let Some(node) = cursor {
            cursor = match data.cmp(&node.data) {
                Ordering::Less => node.left.as_deref(),
                Ordering::Greater => node.right.as_deref(),
                Ordering::Equal => return true,
            };
        }
        false
    }

    pub fn min(&self) -> Result<&T> {
        let mut node = self.root.as_deref().ok_or(ContainerError::empty("AVL tree"))?;
        while let Some(left) = node.left.as_deref() {
            node = left;
        }
        Ok(&node.data)
    }

    pub fn max(&self) -> Result<&T> {
        let mut node = self.root.as_deref().ok_or(ContainerError::empty("AVL tree"))?;
        while let Some(right) = node.right.as_deref() {
            node = right;
        }
        Ok(&node.data)
    }

    /// Verifies ordering, cached heights and balance factors of every node.
    pub fn is_balanced(&self) -> bool {
        fn check<T: Ord>(link: &AvlLink<T>, lower: Option<&T>, upper: Option<&T>) -> Option<usize> {
            let Some(node) = link else {
                return Some(0);
            };
            if lower.is_some_and(|lo| node.data <= *lo) || upper.is_some_and(|hi| node.data >= *hi) {
                return None;
            }
            let left = check(&node.left, lower, Some(&node.data))?;
            let right = check(&node.right, Some(&node.data), upper)?;
            let expected = 1 + left.max(right);
            (left.abs_diff(right) <= 1 && node.height == expected).then_some(expected)
        }
        check(&self.root, None, None).is_some()
    }
}

impl<T> AvlTree<T> {
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn height(&self) -> usize {
        height(&self.root)
    }

    pub fn clear(&mut self) {
        self.root = None;
        self.len = 0;
    }

    pub fn inorder(&self) -> Vec<&T> {
        fn walk<'a, T>(link: &'a AvlLink<T>, out: &mut Vec<&'a T>) {
            if let Some(node) = link {
                walk(&node.left, out);
                out.push(&node.data);
                walk(&node.right, out);
            }
        }
        let mut out = Vec::with_capacity(self.len);
        walk(&self.root, &mut out);
        out
    }

    pub fn preorder(&self) -> Vec<&T> {
        fn walk<'a, T>(link: &'a AvlLink<T>, out: &mut Vec<&'a T>) {
            if let Some(node) = link {
                out.push(&node.data);
                walk(&node.left, out);
                walk(&node.right, out);
            }
        }
        let mut out = Vec::with_capacity(self.len);
        walk(&self.root, &mut out);
        out
    }

    pub fn postorder(&self) -> Vec<&T> {
        fn walk<'a, T>(link: &'a AvlLink<T>, out: &mut Vec<&'a T>) {
            if let Some(node) = link {
                walk(&node.left, out);
                walk(&node.right, out);
                out.push(&node.data);
            }
        }
        let mut out = Vec::with_capacity(self.len);
        walk(&self.root, &mut out);
        out
    }

    pub fn level_order(&self) -> Vec<&T> {
        let mut out = Vec::with_capacity(self.len);
        let mut queue: VecDeque<&AvlNode<T>> = self.root.as_deref().into_iter().collect();
        while let Some(node) = queue.pop_front() {
            out.push(&node.data);
            queue.extend(node.left.as_deref());
            queue.extend(node.right.as_deref());
        }
        out
    }
}

impl<T: Ord> Default for AvlTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> FromIterator<T> for AvlTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = AvlTree::new();
        for item in iter {
            tree.insert(item);
        }
        tree
    }
}
