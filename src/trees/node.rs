use std::collections::VecDeque;

pub(crate) type Link<T> = Option<Box<TreeNode<T>>>;

/// A node of a binary tree: one value and up to two owned children.
#[derive(Debug)]
pub struct TreeNode<T> {
    pub(crate) data: T,
    pub(crate) left: Link<T>,
    pub(crate) right: Link<T>,
}

impl<T> TreeNode<T> {
    pub(crate) fn leaf(data: T) -> Box<Self> {
        Box::new(TreeNode {
            data,
            left: None,
            right: None,
        })
    }

    pub fn value(&self) -> &T {
        &self.data
    }

    pub fn left(&self) -> Option<&TreeNode<T>> {
        self.left.as_deref()
    }

    pub fn right(&self) -> Option<&TreeNode<T>> {
        self.right.as_deref()
    }
}

/// Detaches the leftmost node under `slot`, splices its right child into its place
/// and returns its value.
pub(crate) fn take_min<T>(slot: &mut Link<T>) -> Option<T> {
    let mut cursor = slot;
    while cursor.as_ref().is_some_and(|node| node.left.is_some()) {
        cursor = &mut cursor.as_mut()?.left;
    }
    let mut node = cursor.take()?;
    *cursor = node.right.take();
    Some(node.data)
}

/// Drops the subtree held by `link` one node at a time.
///
/// The derived drop of nested boxes recurses once per level, which overflows the
/// stack on degenerate trees.
pub(crate) fn drop_subtree<T>(link: &mut Link<T>) {
    let mut pending: Vec<Box<TreeNode<T>>> = link.take().into_iter().collect();
    while let Some(mut node) = pending.pop() {
        pending.extend(node.left.take());
        pending.extend(node.right.take());
    }
}

/// Deep copy of the subtree held by `link`, built bottom-up without recursion.
pub(crate) fn clone_subtree<T: Clone>(link: &Link<T>) -> Link<T> {
    let mut built: Vec<Box<TreeNode<T>>> = Vec::new();
    for node in postorder_nodes(link.as_deref()) {
        // in postorder a node's subtrees are the most recently built ones, right on top
        let right = if node.right.is_some() { built.pop() } else { None };
        let left = if node.left.is_some() { built.pop() } else { None };
        built.push(Box::new(TreeNode {
            data: node.data.clone(),
            left,
            right,
        }));
    }
    built.pop()
}

/// Removes the node held by `slot`.
///
/// A leaf is dropped, a node with a single child is replaced by that child, and
/// a node with two children takes the value of its in-order successor, which is
/// unlinked from the right subtree instead.
pub(crate) fn unlink<T>(slot: &mut Link<T>) -> bool {
    let Some(mut node) = slot.take() else {
        return false;
    };
    *slot = match (node.left.take(), node.right.take()) {
        (None, None) => None,
        (Some(child), None) | (None, Some(child)) => Some(child),
        (Some(left), Some(right)) => {
            node.left = Some(left);
            node.right = Some(right);
            if let Some(successor) = take_min(&mut node.right) {
                node.data = successor;
            }
            Some(node)
        }
    };
    true
}

pub(crate) fn inorder<T>(root: Option<&TreeNode<T>>) -> Vec<&T> {
    let mut out = Vec::new();
    let mut stack = Vec::new();
    let mut cursor = root;
    loop {
        while let Some(node) = cursor {
            stack.push(node);
            cursor = node.left();
        }
        match stack.pop() {
            Some(node) => {
                out.push(&node.data);
                cursor = node.right();
            }
            None => break,
        }
    }
    out
}

pub(crate) fn preorder<T>(root: Option<&TreeNode<T>>) -> Vec<&T> {
    let mut out = Vec::new();
    let mut stack: Vec<&TreeNode<T>> = root.into_iter().collect();
    while let Some(node) = stack.pop() {
        out.push(&node.data);
        stack.extend(node.right());
        stack.extend(node.left());
    }
    out
}

fn postorder_nodes<T>(root: Option<&TreeNode<T>>) -> Vec<&TreeNode<T>> {
    // root-right-left preorder, reversed
    let mut out = Vec::new();
    let mut stack: Vec<&TreeNode<T>> = root.into_iter().collect();
    while let Some(node) = stack.pop() {
        out.push(node);
        stack.extend(node.left());
        stack.extend(node.right());
    }
    out.reverse();
    out
}

pub(crate) fn postorder<T>(root: Option<&TreeNode<T>>) -> Vec<&T> {
    postorder_nodes(root).into_iter().map(|node| &node.data).collect()
}

pub(crate) fn level_order<T>(root: Option<&TreeNode<T>>) -> Vec<&T> {
    let mut out = Vec::new();
    let mut queue: VecDeque<&TreeNode<T>> = root.into_iter().collect();
    while let Some(node) = queue.pop_front() {
        out.push(&node.data);
        queue.extend(node.left());
        queue.extend(node.right());
    }
    out
}

/// Number of nodes on the longest root-to-leaf path; 0 for an empty tree.
pub(crate) fn height<T>(root: Option<&TreeNode<T>>) -> usize {
    let mut levels = 0;
    let mut frontier: Vec<&TreeNode<T>> = root.into_iter().collect();
    while !frontier.is_empty() {
        levels += 1;
        frontier = frontier
            .into_iter()
            .flat_map(|node| node.left().into_iter().chain(node.right()))
            .collect();
    }
    levels
}
