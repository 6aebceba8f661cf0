//! Array-backed binary heap.
//!
//! Layout, 0-indexed over `data`:
//!   parent(i)      = (i - 1) / 2
//!   left_child(i)  = 2*i + 1
//!   right_child(i) = 2*i + 2
//!
//! Heap invariant: `data[parent(i)]` comes before `data[i]` in the heap's
//! [`HeapKind`] order for all i > 0.

use std::fmt;

use tracing::debug;

use crate::errors::{ContainerError, Result};

/// Which end of the ordering sits at the root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeapKind {
    Min,
    Max,
}

impl HeapKind {
    /// True if `a` belongs strictly above `b`.
    fn above<T: Ord>(self, a: &T, b: &T) -> bool {
        match self {
            HeapKind::Min => a < b,
            HeapKind::Max => a > b,
        }
    }
}

#[derive(Clone)]
pub struct Heap<T> {
    data: Vec<T>,
    kind: HeapKind,
}

impl<T: Ord> Heap<T> {
    pub fn new(kind: HeapKind) -> Self {
        Heap {
            data: Vec::new(),
            kind,
        }
    }

    pub fn min_heap() -> Self {
        Self::new(HeapKind::Min)
    }

    pub fn max_heap() -> Self {
        Self::new(HeapKind::Max)
    }

    pub fn kind(&self) -> HeapKind {
        self.kind
    }

    /// O(log n)
    pub fn insert(&mut self, value: T) {
        self.data.push(value);
        self.sift_up(self.data.len() - 1);
    }

    /// Removes and returns the root: the minimum of a min heap, the maximum of a max heap.
    ///
    /// # Errors
    /// [`ContainerError::Empty`] if the heap holds nothing.
    pub fn delete(&mut self) -> Result<T> {
        if self.data.is_empty() {
            return Err(ContainerError::empty("Heap"));
        }
        let last = self.data.len() - 1;
        self.data.swap(0, last);
        let root = self.data.pop().ok_or(ContainerError::empty("Heap"))?;
        if !self.data.is_empty() {
            self.sift_down(0);
        }
        Ok(root)
    }

    pub fn peek(&self) -> Result<&T> {
        self.data.first().ok_or(ContainerError::empty("Heap"))
    }

    /// Replaces the contents with `values`, building the heap bottom-up in O(n).
    pub fn heapify(&mut self, values: impl IntoIterator<Item = T>) {
        self.data = values.into_iter().collect();
        debug!(len = self.data.len(), kind = ?self.kind, "heapify");
        for i in (0..self.data.len() / 2).rev() {
            self.sift_down(i);
        }
    }

    /// Drains the heap in root-first order: ascending for a min heap, descending for a max heap.
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut out = Vec::with_capacity(self.data.len());
        while let Ok(value) = self.delete() {
            out.push(value);
        }
        out
    }

    fn sift_up(&mut self, mut i: usize) {
        while i > 0 {
            let p = (i - 1) / 2;
            if !self.kind.above(&self.data[i], &self.data[p]) {
                break;
            }
            self.data.swap(p, i);
            i = p;
        }
    }

    fn sift_down(&mut self, mut i: usize) {
        let n = self.data.len();
        loop {
            let mut top = i;
            let l = 2 * i + 1;
            let r = 2 * i + 2;
            if l < n && self.kind.above(&self.data[l], &self.data[top]) {
                top = l;
            }
            if r < n && self.kind.above(&self.data[r], &self.data[top]) {
                top = r;
            }
            if top == i {
                break;
            }
            self.data.swap(i, top);
            i = top;
        }
    }
}

impl<T> Heap<T> {
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// The backing array in heap order.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }
}

impl<T: fmt::Debug> fmt::Debug for Heap<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Heap")
            .field("kind", &self.kind)
            .field("data", &self.data)
            .finish()
    }
}

impl<T: Ord> Default for Heap<T> {
    fn default() -> Self {
        Self::min_heap()
    }
}
