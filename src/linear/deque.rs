use std::collections::VecDeque;

use crate::errors::{ContainerError, Result};

/// Double-ended queue: insertion and removal at both the front and the rear.
#[derive(Debug, Clone)]
pub struct Deque<T> {
    items: VecDeque<T>,
}

impl<T> Deque<T> {
    pub fn new() -> Self {
        Deque {
            items: VecDeque::new(),
        }
    }

    pub fn add_front(&mut self, item: T) {
        self.items.push_front(item);
    }

    pub fn add_rear(&mut self, item: T) {
        self.items.push_back(item);
    }

    pub fn remove_front(&mut self) -> Result<T> {
        self.items.pop_front().ok_or(ContainerError::empty("Deque"))
    }

    pub fn remove_rear(&mut self) -> Result<T> {
        self.items.pop_back().ok_or(ContainerError::empty("Deque"))
    }

    pub fn peek_front(&self) -> Result<&T> {
        self.items.front().ok_or(ContainerError::empty("Deque"))
    }

    pub fn peek_rear(&self) -> Result<&T> {
        self.items.back().ok_or(ContainerError::empty("Deque"))
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}

impl<T: Clone> Deque<T> {
    /// Snapshot of the contents, front first.
    pub fn to_vec(&self) -> Vec<T> {
        self.items.iter().cloned().collect()
    }
}

impl<T> Default for Deque<T> {
    fn default() -> Self {
        Self::new()
    }
}
