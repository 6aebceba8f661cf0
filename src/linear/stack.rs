use crate::errors::{ContainerError, Result};

/// LIFO structure backed by a `Vec`.
///
/// ```text
/// push(x): data[N] = x, N' = N + 1     O(1) amortised
/// pop():   N' = N - 1, returns data[N-1] O(1)
/// peek():  returns &data[N-1]           O(1)
/// ```
#[derive(Debug, Clone)]
pub struct Stack<T> {
    items: Vec<T>,
}

impl<T> Stack<T> {
    pub fn new() -> Self {
        Stack { items: Vec::new() }
    }

    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    /// Removes and returns the top of the stack.
    ///
    /// # Errors
    /// [`ContainerError::Empty`] when there is nothing to pop.
    pub fn pop(&mut self) -> Result<T> {
        self.items.pop().ok_or(ContainerError::empty("Stack"))
    }

    /// Returns the top of the stack without removing it.
    ///
    /// # Errors
    /// [`ContainerError::Empty`] when the stack holds no element.
    pub fn peek(&self) -> Result<&T> {
        self.items.last().ok_or(ContainerError::empty("Stack"))
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

    /// Iterates from the bottom of the stack to the top.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}
