use std::collections::VecDeque;

use crate::errors::{ContainerError, Result};

/// FIFO queue with O(1) enqueue and dequeue.
#[derive(Debug, Clone)]
pub struct Queue<T> {
    items: VecDeque<T>,
}

impl<T> Queue<T> {
    pub fn new() -> Self {
        Queue {
            items: VecDeque::new(),
        }
    }

    pub fn enqueue(&mut self, item: T) {
        self.items.push_back(item);
    }

    /// Removes the element that has waited longest.
    ///
    /// # Errors
    /// [`ContainerError::Empty`] when the queue holds nothing.
    pub fn dequeue(&mut self) -> Result<T> {
        self.items.pop_front().ok_or(ContainerError::empty("Queue"))
    }

    pub fn peek(&self) -> Result<&T> {
        self.items.front().ok_or(ContainerError::empty("Queue"))
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

    /// Iterates from the front of the queue to the back.
    pub fn iter(&self) -> std::collections::vec_deque::Iter<'_, T> {
        self.items.iter()
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dequeue_follows_insertion_order() {
        let mut queue = Queue::new();
        queue.enqueue(1);
        queue.enqueue(2);
        queue.enqueue(3);

        assert_eq!(queue.dequeue(), Ok(1));
        assert_eq!(queue.dequeue(), Ok(2));
        assert_eq!(queue.peek(), Ok(&3));
        assert_eq!(queue.len(), 1);
    }

    #[test]
    fn empty_queue_reports_errors() {
        let mut queue = Queue::<String>::new();
        assert_eq!(queue.dequeue(), Err(ContainerError::Empty { container: "Queue" }));
        assert!(queue.peek().is_err());
    }

    #[test]
    fn interleaved_operations() {
        let mut queue = Queue::default();
        for i in 0..10 {
            queue.enqueue(i);
            if i % 2 == 1 {
                queue.dequeue().unwrap();
            }
        }
        assert_eq!(queue.len(), 5);
        assert_eq!(queue.iter().copied().collect::<Vec<_>>(), vec![5, 6, 7, 8, 9]);
    }

    #[test]
    fn clear_resets() {
        let mut queue = Queue::new();
        queue.enqueue('x');
        queue.clear();
        assert!(queue.is_empty());
    }
}
