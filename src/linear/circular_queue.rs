use tracing::trace;

use crate::errors::{ContainerError, Result};

/// A fixed-capacity FIFO ring buffer that overwrites its oldest entry when full.
///
/// Holds up to `CAPACITY` items. `front` indexes the oldest slot, and the slot
/// after the newest item is `(front + len) % CAPACITY`.
///
/// # Type Parameters
/// * `CAPACITY` - Maximum number of stored items, must be greater than 0
///
/// # Panics
/// Creating a `CircularQueue` with `CAPACITY == 0` will panic
pub struct CircularQueue<T, const CAPACITY: usize> {
    slots: [Option<T>; CAPACITY],
    front: usize,
    len: usize,
}

impl<T, const CAPACITY: usize> CircularQueue<T, CAPACITY> {
    /// Creates a new empty circular queue.
    ///
    /// # Panics
    /// Panics if `CAPACITY == 0`
    pub fn new() -> Self {
        assert!(CAPACITY > 0);
        CircularQueue {
            slots: std::array::from_fn(|_| None),
            front: 0,
            len: 0,
        }
    }

    /// Appends `item` as the newest entry.
    ///
    /// # Returns
    /// The evicted oldest item when the queue was already full, `None` otherwise
    pub fn enqueue(&mut self, item: T) -> Option<T> {
        let rear = (self.front + self.len) % CAPACITY;
        if self.is_full() {
            // rear == front here: the newest item takes the oldest slot
            let evicted = self.slots[rear].replace(item);
            self.front = (self.front + 1) % CAPACITY;
            trace!(capacity = CAPACITY, "circular queue overwrote its oldest entry");
            evicted
        } else {
            self.slots[rear] = Some(item);
            self.len += 1;
            None
        }
    }

    /// Removes and returns the oldest entry.
    ///
    /// # Errors
    /// [`ContainerError::Empty`] when the queue holds nothing.
    pub fn dequeue(&mut self) -> Result<T> {
        if self.is_empty() {
            return Err(ContainerError::empty("Circular queue"));
        }
        let item = self.slots[self.front].take();
        self.front = (self.front + 1) % CAPACITY;
        self.len -= 1;
        item.ok_or(ContainerError::empty("Circular queue"))
    }

    pub fn peek(&self) -> Result<&T> {
        if self.is_empty() {
            return Err(ContainerError::empty("Circular queue"));
        }
        self.slots[self.front]
            .as_ref()
            .ok_or(ContainerError::empty("Circular queue"))
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_full(&self) -> bool {
        self.len == CAPACITY
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn capacity(&self) -> usize {
        CAPACITY
    }

    pub fn clear(&mut self) {
        for slot in self.slots.iter_mut() {
            *slot = None;
        }
        self.front = 0;
        self.len = 0;
    }

    /// Iterates from the oldest entry to the newest.
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        (0..self.len).filter_map(move |offset| self.slots[(self.front + offset) % CAPACITY].as_ref())
    }
}

impl<T: Clone, const CAPACITY: usize> CircularQueue<T, CAPACITY> {
    /// Snapshot of the contents, oldest first.
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }
}

impl<T, const CAPACITY: usize> Default for CircularQueue<T, CAPACITY> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: std::fmt::Debug, const CAPACITY: usize> std::fmt::Debug for CircularQueue<T, CAPACITY> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CircularQueue")
            .field("capacity", &CAPACITY)
            .field("items", &self.iter().collect::<Vec<_>>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_creates_empty_queue() {
        let queue = CircularQueue::<u32, 5>::new();
        assert_eq!(queue.len(), 0);
        assert_eq!(queue.capacity(), 5);
        assert!(queue.is_empty());
    }

    #[test]
    fn enqueue_up_to_capacity() {
        let mut queue = CircularQueue::<u32, 3>::new();
        assert_eq!(queue.enqueue(1), None);
        assert_eq!(queue.enqueue(2), None);
        assert_eq!(queue.enqueue(3), None);

        assert!(queue.is_full());
        assert_eq!(queue.to_vec(), vec![1, 2, 3]);
    }

    #[test]
    fn enqueue_beyond_capacity_overwrites_oldest() {
        let mut queue = CircularQueue::<u32, 3>::new();
        queue.enqueue(1);
        queue.enqueue(2);
        queue.enqueue(3);
        assert_eq!(queue.enqueue(4), Some(1));

        assert_eq!(queue.len(), 3);
        assert_eq!(queue.to_vec(), vec![2, 3, 4]);
        assert_eq!(queue.peek(), Ok(&2));
    }

    #[test]
    fn fifo_order_maintained_over_multiple_overwrites() {
        let mut queue = CircularQueue::<u32, 3>::new();
        for i in 1..=6 {
            queue.enqueue(i);
        }
        assert_eq!(queue.to_vec(), vec![4, 5, 6]);
        assert_eq!(queue.dequeue(), Ok(4));
        assert_eq!(queue.dequeue(), Ok(5));
        assert_eq!(queue.dequeue(), Ok(6));
        assert!(queue.dequeue().is_err());
    }

    #[test]
    fn wraps_around_after_dequeue() {
        let mut queue = CircularQueue::<char, 3>::new();
        queue.enqueue('a');
        queue.enqueue('b');
        queue.dequeue().unwrap();
        queue.enqueue('c');
        queue.enqueue('d');

        assert!(queue.is_full());
        assert_eq!(queue.to_vec(), vec!['b', 'c', 'd']);
    }

    #[test]
    fn capacity_one_always_contains_last_inserted() {
        let mut queue = CircularQueue::<u32, 1>::new();
        queue.enqueue(10);
        assert_eq!(queue.enqueue(20), Some(10));
        assert_eq!(queue.enqueue(30), Some(20));
        assert_eq!(queue.to_vec(), vec![30]);
    }

    #[test]
    #[should_panic]
    fn zero_capacity_panics() {
        let _queue = CircularQueue::<u32, 0>::new();
    }

    #[test]
    fn stress_test_many_insertions() {
        let mut queue = CircularQueue::<usize, 100>::new();
        for i in 0..10_000 {
            queue.enqueue(i);
        }
        let contents = queue.to_vec();
        assert_eq!(contents.len(), 100);
        assert_eq!(contents[0], 9900);
        assert_eq!(contents[99], 9999);
    }

    #[test]
    fn empty_queue_errors() {
        let mut queue = CircularQueue::<u32, 2>::default();
        assert_eq!(
            queue.dequeue(),
            Err(ContainerError::Empty { container: "Circular queue" })
        );
        assert!(queue.peek().is_err());
    }

    #[test]
    fn clear_resets_positions() {
        let mut queue = CircularQueue::<u32, 3>::new();
        queue.enqueue(1);
        queue.enqueue(2);
        queue.dequeue().unwrap();
        queue.clear();
        assert!(queue.is_empty());
        queue.enqueue(7);
        assert_eq!(queue.to_vec(), vec![7]);
    }

    #[test]
    fn test_debug() {
        let mut queue = CircularQueue::<u32, 3>::new();
        queue.enqueue(1);
        queue.enqueue(2);

        let debug_str = format!("{queue:?}");
        assert_eq!(debug_str, "CircularQueue { capacity: 3, items: [1, 2] }");
    }
}
