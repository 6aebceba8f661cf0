use std::fmt;

use crate::errors::{ContainerError, Result};

type Link<T> = Option<Box<Node<T>>>;

struct Node<T> {
    data: T,
    next: Link<T>,
}

/// Singly linked list owning its nodes through a chain of boxes.
///
/// Positions are zero based. Every positional operation walks the chain from
/// the head, so `insert_at_end` and `delete_at_end` are O(n).
pub struct LinkedList<T> {
    head: Link<T>,
    len: usize,
}

impl<T> LinkedList<T> {
    pub fn new() -> Self {
        LinkedList { head: None, len: 0 }
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns the link that holds the node at `position`, or the trailing
    /// `None` link when `position == len`.
    fn link_at(&mut self, position: usize) -> &mut Link<T> {
        let mut link = &mut self.head;
        for _ in 0..position {
            match link {
                Some(node) => link = &mut node.next,
                None => break,
            }
        }
        link
    }

    pub fn insert_at_beginning(&mut self, data: T) {
        let next = self.head.take();
        self.head = Some(Box::new(Node { data, next }));
        self.len += 1;
    }

    pub fn insert_at_end(&mut self, data: T) {
        let len = self.len;
        let tail = self.link_at(len);
        *tail = Some(Box::new(Node { data, next: None }));
        self.len += 1;
    }

    /// Inserts `data` so that it ends up at index `position`.
    ///
    /// # Errors
    /// [`ContainerError::PositionOutOfRange`] if `position > len`.
    pub fn insert_at_position(&mut self, data: T, position: usize) -> Result<()> {
        if position > self.len {
            return Err(ContainerError::out_of_range(position, self.len));
        }
        let link = self.link_at(position);
        let next = link.take();
        *link = Some(Box::new(Node { data, next }));
        self.len += 1;
        Ok(())
    }

    pub fn delete_at_beginning(&mut self) -> Result<T> {
        self.delete_at_position(0)
    }

    pub fn delete_at_end(&mut self) -> Result<T> {
        if self.is_empty() {
            return Err(ContainerError::empty("Linked list"));
        }
        self.delete_at_position(self.len - 1)
    }

    /// Unlinks and returns the element at `position`.
    ///
    /// # Errors
    /// - [`ContainerError::Empty`] on an empty list
    /// - [`ContainerError::PositionOutOfRange`] if `position >= len`
    pub fn delete_at_position(&mut self, position: usize) -> Result<T> {
        if self.is_empty() {
            return Err(ContainerError::empty("Linked list"));
        }
        let len = self.len;
        if position >= len {
            return Err(ContainerError::out_of_range(position, len));
        }
        let link = self.link_at(position);
        let node = link
            .take()
            .ok_or(ContainerError::out_of_range(position, len))?;
        let Node { data, next } = *node;
        *link = next;
        self.len -= 1;
        Ok(data)
    }

    pub fn clear(&mut self) {
        let mut cursor = self.head.take();
        while let Some(mut node) = cursor {
            cursor = node.next.take();
        }
        self.len = 0;
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.head.as_deref(),
        }
    }
}

impl<T: PartialEq> LinkedList<T> {
    /// Index of the first element equal to `data`.
    pub fn search(&self, data: &T) -> Option<usize> {
        self.iter().position(|item| item == data)
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for LinkedList<T> {
    fn drop(&mut self) {
        // unlink iteratively, the default recursive drop overflows on long chains
        self.clear();
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut items: Vec<T> = iter.into_iter().collect();
        let mut list = LinkedList::new();
        while let Some(item) = items.pop() {
            list.insert_at_beginning(item);
        }
        list
    }
}

impl<T: fmt::Display> fmt::Display for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "Empty linked list");
        }
        for (i, item) in self.iter().enumerate() {
            if i > 0 {
                write!(f, " -> ")?;
            }
            write!(f, "{item}")?;
        }
        Ok(())
    }
}

impl<T: fmt::Debug> fmt::Debug for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

pub struct Iter<'a, T> {
    next: Option<&'a Node<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            &node.data
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contents(list: &LinkedList<i32>) -> Vec<i32> {
        list.iter().copied().collect()
    }

    #[test]
    fn insert_at_both_ends() {
        let mut list = LinkedList::new();
        list.insert_at_end(2);
        list.insert_at_beginning(1);
        list.insert_at_end(3);

        assert_eq!(contents(&list), vec![1, 2, 3]);
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn insert_at_position_in_middle_and_tail() {
        let mut list: LinkedList<i32> = [1, 3].into_iter().collect();
        list.insert_at_position(2, 1).unwrap();
        list.insert_at_position(4, 3).unwrap();

        assert_eq!(contents(&list), vec![1, 2, 3, 4]);
    }

    #[test]
    fn insert_past_the_end_is_rejected() {
        let mut list: LinkedList<i32> = [1, 2].into_iter().collect();
        assert_eq!(
            list.insert_at_position(9, 3),
            Err(ContainerError::PositionOutOfRange { position: 3, len: 2 })
        );
        assert_eq!(contents(&list), vec![1, 2]);
    }

    #[test]
    fn delete_variants() {
        let mut list: LinkedList<i32> = (1..=5).collect();

        assert_eq!(list.delete_at_beginning(), Ok(1));
        assert_eq!(list.delete_at_end(), Ok(5));
        assert_eq!(list.delete_at_position(1), Ok(3));
        assert_eq!(contents(&list), vec![2, 4]);
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn delete_on_empty_reports_empty() {
        let mut list = LinkedList::<i32>::new();
        let expected = Err(ContainerError::Empty { container: "Linked list" });
        assert_eq!(list.delete_at_beginning(), expected);
        assert_eq!(list.delete_at_end(), expected);
        assert_eq!(list.delete_at_position(0), expected);
    }

    #[test]
    fn delete_out_of_range_reports_position() {
        let mut list: LinkedList<i32> = (0..3).collect();
        assert_eq!(
            list.delete_at_position(3),
            Err(ContainerError::PositionOutOfRange { position: 3, len: 3 })
        );
    }

    #[test]
    fn search_returns_first_match() {
        let list: LinkedList<i32> = [5, 7, 5, 9].into_iter().collect();
        assert_eq!(list.search(&5), Some(0));
        assert_eq!(list.search(&9), Some(3));
        assert_eq!(list.search(&42), None);
    }

    #[test]
    fn display_format() {
        let list: LinkedList<i32> = (1..=3).collect();
        assert_eq!(list.to_string(), "1 -> 2 -> 3");
        assert_eq!(LinkedList::<i32>::new().to_string(), "Empty linked list");
    }

    #[test]
    fn long_list_drops_without_overflow() {
        let list: LinkedList<u32> = (0..200_000).collect();
        assert_eq!(list.len(), 200_000);
        drop(list);
    }

    #[test]
    fn clear_then_reuse() {
        let mut list: LinkedList<i32> = (0..10).collect();
        list.clear();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
        list.insert_at_end(1);
        assert_eq!(contents(&list), vec![1]);
    }
}
