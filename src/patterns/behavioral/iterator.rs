//! A collection exposing its items through an explicit cursor as well as the
//! standard iterator traits.

#[derive(Debug, Clone, Default)]
pub struct Collection<T> {
    items: Vec<T>,
}

impl<T> Collection<T> {
    pub fn new() -> Self {
        Collection { items: Vec::new() }
    }

    pub fn add_item(&mut self, item: T) {
        self.items.push(item);
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> CollectionIter<'_, T> {
        CollectionIter {
            items: &self.items,
            position: 0,
        }
    }

    /// Walks the items backwards.
    pub fn reverse_iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.items.iter().rev()
    }
}

pub struct CollectionIter<'a, T> {
    items: &'a [T],
    position: usize,
}

impl<T> CollectionIter<'_, T> {
    pub fn has_next(&self) -> bool {
        self.position < self.items.len()
    }
}

impl<'a, T> Iterator for CollectionIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.items.get(self.position)?;
        self.position += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.items.len() - self.position;
        (left, Some(left))
    }
}

impl<T> ExactSizeIterator for CollectionIter<'_, T> {}

impl<'a, T> IntoIterator for &'a Collection<T> {
    type Item = &'a T;
    type IntoIter = CollectionIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for Collection<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<T> FromIterator<T> for Collection<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Collection {
            items: iter.into_iter().collect(),
        }
    }
}
