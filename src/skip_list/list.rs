use std::fmt;

use tracing::trace;

use crate::skip_list::{SkipListParams, level_generator::LevelGenerator};

/// Arena position of a node. `None` in a link position means the head.
type Cursor = Option<usize>;

#[derive(Debug, Clone)]
struct SkipNode<T> {
    value: T,
    /// `forward[l]` is the next node on level `l`; the node spans `forward.len()` levels.
    forward: Vec<Option<usize>>,
}

/// A sorted set of distinct values with O(log n) expected search, insertion and
/// removal.
///
/// Nodes live in an arena and link to each other by index. Removed slots are
/// recycled by later insertions.
///
/// # Invariants
/// - level 0 links every value in strictly increasing order
/// - each level `l > 0` links a subsequence of level `l - 1`
/// - `level` is the number of non-empty levels
///
/// # Examples
///
/// ```
/// use classics::skip_list::{SkipList, SkipListParams};
///
/// let mut list = SkipList::with_params(SkipListParams::seeded(7));
/// for value in [3, 6, 7, 9, 12, 19, 17, 26, 21, 25] {
///     list.insert(value);
/// }
/// assert!(list.contains(&19));
/// assert_eq!(list.range(&7, &19), vec![&7, &9, &12, &17, &19]);
/// ```
#[derive(Clone)]
pub struct SkipList<T> {
    nodes: Vec<Option<SkipNode<T>>>,
    free: Vec<usize>,
    /// Forward links of the head, one per possible level.
    head: Vec<Option<usize>>,
    level: usize,
    len: usize,
    levels: LevelGenerator,
}

impl<T: Ord> SkipList<T> {
    pub fn new() -> Self {
        Self::with_params(SkipListParams::default())
    }

    /// # Panics
    /// If `params.max_level` is zero or `params.promotion` lies outside `[0, 1)`.
    pub fn with_params(params: SkipListParams) -> Self {
        let levels = LevelGenerator::new(&params);
        SkipList {
            nodes: Vec::new(),
            free: Vec::new(),
            head: vec![None; levels.max_level()],
            level: 0,
            len: 0,
            levels,
        }
    }

    fn node(&self, index: usize) -> Option<&SkipNode<T>> {
        self.nodes.get(index)?.as_ref()
    }

    fn value(&self, index: usize) -> Option<&T> {
        self.node(index).map(|node| &node.value)
    }

    fn forward(&self, at: Cursor, level: usize) -> Option<usize> {
        let links = match at {
            None => &self.head,
            Some(index) => &self.node(index)?.forward,
        };
        links.get(level).copied().flatten()
    }

    fn set_forward(&mut self, at: Cursor, level: usize, to: Option<usize>) {
        let links = match at {
            None => &mut self.head,
            Some(index) => match self.nodes.get_mut(index).and_then(Option::as_mut) {
                Some(node) => &mut node.forward,
                None => return,
            },
        };
        if let Some(link) = links.get_mut(level) {
            *link = to;
        }
    }

    /// For every level, the last position whose value is smaller than `value`.
    fn predecessors(&self, value: &T) -> Vec<Cursor> {
        let mut update = vec![None; self.head.len()];
        let mut current = None;
        for level in (0..self.level).rev() {
            while let Some(next) = self.forward(current, level) {
                match self.value(next) {
                    Some(candidate) if candidate < value => current = Some(next),
                    _ => break,
                }
            }
            update[level] = current;
        }
        update
    }

    /// First node holding a value `>= value`.
    fn lower_bound(&self, value: &T) -> Option<usize> {
        let mut current = None;
        for level in (0..self.level).rev() {
            while let Some(next) = self.forward(current, level) {
                match self.value(next) {
                    Some(candidate) if candidate < value => current = Some(next),
                    _ => break,
                }
            }
        }
        self.forward(current, 0)
    }

    fn alloc(&mut self, node: SkipNode<T>) -> usize {
        match self.free.pop() {
            Some(index) => {
                self.nodes[index] = Some(node);
                index
            }
            None => {
                self.nodes.push(Some(node));
                self.nodes.len() - 1
            }
        }
    }

    /// # Returns
    /// `false` if an equal value was already present, in which case the list is unchanged
    pub fn insert(&mut self, value: T) -> bool {
        let update = self.predecessors(&value);
        let successor = self.forward(update[0], 0);
        if successor.and_then(|index| self.value(index)) == Some(&value) {
            return false;
        }

        let height = self.levels.next_level();
        if height > self.level {
            trace!(from = self.level, to = height, "skip list grows");
            self.level = height;
        }

        let forward = (0..height).map(|level| self.forward(update[level], level)).collect();
        let index = self.alloc(SkipNode { value, forward });
        for (level, &predecessor) in update.iter().enumerate().take(height) {
            self.set_forward(predecessor, level, Some(index));
        }
        self.len += 1;
        true
    }

    pub fn contains(&self, value: &T) -> bool {
        self.lower_bound(value)
            .and_then(|index| self.value(index))
            .is_some_and(|found| found == value)
    }

    /// # Returns
    /// `true` if `value` was present
    pub fn remove(&mut self, value: &T) -> bool {
        let update = self.predecessors(value);
        let Some(target) = self
            .forward(update[0], 0)
            .filter(|&index| self.value(index) == Some(value))
        else {
            return false;
        };
        let Some(node) = self.nodes.get_mut(target).and_then(Option::take) else {
            return false;
        };

        for (level, &next) in node.forward.iter().enumerate() {
            self.set_forward(update[level], level, next);
        }
        self.free.push(target);
        self.len -= 1;

        let before = self.level;
        while self.level > 0 && self.head[self.level - 1].is_none() {
            self.level -= 1;
        }
        if self.level != before {
            trace!(from = before, to = self.level, "skip list shrinks");
        }
        true
    }

    /// Values `v` with `lo <= v <= hi`, ascending.
    pub fn range(&self, lo: &T, hi: &T) -> Vec<&T> {
        Iter {
            list: self,
            next: self.lower_bound(lo),
        }
        .take_while(|value| *value <= hi)
        .collect()
    }

    pub fn first(&self) -> Option<&T> {
        self.head.first().copied().flatten().and_then(|index| self.value(index))
    }

    pub fn last(&self) -> Option<&T> {
        let mut current = None;
        for level in (0..self.level).rev() {
            while let Some(next) = self.forward(current, level) {
                current = Some(next);
            }
        }
        current.and_then(|index| self.value(index))
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
        self.free.clear();
        self.head.iter_mut().for_each(|link| *link = None);
        self.level = 0;
        self.len = 0;
    }
}

impl<T> SkipList<T> {
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of levels currently in use.
    pub fn level(&self) -> usize {
        self.level
    }

    /// Values in ascending order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            next: self.head.first().copied().flatten(),
        }
    }

    /// Values linked on `level`, ascending.
    fn level_values(&self, level: usize) -> Vec<&T> {
        let mut out = Vec::new();
        let mut next = self.head.get(level).copied().flatten();
        while let Some(node) = next.and_then(|index| self.nodes.get(index)?.as_ref()) {
            out.push(&node.value);
            next = node.forward.get(level).copied().flatten();
        }
        out
    }
}

pub struct Iter<'a, T> {
    list: &'a SkipList<T>,
    next: Option<usize>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.list.nodes.get(self.next?)?.as_ref()?;
        self.next = node.forward.first().copied().flatten();
        Some(&node.value)
    }
}

impl<'a, T> IntoIterator for &'a SkipList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Ord> Default for SkipList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> Extend<T> for SkipList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T: Ord> FromIterator<T> for SkipList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = SkipList::new();
        list.extend(iter);
        list
    }
}

impl<T: fmt::Debug> fmt::Debug for SkipList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SkipList")
            .field("level", &self.level)
            .field("values", &self.iter().collect::<Vec<_>>())
            .finish()
    }
}

/// One line per level, top level first: `Level 1: 3 -> 9 -> nil`.
impl<T: fmt::Display> fmt::Display for SkipList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for level in (0..self.level).rev() {
            write!(f, "Level {level}: ")?;
            for value in self.level_values(level) {
                write!(f, "{value} -> ")?;
            }
            write!(f, "nil")?;
            if level > 0 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
