//! Sorting strategies swapped at runtime behind one context.

use crate::sorting::{bubble_sort, insertion_sort, merge_sort, quick_sort};

pub trait SortStrategy {
    fn name(&self) -> &'static str;
    fn sort(&self, data: &mut Vec<i64>);
}

pub struct BubbleStrategy;
pub struct InsertionStrategy;
pub struct QuickStrategy;
pub struct MergeStrategy;

impl SortStrategy for BubbleStrategy {
    fn name(&self) -> &'static str {
        "bubble"
    }

    fn sort(&self, data: &mut Vec<i64>) {
        bubble_sort(data);
    }
}

impl SortStrategy for InsertionStrategy {
    fn name(&self) -> &'static str {
        "insertion"
    }

    fn sort(&self, data: &mut Vec<i64>) {
        insertion_sort(data);
    }
}

impl SortStrategy for QuickStrategy {
    fn name(&self) -> &'static str {
        "quick"
    }

    fn sort(&self, data: &mut Vec<i64>) {
        quick_sort(data);
    }
}

impl SortStrategy for MergeStrategy {
    fn name(&self) -> &'static str {
        "merge"
    }

    fn sort(&self, data: &mut Vec<i64>) {
        *data = merge_sort(data);
    }
}

/// Picks a strategy by input size: insertion for short inputs, quick otherwise.
pub fn strategy_for(len: usize) -> Box<dyn SortStrategy> {
    if len <= 16 {
        Box::new(InsertionStrategy)
    } else {
        Box::new(QuickStrategy)
    }
}

pub struct Sorter {
    strategy: Box<dyn SortStrategy>,
}

impl Sorter {
    pub fn new(strategy: Box<dyn SortStrategy>) -> Self {
        Sorter { strategy }
    }

    pub fn set_strategy(&mut self, strategy: Box<dyn SortStrategy>) {
        self.strategy = strategy;
    }

    pub fn strategy_name(&self) -> &'static str {
        self.strategy.name()
    }

    /// Sorts a copy of `data` with the current strategy.
    pub fn sort(&self, data: &[i64]) -> Vec<i64> {
        let mut out = data.to_vec();
        self.strategy.sort(&mut out);
        out
    }
}
