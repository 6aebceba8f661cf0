use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::{
    errors::Result,
    sorting::{
        bubble_sort, counting_sort, heap_sort, insertion_sort, merge_sort, quick_sort,
        radix_sort_signed, selection_sort,
    },
};

/// The sorts of this module, selectable by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortAlgorithm {
    Bubble,
    Selection,
    Insertion,
    Heap,
    Quick,
    Merge,
    Counting,
    Radix,
}

impl SortAlgorithm {
    const ALL: [SortAlgorithm; 8] = [
        SortAlgorithm::Bubble,
        SortAlgorithm::Selection,
        SortAlgorithm::Insertion,
        SortAlgorithm::Heap,
        SortAlgorithm::Quick,
        SortAlgorithm::Merge,
        SortAlgorithm::Counting,
        SortAlgorithm::Radix,
    ];

    pub fn all() -> &'static [SortAlgorithm] {
        &Self::ALL
    }

    pub fn name(self) -> &'static str {
        match self {
            SortAlgorithm::Bubble => "bubble",
            SortAlgorithm::Selection => "selection",
            SortAlgorithm::Insertion => "insertion",
            SortAlgorithm::Heap => "heap",
            SortAlgorithm::Quick => "quick",
            SortAlgorithm::Merge => "merge",
            SortAlgorithm::Counting => "counting",
            SortAlgorithm::Radix => "radix",
        }
    }

    /// Whether equal keys keep their input order.
    pub fn is_stable(self) -> bool {
        matches!(
            self,
            SortAlgorithm::Bubble
                | SortAlgorithm::Insertion
                | SortAlgorithm::Merge
                | SortAlgorithm::Counting
                | SortAlgorithm::Radix
        )
    }

    /// Sorts `values` ascending.
    ///
    /// # Errors
    /// Counting sort refuses inputs whose key span is too large to tally.
    pub fn sort(self, values: &mut Vec<i64>) -> Result<()> {
        match self {
            SortAlgorithm::Bubble => bubble_sort(values),
            SortAlgorithm::Selection => selection_sort(values),
            SortAlgorithm::Insertion => insertion_sort(values),
            SortAlgorithm::Heap => heap_sort(values),
            SortAlgorithm::Quick => quick_sort(values),
            SortAlgorithm::Merge => *values = merge_sort(values),
            SortAlgorithm::Counting => *values = counting_sort(values)?,
            SortAlgorithm::Radix => radix_sort_signed(values),
        }
        Ok(())
    }
}

impl fmt::Display for SortAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
