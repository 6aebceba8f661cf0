use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::searching::{
    binary_search, exponential_search, fibonacci_search, interpolation_search, linear_search,
};

/// The array searches of this module, selectable by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SearchAlgorithm {
    Linear,
    Binary,
    Exponential,
    Interpolation,
    Fibonacci,
}

impl SearchAlgorithm {
    const ALL: [SearchAlgorithm; 5] = [
        SearchAlgorithm::Linear,
        SearchAlgorithm::Binary,
        SearchAlgorithm::Exponential,
        SearchAlgorithm::Interpolation,
        SearchAlgorithm::Fibonacci,
    ];

    pub fn all() -> &'static [SearchAlgorithm] {
        &Self::ALL
    }

    pub fn name(self) -> &'static str {
        match self {
            SearchAlgorithm::Linear => "linear",
            SearchAlgorithm::Binary => "binary",
            SearchAlgorithm::Exponential => "exponential",
            SearchAlgorithm::Interpolation => "interpolation",
            SearchAlgorithm::Fibonacci => "fibonacci",
        }
    }

    /// Whether the input must be sorted ascending for the result to be meaningful.
    pub fn requires_sorted(self) -> bool {
        !matches!(self, SearchAlgorithm::Linear)
    }

    pub fn search(self, values: &[i64], target: i64) -> Option<usize> {
        match self {
            SearchAlgorithm::Linear => linear_search(values, &target),
            SearchAlgorithm::Binary => binary_search(values, &target),
            SearchAlgorithm::Exponential => exponential_search(values, &target),
            SearchAlgorithm::Interpolation => interpolation_search(values, target),
            SearchAlgorithm::Fibonacci => fibonacci_search(values, &target),
        }
    }
}

impl fmt::Display for SearchAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
