//! Timing statistics collected while benchmarking the sorts.
//!
//! One [`SortStats`] accumulates every run of one algorithm; runs from separate
//! trials are combined with [`SortStats::merge`].

mod stats;
pub use stats::*;
