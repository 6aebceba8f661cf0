//! Comparison and distribution sorts.
//!
//! Every sort yields a non-decreasing permutation of its input. The comparison
//! sorts are generic over `T: Ord` and work in place, except [`merge_sort`]
//! which returns a new vector. The distribution sorts work on integers.
//!
//! # Submodules
//!
//! - [`bubble_sort`], [`selection_sort`], [`insertion_sort`]: quadratic, in place
//! - [`heap_sort`], [`quick_sort`], [`merge_sort`]: O(n log n)
//! - [`counting_sort`], [`counting_sort_by_key`]: O(n + span) over integer keys
//! - [`radix_sort`], [`radix_sort_signed`]: base-10 LSD digit passes
//! - [`SortAlgorithm`]: name-based dispatch used by the command line

mod algorithm;
mod bubble;
mod counting;
mod heap_sort;
mod insertion;
mod merge;
mod quick;
mod radix;
mod selection;

pub use algorithm::*;
pub use bubble::*;
pub use counting::*;
pub use heap_sort::*;
pub use insertion::*;
pub use merge::*;
pub use quick::*;
pub use radix::*;
pub use selection::*;
