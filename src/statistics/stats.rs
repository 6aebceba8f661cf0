use std::time::Duration;

use serde::Serialize;

use crate::sorting::SortAlgorithm;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SortStats {
    algorithm: SortAlgorithm,
    runs: usize,
    elements_sorted: usize,
    total_nanos: u128,
}

impl SortStats {
    pub fn new(algorithm: SortAlgorithm) -> Self {
        SortStats {
            algorithm,
            runs: 0,
            elements_sorted: 0,
            total_nanos: 0,
        }
    }

    /// Record one run over `elements` values that took `elapsed`
    pub fn record(&mut self, elements: usize, elapsed: Duration) {
        self.runs += 1;
        self.elements_sorted += elements;
        self.total_nanos += elapsed.as_nanos();
    }

    /// Combine the runs of two statistics objects gathered for the same algorithm.
    ///
    /// # Panics
    /// If the two objects track different algorithms.
    pub fn merge(&self, other: &SortStats) -> SortStats {
        assert_eq!(self.algorithm, other.algorithm, "merging stats of different sorts");
        SortStats {
            algorithm: self.algorithm,
            runs: self.runs + other.runs,
            elements_sorted: self.elements_sorted + other.elements_sorted,
            total_nanos: self.total_nanos + other.total_nanos,
        }
    }

    /// Mean run time, `None` before the first run.
    pub fn mean_nanos(&self) -> Option<f64> {
        (self.runs > 0).then(|| self.total_nanos as f64 / self.runs as f64)
    }

    pub fn get_algorithm(&self) -> SortAlgorithm {
        self.algorithm
    }

    pub fn get_runs(&self) -> usize {
        self.runs
    }

    pub fn get_elements_sorted(&self) -> usize {
        self.elements_sorted
    }

    pub fn get_total_nanos(&self) -> u128 {
        self.total_nanos
    }
}

impl Default for SortStats {
    fn default() -> Self {
        SortStats::new(SortAlgorithm::Quick)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_stats_initialized_to_zero() {
        let stats = SortStats::new(SortAlgorithm::Merge);
        assert_eq!(stats.get_algorithm(), SortAlgorithm::Merge);
        assert_eq!(stats.get_runs(), 0);
        assert_eq!(stats.get_elements_sorted(), 0);
        assert_eq!(stats.get_total_nanos(), 0);
        assert_eq!(stats.mean_nanos(), None);
    }

    #[test]
    fn test_default_stats_initialized_to_zero() {
        let stats = SortStats::default();
        assert_eq!(stats.get_runs(), 0);
        assert_eq!(stats.get_total_nanos(), 0);
    }

    #[test]
    fn test_record_accumulates() {
        let mut stats = SortStats::new(SortAlgorithm::Heap);
        stats.record(100, Duration::from_nanos(300));
        stats.record(50, Duration::from_nanos(100));
        assert_eq!(stats.get_runs(), 2);
        assert_eq!(stats.get_elements_sorted(), 150);
        assert_eq!(stats.get_total_nanos(), 400);
        assert_eq!(stats.mean_nanos(), Some(200.0));
    }

    #[test]
    fn test_merge_sums_fields() {
        let mut a = SortStats::new(SortAlgorithm::Radix);
        a.record(10, Duration::from_nanos(5));
        let mut b = SortStats::new(SortAlgorithm::Radix);
        b.record(20, Duration::from_nanos(7));
        b.record(30, Duration::from_nanos(9));

        let merged = a.merge(&b);
        assert_eq!(merged.get_runs(), 3);
        assert_eq!(merged.get_elements_sorted(), 60);
        assert_eq!(merged.get_total_nanos(), 21);
    }

    #[test]
    fn test_merge_with_empty_is_identity() {
        let mut a = SortStats::new(SortAlgorithm::Bubble);
        a.record(4, Duration::from_micros(1));
        assert_eq!(a.merge(&SortStats::new(SortAlgorithm::Bubble)), a);
    }

    #[test]
    #[should_panic]
    fn test_merge_different_algorithms_panics() {
        let _ = SortStats::new(SortAlgorithm::Bubble).merge(&SortStats::new(SortAlgorithm::Quick));
    }

    #[test]
    fn test_serializes_to_json() {
        let mut stats = SortStats::new(SortAlgorithm::Counting);
        stats.record(3, Duration::from_nanos(12));
        let json = serde_json::to_value(&stats).unwrap();
        assert_eq!(json["algorithm"], "counting");
        assert_eq!(json["runs"], 1);
        assert_eq!(json["elements_sorted"], 3);
        assert_eq!(json["total_nanos"], 12);
    }
}
