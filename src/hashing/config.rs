/// Construction parameters of a [`HashTable`](super::HashTable).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HashTableConfig {
    /// Bucket count before the first resize.
    pub initial_buckets: usize,
    /// Entries per bucket at which the next insert doubles the bucket array.
    pub load_factor: f64,
}

impl HashTableConfig {
    pub fn new(initial_buckets: usize, load_factor: f64) -> Self {
        HashTableConfig {
            initial_buckets,
            load_factor,
        }
    }

    /// # Panics
    /// If there are no buckets or the load factor is not a positive finite number.
    pub(crate) fn validate(&self) {
        assert!(self.initial_buckets > 0, "a hash table needs at least one bucket");
        assert!(
            self.load_factor.is_finite() && self.load_factor > 0.0,
            "load factor must be positive, got {}",
            self.load_factor
        );
    }
}

impl Default for HashTableConfig {
    fn default() -> Self {
        HashTableConfig::new(10, 0.75)
    }
}
