use std::{
    borrow::Borrow,
    fmt,
    hash::{BuildHasher, Hash},
};

use hashbrown::DefaultHashBuilder;
use tracing::debug;

use crate::hashing::HashTableConfig;

/// A hash map resolving collisions by separate chaining.
///
/// Every bucket is a vector of `(key, value)` pairs kept in insertion order.
/// Before each insert, if `len / bucket_count` has reached the configured load
/// factor, the bucket array doubles and every entry is rehashed.
///
/// # Examples
///
/// ```
/// use classics::hashing::HashTable;
///
/// let mut table = HashTable::new();
/// table.insert("banana", 2);
/// assert_eq!(table.insert("banana", 20), Some(2));
/// assert_eq!(table.get("banana"), Some(&20));
/// ```
#[derive(Clone)]
pub struct HashTable<K, V, S = DefaultHashBuilder> {
    buckets: Vec<Vec<(K, V)>>,
    len: usize,
    load_factor: f64,
    hasher: S,
}

fn empty_buckets<K, V>(count: usize) -> Vec<Vec<(K, V)>> {
    (0..count).map(|_| Vec::new()).collect()
}

impl<K: Hash + Eq, V> HashTable<K, V, DefaultHashBuilder> {
    pub fn new() -> Self {
        Self::with_config(HashTableConfig::default())
    }

    /// # Panics
    /// See [`HashTable::with_hasher`].
    pub fn with_config(config: HashTableConfig) -> Self {
        Self::with_hasher(config, DefaultHashBuilder::default())
    }
}

impl<K: Hash + Eq, V, S: BuildHasher> HashTable<K, V, S> {
    /// # Panics
    /// If `config.initial_buckets` is zero or `config.load_factor` is not a
    /// positive finite number.
    pub fn with_hasher(config: HashTableConfig, hasher: S) -> Self {
        config.validate();
        HashTable {
            buckets: empty_buckets(config.initial_buckets),
            len: 0,
            load_factor: config.load_factor,
            hasher,
        }
    }

    fn bucket_index<Q: Hash + ?Sized>(&self, key: &Q) -> usize {
        (self.hasher.hash_one(key) % self.buckets.len() as u64) as usize
    }

    fn grow(&mut self) {
        let bucket_count = self.buckets.len() * 2;
        debug!(
            from = self.buckets.len(),
            to = bucket_count,
            len = self.len,
            "hash table resize"
        );
        let old = std::mem::replace(&mut self.buckets, empty_buckets(bucket_count));
        for (key, value) in old.into_iter().flatten() {
            let index = self.bucket_index(&key);
            self.buckets[index].push((key, value));
        }
    }

    /// Inserts or replaces the value of `key`.
    ///
    /// # Returns
    /// The previous value of `key`, if any
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        if self.load() >= self.load_factor {
            self.grow();
        }
        let index = self.bucket_index(&key);
        let bucket = &mut self.buckets[index];
        if let Some((_, slot)) = bucket.iter_mut().find(|(k, _)| *k == key) {
            return Some(std::mem::replace(slot, value));
        }
        bucket.push((key, value));
        self.len += 1;
        None
    }

    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let index = self.bucket_index(key);
        let bucket = &mut self.buckets[index];
        let position = bucket.iter().position(|(k, _)| k.borrow() == key)?;
        self.len -= 1;
        Some(bucket.remove(position).1)
    }

    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.buckets[self.bucket_index(key)]
            .iter()
            .find(|(k, _)| k.borrow() == key)
            .map(|(_, v)| v)
    }

    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let index = self.bucket_index(key);
        self.buckets[index]
            .iter_mut()
            .find(|(k, _)| (*k).borrow() == key)
            .map(|(_, v)| v)
    }

    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.get(key).is_some()
    }
}

impl<K, V, S> HashTable<K, V, S> {
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Current entries per bucket.
    pub fn load(&self) -> f64 {
        self.len as f64 / self.buckets.len() as f64
    }

    /// The resize threshold this table was configured with.
    pub fn load_factor(&self) -> f64 {
        self.load_factor
    }

    /// Removes every entry; the bucket count is kept.
    pub fn clear(&mut self) {
        self.buckets.iter_mut().for_each(Vec::clear);
        self.len = 0;
    }

    /// Entries in bucket order, each bucket in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> + '_ {
        self.buckets.iter().flatten().map(|(k, v)| (k, v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> + '_ {
        self.iter().map(|(k, _)| k)
    }

    pub fn values(&self) -> impl Iterator<Item = &V> + '_ {
        self.iter().map(|(_, v)| v)
    }
}

impl<K: Hash + Eq, V> Default for HashTable<K, V, DefaultHashBuilder> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Hash + Eq, V, S: BuildHasher> Extend<(K, V)> for HashTable<K, V, S> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<K: Hash + Eq, V> FromIterator<(K, V)> for HashTable<K, V, DefaultHashBuilder> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut table = HashTable::new();
        table.extend(iter);
        table
    }
}

impl<K: fmt::Debug, V: fmt::Debug, S> fmt::Debug for HashTable<K, V, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}
