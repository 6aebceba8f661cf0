/// Fixed-size chained table keyed by `key % size`.
///
/// Inserting never replaces: colliding and even repeated keys coexist in
/// their chain, and lookups return the first one inserted.
#[derive(Debug, Clone)]
pub struct ModuloTable<V> {
    chains: Vec<Vec<(u64, V)>>,
}

impl<V> ModuloTable<V> {
    /// # Panics
    /// If `size` is zero.
    pub fn new(size: usize) -> Self {
        assert!(size > 0, "a modulo table needs at least one slot");
        ModuloTable {
            chains: (0..size).map(|_| Vec::new()).collect(),
        }
    }

    pub fn size(&self) -> usize {
        self.chains.len()
    }

    fn slot(&self, key: u64) -> usize {
        (key % self.chains.len() as u64) as usize
    }

    pub fn insert(&mut self, key: u64, value: V) {
        let slot = self.slot(key);
        self.chains[slot].push((key, value));
    }

    /// O(1) on average, O(n) when every key collides.
    pub fn search(&self, key: u64) -> Option<&V> {
        self.chains[self.slot(key)]
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v)
    }

    /// Length of the chain `key` hashes to.
    pub fn chain_len(&self, key: u64) -> usize {
        self.chains[self.slot(key)].len()
    }

    pub fn len(&self) -> usize {
        self.chains.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.chains.iter().all(Vec::is_empty)
    }
}
