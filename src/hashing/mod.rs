//! Key-value storage by hashing.
//!
//! # Submodules
//!
//! - [`HashTable`]: separate chaining, doubling its bucket array once the load
//!   factor threshold is reached
//! - [`HashTableConfig`]: initial bucket count and load factor threshold

mod config;
mod hash_table;

pub use config::*;
pub use hash_table::*;
