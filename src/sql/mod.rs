//! Illustrative SQL scripts against a small shop schema, embedded at compile time.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

pub const SCHEMA: &str = include_str!("schema.sql");
pub const CRUD: &str = include_str!("crud.sql");
pub const OPTIMIZATION: &str = include_str!("optimization.sql");

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Snippet {
    /// Tables, keys and constraints
    Schema,
    /// Insert, select, update and delete statements
    Crud,
    /// Indexes, query plans and pagination
    Optimization,
}

impl Snippet {
    pub fn all() -> &'static [Snippet] {
        &[Snippet::Schema, Snippet::Crud, Snippet::Optimization]
    }

    pub fn name(self) -> &'static str {
        match self {
            Snippet::Schema => "schema",
            Snippet::Crud => "crud",
            Snippet::Optimization => "optimization",
        }
    }

    pub fn sql(self) -> &'static str {
        match self {
            Snippet::Schema => SCHEMA,
            Snippet::Crud => CRUD,
            Snippet::Optimization => OPTIMIZATION,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schema_declares_every_table() {
        for table in ["users", "products", "orders", "order_items"] {
            assert!(SCHEMA.contains(&format!("CREATE TABLE {table}")), "{table}");
        }
    }

    #[test]
    fn crud_covers_every_verb() {
        for verb in ["INSERT INTO", "SELECT", "UPDATE", "DELETE FROM"] {
            assert!(CRUD.contains(verb), "{verb}");
        }
    }

    #[test]
    fn snippets_are_distinct_and_named() {
        let names: Vec<&str> = Snippet::all().iter().map(|s| s.name()).collect();
        assert_eq!(names, ["schema", "crud", "optimization"]);
        assert!(Snippet::Optimization.sql().contains("EXPLAIN"));
        assert_ne!(Snippet::Schema.sql(), Snippet::Crud.sql());
    }
}
