//! # kinship: Named Relationships in a Family Graph
//!
//! Answers "how is A related to B?" for a small, hand-built family:
//! people, their parents, and who is married to whom.
//!
//! ## Design Principles
//!
//! 1. **Arena graph**: `Family` owns every `Person`; links are `PersonId` indices
//! 2. **Paths as keys**: a walk is encoded as `P`/`S` hops, e.g. `"PP:P"`
//! 3. **Table-driven**: path → term lives in data (`TermTable`), not in code
//! 4. **Read-only queries**: a built `Family` is never mutated
//!
//! ## Quick Start
//!
//! ```rust
//! use kinship::{FamilyRecords, FamilyTree};
//!
//! # fn example() -> kinship::Result<()> {
//! let records = FamilyRecords::from_json_str(r#"{
//!     "individuals": {"Alice": "female", "Bob": "male", "Carol": "female"},
//!     "parents": {"Carol": ["Alice", "Bob"]},
//!     "couples": [["Alice", "Bob"]]
//! }"#)?;
//!
//! let tree = FamilyTree::from_records(&records)?;
//! assert_eq!(tree.relation("Alice", "Carol")?.as_deref(), Some("mother"));
//! assert_eq!(tree.relation("Bob", "Carol")?.as_deref(), Some("father"));
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```
//!
//! ## Outcomes
//!
//! | Result | Meaning |
//! |--------|---------|
//! | `Ok(Some(term))` | Related; `term` from the table or the fallback |
//! | `Ok(None)` | Both people exist but share no relative |
//! | `Err(LookupMiss)` | A queried name is not in the family |

use std::path::Path;

// ============================================================================
// Modules
// ============================================================================

pub mod model;
pub mod family;
pub mod traversal;
pub mod relation;
pub mod table;

// ============================================================================
// Re-exports
// ============================================================================

pub use model::{Person, PersonId, Gender, Hop, KinPath, CombinedPath};
pub use family::{Family, FamilyBuilder, FamilyRecords};
pub use traversal::{reachable, Reachable};
pub use relation::{resolve, Relation, Classification, ResolverConfig, DISTANT_RELATIVE};
pub use table::{TermTable, TableSource};

// ============================================================================
// Top-level handle
// ============================================================================

/// A built family plus the table used to name relationships.
#[derive(Debug, Clone)]
pub struct FamilyTree {
    family: Family,
    table: TermTable,
    config: ResolverConfig,
}

impl FamilyTree {
    pub fn new(family: Family, table: TermTable) -> Self {
        Self {
            family,
            table,
            config: ResolverConfig::default(),
        }
    }

    pub fn with_config(mut self, config: ResolverConfig) -> Self {
        self.config = config;
        self
    }

    /// Build from records, classifying with the built-in table.
    pub fn from_records(records: &FamilyRecords) -> Result<Self> {
        Ok(Self::new(Family::from_records(records)?, TermTable::builtin()?))
    }

    /// Load a family JSON file and the table from `source`.
    pub fn open(path: impl AsRef<Path>, source: &TableSource) -> Result<Self> {
        let records = FamilyRecords::from_path(path)?;
        let family = Family::from_records(&records)?;
        Ok(Self::new(family, TermTable::load(source)?))
    }

    /// How `name1` is related to `name2`: a term, or `None` if unrelated.
    pub fn relation(&self, name1: &str, name2: &str) -> Result<Option<String>> {
        Ok(self
            .explain(name1, name2)?
            .map(|rel| rel.term(&self.config.fallback_term).to_string()))
    }

    /// Like `relation`, but keeps the path and the shared relative.
    pub fn explain(&self, name1: &str, name2: &str) -> Result<Option<Relation>> {
        let a = self.family.lookup(name1)?.id;
        let b = self.family.lookup(name2)?.id;
        Ok(resolve(&self.family, &self.table, &self.config, a, b))
    }

    /// Everyone reachable from `name`, with their paths.
    pub fn reachable(&self, name: &str) -> Result<Reachable> {
        let start = self.family.lookup(name)?.id;
        Ok(reachable(&self.family, start))
    }

    pub fn family(&self) -> &Family {
        &self.family
    }

    pub fn table(&self) -> &TermTable {
        &self.table
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }
}

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Reference error: '{name}' ({role}) is not a declared individual")]
    Reference { name: String, role: String },

    #[error("Lookup miss: no person named '{0}'")]
    LookupMiss(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
