//! # Relationship-Term Table
//!
//! Maps a combined path key (`"PP:P"`) to a gender → term map
//! (`{"female": "niece", "male": "nephew"}`).
//!
//! The table is data, not code. A new relationship is a new JSON entry.
//! The built-in table is embedded at compile time from
//! `data/relationships.json`; any file with the same shape can replace it.

use std::io::Read;
use std::path::{Path, PathBuf};

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

use crate::model::Gender;
use crate::Result;

const BUILTIN_TABLE: &str = include_str!("../../data/relationships.json");

// ============================================================================
// Table source
// ============================================================================

/// Where to load the term table from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TableSource {
    /// The table compiled into the crate.
    #[default]
    Builtin,
    /// A JSON file on disk.
    File(PathBuf),
}

// ============================================================================
// TermTable
// ============================================================================

/// Gender → term for one combined path.
pub type GenderTerms = HashMap<String, String>;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TermTable {
    entries: HashMap<String, GenderTerms>,
}

impl TermTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// The embedded table.
    pub fn builtin() -> Result<Self> {
        Self::from_json_str(BUILTIN_TABLE)
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_reader(reader: impl Read) -> Result<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let file = std::fs::File::open(path.as_ref())?;
        Self::from_reader(std::io::BufReader::new(file))
    }

    pub fn load(source: &TableSource) -> Result<Self> {
        let table = match source {
            TableSource::Builtin => Self::builtin()?,
            TableSource::File(path) => Self::from_path(path)?,
        };
        tracing::debug!(entries = table.len(), source = ?source, "term table loaded");
        Ok(table)
    }

    /// Add (or replace) the term for one path and gender.
    pub fn insert(
        &mut self,
        path: impl Into<String>,
        gender: impl Into<String>,
        term: impl Into<String>,
    ) -> &mut Self {
        self.entries
            .entry(path.into())
            .or_default()
            .insert(gender.into(), term.into());
        self
    }

    pub fn entry(&self, path: &str) -> Option<&GenderTerms> {
        self.entries.get(path)
    }

    pub fn contains(&self, path: &str) -> bool {
        self.entries.contains_key(path)
    }

    /// Term for `path` and `gender`.
    ///
    /// Falls back to the entry's `neutral` term when the gender has no
    /// term of its own. `None` when the path is absent or neither key exists.
    pub fn term_for(&self, path: &str, gender: &Gender, neutral: &str) -> Option<&str> {
        let terms = self.entries.get(path)?;
        terms
            .get(gender.as_str())
            .or_else(|| terms.get(neutral))
            .map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}
