//! Serialized family input: individuals, parent links, couples.

use std::collections::BTreeMap;
use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::model::Gender;
use crate::Result;

/// The three input collections the `Family` is built from.
///
/// ```json
/// {
///   "individuals": {"Alice": "female", "Bob": "male", "Carol": "female"},
///   "parents": {"Carol": ["Alice", "Bob"]},
///   "couples": [["Alice", "Bob"]]
/// }
/// ```
///
/// Sorted maps keep construction order independent of file layout.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FamilyRecords {
    #[serde(default)]
    pub individuals: BTreeMap<String, Gender>,
    #[serde(default)]
    pub parents: BTreeMap<String, Vec<String>>,
    #[serde(default)]
    pub couples: Vec<(String, String)>,
}

impl FamilyRecords {
    pub fn new() -> Self {
        Self::default()
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

    pub fn with_individual(mut self, name: impl Into<String>, gender: impl Into<Gender>) -> Self {
        self.individuals.insert(name.into(), gender.into());
        self
    }

    pub fn with_parents(
        mut self,
        child: impl Into<String>,
        parents: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.parents
            .entry(child.into())
            .or_default()
            .extend(parents.into_iter().map(Into::into));
        self
    }

    pub fn with_couple(mut self, a: impl Into<String>, b: impl Into<String>) -> Self {
        self.couples.push((a.into(), b.into()));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_document() {
        let records = FamilyRecords::from_json_str(
            r#"{
                "individuals": {"Alice": "female", "Bob": "male", "Carol": "female"},
                "parents": {"Carol": ["Alice", "Bob"]},
                "couples": [["Alice", "Bob"]]
            }"#,
        )
        .unwrap();

        assert_eq!(records.individuals.len(), 3);
        assert_eq!(records.individuals["Bob"], Gender::from("male"));
        assert_eq!(records.parents["Carol"], vec!["Alice", "Bob"]);
        assert_eq!(records.couples, vec![("Alice".to_string(), "Bob".to_string())]);
    }

    #[test]
    fn test_missing_sections_default_to_empty() {
        let records = FamilyRecords::from_json_str(r#"{"individuals": {"Solo": "male"}}"#).unwrap();
        assert_eq!(records.individuals.len(), 1);
        assert!(records.parents.is_empty());
        assert!(records.couples.is_empty());
    }

    #[test]
    fn test_couple_must_be_a_pair() {
        let err = FamilyRecords::from_json_str(r#"{"couples": [["A", "B", "C"]]}"#);
        assert!(err.is_err());
    }

    #[test]
    fn test_builder_helpers_match_parsed_form() {
        let built = FamilyRecords::new()
            .with_individual("Alice", "female")
            .with_individual("Carol", "female")
            .with_parents("Carol", ["Alice"]);
        let parsed = FamilyRecords::from_json_str(
            r#"{"individuals": {"Alice": "female", "Carol": "female"}, "parents": {"Carol": ["Alice"]}}"#,
        )
        .unwrap();
        assert_eq!(built, parsed);
    }
}
