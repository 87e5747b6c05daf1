//! Person in the family graph.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Opaque person identifier: an index into the owning `Family` arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PersonId(pub u32);

impl PersonId {
    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for PersonId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Gender category. Only used to pick a gendered term from the table,
/// so it is kept as the raw string the input data supplied.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Gender(pub String);

impl Gender {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Gender {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for Gender {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A person node.
///
/// `parents` and `spouse` are non-owning links into the same `Family`.
/// Most people have two parents, so the list stays inline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub id: PersonId,
    pub name: String,
    pub gender: Gender,
    pub parents: SmallVec<[PersonId; 2]>,
    pub spouse: Option<PersonId>,
}

impl Person {
    pub fn new(id: PersonId, name: impl Into<String>, gender: impl Into<Gender>) -> Self {
        Self {
            id,
            name: name.into(),
            gender: gender.into(),
            parents: SmallVec::new(),
            spouse: None,
        }
    }

    pub fn has_parent(&self, id: PersonId) -> bool {
        self.parents.contains(&id)
    }

    pub fn is_married_to(&self, id: PersonId) -> bool {
        self.spouse == Some(id)
    }
}
