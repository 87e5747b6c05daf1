//! # Family Graph
//!
//! Arena of `Person` nodes keyed by name. Parent and spouse links are
//! `PersonId` indices into the same arena.
//!
//! ## Lifecycle
//!
//! A `Family` is assembled once through `FamilyBuilder` (or in bulk via
//! `Family::from_records`) and is read-only afterwards. There is no
//! mutation API on a built `Family`, so a shared instance can serve
//! any number of concurrent queries.
//!
//! ## Validation
//!
//! Only references are checked: every parent, child, and spouse name must
//! already be declared. Cycles and odd shapes are accepted as-is.

pub mod records;

use hashbrown::HashMap;

use crate::model::*;
use crate::{Error, Result};

pub use records::FamilyRecords;

// ============================================================================
// Family
// ============================================================================

/// Immutable family graph.
#[derive(Debug, Clone, Default)]
pub struct Family {
    people: Vec<Person>,
    by_name: HashMap<String, PersonId>,
}

impl Family {
    pub fn builder() -> FamilyBuilder {
        FamilyBuilder::new()
    }

    /// Build from the three input collections.
    ///
    /// All individuals are declared first, then parent links (in the listed
    /// order per child), then couples. Fails on the first unknown name.
    pub fn from_records(records: &FamilyRecords) -> Result<Self> {
        let mut builder = FamilyBuilder::new();

        for (name, gender) in &records.individuals {
            builder.add_person(name, gender.clone());
        }
        for (child, parents) in &records.parents {
            for parent in parents {
                builder.add_parent(child, parent)?;
            }
        }
        for (a, b) in &records.couples {
            builder.add_couple(a, b)?;
        }

        Ok(builder.build())
    }

    pub fn get(&self, id: PersonId) -> Option<&Person> {
        self.people.get(id.index())
    }

    pub fn id_of(&self, name: &str) -> Option<PersonId> {
        self.by_name.get(name).copied()
    }

    /// Person by name, or `Error::LookupMiss`.
    pub fn lookup(&self, name: &str) -> Result<&Person> {
        self.id_of(name)
            .and_then(|id| self.get(id))
            .ok_or_else(|| Error::LookupMiss(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// Name for display; empty for an id from another family.
    pub fn name_of(&self, id: PersonId) -> &str {
        self.get(id).map_or("", |p| p.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.people.len()
    }

    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }

    /// People in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &Person> {
        self.people.iter()
    }
}

// ============================================================================
// FamilyBuilder
// ============================================================================

/// Incremental construction of a `Family`.
#[derive(Debug, Default)]
pub struct FamilyBuilder {
    people: Vec<Person>,
    by_name: HashMap<String, PersonId>,
}

impl FamilyBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a person. Re-declaring a name replaces its gender and keeps
    /// its id and links.
    pub fn add_person(&mut self, name: &str, gender: impl Into<Gender>) -> PersonId {
        if let Some(&id) = self.by_name.get(name) {
            self.people[id.index()].gender = gender.into();
            return id;
        }

        let id = PersonId(self.people.len() as u32);
        self.people.push(Person::new(id, name, gender));
        self.by_name.insert(name.to_string(), id);
        id
    }

    /// Append `parent` to `child`'s parent list.
    pub fn add_parent(&mut self, child: &str, parent: &str) -> Result<()> {
        let child_id = self.resolve(child, "child")?;
        let parent_id = self.resolve(parent, &format!("parent of {child}"))?;
        self.people[child_id.index()].parents.push(parent_id);
        Ok(())
    }

    /// Record `a` and `b` as spouses of each other.
    ///
    /// A previous partner of either side loses its link back, so spouse
    /// links stay pairwise symmetric.
    pub fn add_couple(&mut self, a: &str, b: &str) -> Result<()> {
        let a_id = self.resolve(a, &format!("spouse of {b}"))?;
        let b_id = self.resolve(b, &format!("spouse of {a}"))?;

        for (who, partner) in [(a_id, b_id), (b_id, a_id)] {
            if let Some(previous) = self.people[who.index()].spouse {
                if previous != partner && self.people[previous.index()].spouse == Some(who) {
                    tracing::debug!(
                        person = %self.people[who.index()].name,
                        previous = %self.people[previous.index()].name,
                        "replacing spouse link"
                    );
                    self.people[previous.index()].spouse = None;
                }
            }
        }

        self.people[a_id.index()].spouse = Some(b_id);
        self.people[b_id.index()].spouse = Some(a_id);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.people.len()
    }

    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }

    pub fn build(self) -> Family {
        let parent_links: usize = self.people.iter().map(|p| p.parents.len()).sum();
        let married = self.people.iter().filter(|p| p.spouse.is_some()).count();
        tracing::debug!(people = self.people.len(), parent_links, married, "family built");

        Family {
            people: self.people,
            by_name: self.by_name,
        }
    }

    fn resolve(&self, name: &str, role: &str) -> Result<PersonId> {
        self.by_name.get(name).copied().ok_or_else(|| Error::Reference {
            name: name.to_string(),
            role: role.to_string(),
        })
    }
}

// ============================================================================
// Tests
// ============================================================================
