//! Relationship resolution.
//!
//! Two reachability searches, one from each person, meet at the people both
//! can reach. The meeting point with the shortest combined path names the
//! relationship:
//!
//! ```text
//! reachable(A) ∩ reachable(B) → "{path_a}:{path_b}" → shortest → term table
//! ```
//!
//! Ties on length go to whichever shared relative the search from A found
//! first. That keeps results reproducible when several meeting points are
//! equally close (double cousins, married siblings-in-law, ...).

use serde::{Deserialize, Serialize};

use crate::family::Family;
use crate::model::*;
use crate::table::TermTable;
use crate::traversal::reachable;

// ============================================================================
// Configuration
// ============================================================================

/// Classification knobs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    /// Term used when the shortest path has no table entry.
    pub fallback_term: String,
    /// Gender key consulted when an entry has no term for the person's own gender.
    pub neutral_gender: String,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            fallback_term: DISTANT_RELATIVE.to_string(),
            neutral_gender: "nonbinary".to_string(),
        }
    }
}

pub const DISTANT_RELATIVE: &str = "distant relative";

// ============================================================================
// Result types
// ============================================================================

/// How a combined path was classified.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Classification {
    /// The table had a term for this path.
    Named(String),
    /// Related, but the path is not in the table.
    Distant,
}

/// A resolved relationship between two people.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Relation {
    /// The shortest combined path found.
    pub path: CombinedPath,
    /// The shared relative the two halves of `path` meet at.
    pub via: PersonId,
    pub classification: Classification,
}

impl Relation {
    /// The term to show, with `fallback` standing in for `Distant`.
    pub fn term<'a>(&'a self, fallback: &'a str) -> &'a str {
        match &self.classification {
            Classification::Named(term) => term,
            Classification::Distant => fallback,
        }
    }

    pub fn is_distant(&self) -> bool {
        self.classification == Classification::Distant
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// The shared relative with the shortest combined path from `a` and `b`,
/// or `None` if they share nobody.
pub fn closest_common(family: &Family, a: PersonId, b: PersonId) -> Option<(PersonId, CombinedPath)> {
    let from_a = reachable(family, a);
    let from_b = reachable(family, b);

    let mut best: Option<(PersonId, CombinedPath)> = None;
    for (relative, path_a) in from_a.iter() {
        let Some(path_b) = from_b.path_to(relative) else {
            continue;
        };
        let candidate = CombinedPath::new(path_a.clone(), path_b.clone());
        if best.as_ref().is_none_or(|(_, current)| candidate.len() < current.len()) {
            best = Some((relative, candidate));
        }
    }
    best
}

/// Resolve how `a` is related to `b`. `None` means not related.
///
/// The term is picked by `a`'s gender.
pub fn resolve(
    family: &Family,
    table: &TermTable,
    config: &ResolverConfig,
    a: PersonId,
    b: PersonId,
) -> Option<Relation> {
    let (via, path) = closest_common(family, a, b)?;
    let key = path.key();

    let classification = family
        .get(a)
        .and_then(|person| table.term_for(&key, &person.gender, &config.neutral_gender))
        .map_or(Classification::Distant, |term| Classification::Named(term.to_string()));

    tracing::debug!(
        a = %family.name_of(a),
        b = %family.name_of(b),
        via = %family.name_of(via),
        path = %key,
        ?classification,
        "relation resolved"
    );

    Some(Relation { path, via, classification })
}
