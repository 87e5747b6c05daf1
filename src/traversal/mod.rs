//! Relative-reachability search.
//!
//! Breadth-first expansion from one person along parent edges, plus at most
//! one spouse edge per path. Every person reached is tagged with the
//! `KinPath` of the walk that found it first.
//!
//! ```text
//! Carol ─P→ Alice ─P→ Alice's parents ...
//!   │         └─S→ Bob           (already reached via P, skipped)
//!   └─P→ Bob ─P→ Bob's parents ...
//! ```
//!
//! A person is marked when enqueued and never enqueued again, so the search
//! ends after at most one expansion per person, even on cyclic input.

use std::collections::VecDeque;

use hashbrown::HashMap;

use crate::family::Family;
use crate::model::*;

// ============================================================================
// Reachable
// ============================================================================

/// People reachable from a starting person, in discovery order.
#[derive(Debug, Clone)]
pub struct Reachable {
    order: Vec<(PersonId, KinPath)>,
    index: HashMap<PersonId, usize>,
}

impl Reachable {
    fn seeded(start: PersonId) -> Self {
        let mut found = Self {
            order: Vec::new(),
            index: HashMap::new(),
        };
        found.insert(start, KinPath::empty());
        found
    }

    fn insert(&mut self, id: PersonId, path: KinPath) {
        self.index.insert(id, self.order.len());
        self.order.push((id, path));
    }

    /// The person the search started from.
    pub fn start(&self) -> PersonId {
        self.order[0].0
    }

    pub fn path_to(&self, id: PersonId) -> Option<&KinPath> {
        self.index.get(&id).map(|&i| &self.order[i].1)
    }

    pub fn contains(&self, id: PersonId) -> bool {
        self.index.contains_key(&id)
    }

    /// Always at least 1: the start is reachable from itself.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// `(person, path)` pairs in the order the search found them.
    pub fn iter(&self) -> impl Iterator<Item = (PersonId, &KinPath)> {
        self.order.iter().map(|(id, path)| (*id, path))
    }
}

// ============================================================================
// Search
// ============================================================================

/// Everyone reachable from `start`, each with the path that first found them.
///
/// Per expanded person: parents first, in stored order, then the spouse,
/// and the spouse only when the path so far holds no `S` hop.
pub fn reachable(family: &Family, start: PersonId) -> Reachable {
    let mut found = Reachable::seeded(start);
    let mut queue = VecDeque::from([(start, KinPath::empty())]);

    while let Some((id, path)) = queue.pop_front() {
        let Some(person) = family.get(id) else {
            continue;
        };
        tracing::trace!(person = %person.name, path = %path, "expanding");

        for &parent in &person.parents {
            if !found.contains(parent) {
                let next = path.then(Hop::Parent);
                found.insert(parent, next.clone());
                queue.push_back((parent, next));
            }
        }

        if let Some(spouse) = person.spouse {
            if !path.has_spouse_hop() && !found.contains(spouse) {
                let next = path.then(Hop::Spouse);
                found.insert(spouse, next.clone());
                queue.push_back((spouse, next));
            }
        }
    }

    tracing::debug!(start = %family.name_of(start), reached = found.len(), "reachability search done");
    found
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::family::FamilyBuilder;
    use pretty_assertions::assert_eq;

    fn paths(family: &Family, from: &str) -> Vec<(String, String)> {
        let start = family.id_of(from).unwrap();
        reachable(family, start)
            .iter()
            .map(|(id, p)| (family.name_of(id).to_string(), p.to_string()))
            .collect()
    }

    fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
        items.iter().map(|(a, b)| (a.to_string(), b.to_string())).collect()
    }

    #[test]
    fn test_start_has_empty_path() {
        let mut b = FamilyBuilder::new();
        b.add_person("Solo", "female");
        let family = b.build();
        assert_eq!(paths(&family, "Solo"), pairs(&[("Solo", "")]));
    }

    #[test]
    fn test_parents_before_spouse_in_discovery_order() {
        let mut b = FamilyBuilder::new();
        for (n, g) in [("Kid", "male"), ("Mom", "female"), ("Dad", "male"), ("Wife", "female")] {
            b.add_person(n, g);
        }
        b.add_parent("Kid", "Mom").unwrap();
        b.add_parent("Kid", "Dad").unwrap();
        b.add_couple("Kid", "Wife").unwrap();
        let family = b.build();

        assert_eq!(
            paths(&family, "Kid"),
            pairs(&[("Kid", ""), ("Mom", "P"), ("Dad", "P"), ("Wife", "S")])
        );
    }

    #[test]
    fn test_spouse_of_parent_already_seen_is_skipped() {
        let mut b = FamilyBuilder::new();
        for (n, g) in [("Carol", "female"), ("Alice", "female"), ("Bob", "male")] {
            b.add_person(n, g);
        }
        b.add_parent("Carol", "Alice").unwrap();
        b.add_parent("Carol", "Bob").unwrap();
        b.add_couple("Alice", "Bob").unwrap();
        let family = b.build();

        assert_eq!(
            paths(&family, "Carol"),
            pairs(&[("Carol", ""), ("Alice", "P"), ("Bob", "P")])
        );
    }

    #[test]
    fn test_at_most_one_spouse_hop() {
        // Me -S→ Wife -P→ FatherInLaw -S→ (his second wife: not reachable)
        let mut b = FamilyBuilder::new();
        for (n, g) in [("Me", "male"), ("Wife", "female"), ("FatherInLaw", "male"), ("StepMil", "female")] {
            b.add_person(n, g);
        }
        b.add_couple("Me", "Wife").unwrap();
        b.add_parent("Wife", "FatherInLaw").unwrap();
        b.add_couple("FatherInLaw", "StepMil").unwrap();
        let family = b.build();

        assert_eq!(
            paths(&family, "Me"),
            pairs(&[("Me", ""), ("Wife", "S"), ("FatherInLaw", "SP")])
        );
    }

    #[test]
    fn test_parent_spouse_is_reached_before_any_spouse_hop() {
        let mut b = FamilyBuilder::new();
        for (n, g) in [("Kid", "female"), ("Dad", "male"), ("Stepmom", "female")] {
            b.add_person(n, g);
        }
        b.add_parent("Kid", "Dad").unwrap();
        b.add_couple("Dad", "Stepmom").unwrap();
        let family = b.build();

        assert_eq!(
            paths(&family, "Kid"),
            pairs(&[("Kid", ""), ("Dad", "P"), ("Stepmom", "PS")])
        );
    }

    #[test]
    fn test_shared_ancestor_recorded_once_with_shortest_path() {
        // Grandma is both a grandparent (via Mom) and a great-grandparent (via Dad's line).
        let mut b = FamilyBuilder::new();
        for (n, g) in [("Kid", "male"), ("Mom", "female"), ("Dad", "male"), ("DadsMom", "female"), ("Grandma", "female")] {
            b.add_person(n, g);
        }
        b.add_parent("Kid", "Mom").unwrap();
        b.add_parent("Kid", "Dad").unwrap();
        b.add_parent("Mom", "Grandma").unwrap();
        b.add_parent("Dad", "DadsMom").unwrap();
        b.add_parent("DadsMom", "Grandma").unwrap();
        let family = b.build();

        let kid = family.id_of("Kid").unwrap();
        let grandma = family.id_of("Grandma").unwrap();
        let found = reachable(&family, kid);
        assert_eq!(found.path_to(grandma).map(KinPath::as_str), Some("PP"));
        assert_eq!(found.len(), 5);
    }

    #[test]
    fn test_cyclic_input_terminates() {
        let mut b = FamilyBuilder::new();
        b.add_person("A", "female");
        b.add_person("B", "male");
        b.add_parent("A", "B").unwrap();
        b.add_parent("B", "A").unwrap();
        let family = b.build();

        assert_eq!(paths(&family, "A"), pairs(&[("A", ""), ("B", "P")]));
    }

    #[test]
    fn test_unknown_start_yields_only_itself() {
        let family = FamilyBuilder::new().build();
        let found = reachable(&family, PersonId(7));
        assert_eq!(found.len(), 1);
        assert_eq!(found.start(), PersonId(7));
        assert_eq!(found.path_to(PersonId(7)).map(KinPath::as_str), Some(""));
    }
}
