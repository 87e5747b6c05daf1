//! Kinship paths: the `P`/`S` hop strings used as table keys.

use serde::{Deserialize, Serialize};

/// A single hop between two people.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Hop {
    /// Move from a person to one of their parents.
    Parent,
    /// Move from a person to their spouse.
    Spouse,
}

impl Hop {
    pub fn as_char(self) -> char {
        match self {
            Hop::Parent => 'P',
            Hop::Spouse => 'S',
        }
    }
}

/// Hops taken from a starting person to a relative, e.g. `"PP"` for a
/// grandparent or `"SP"` for a parent-in-law.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KinPath(String);

impl KinPath {
    /// The empty path: the starting person themself.
    pub fn empty() -> Self {
        Self(String::new())
    }

    /// A new path with `hop` appended.
    pub fn then(&self, hop: Hop) -> Self {
        let mut next = String::with_capacity(self.0.len() + 1);
        next.push_str(&self.0);
        next.push(hop.as_char());
        Self(next)
    }

    pub fn has_spouse_hop(&self) -> bool {
        self.0.contains(Hop::Spouse.as_char())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn hops(&self) -> impl Iterator<Item = Hop> + '_ {
        self.0.chars().map(|c| if c == 'S' { Hop::Spouse } else { Hop::Parent })
    }
}

impl std::fmt::Display for KinPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Separator between the two halves of a combined path.
pub const PATH_SEPARATOR: char = ':';

/// Two kin paths meeting at a shared relative: `"{from_a}:{from_b}"`.
///
/// The rendered string is the lookup key into the term table.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CombinedPath {
    pub from_a: KinPath,
    pub from_b: KinPath,
}

impl CombinedPath {
    pub fn new(from_a: KinPath, from_b: KinPath) -> Self {
        Self { from_a, from_b }
    }

    /// Length of the rendered key, separator included.
    pub fn len(&self) -> usize {
        self.from_a.len() + 1 + self.from_b.len()
    }

    /// Never true: the separator is always present.
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn key(&self) -> String {
        self.to_string()
    }
}

impl std::fmt::Display for CombinedPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}{}", self.from_a, PATH_SEPARATOR, self.from_b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_then_appends_hop() {
        let p = KinPath::empty().then(Hop::Parent).then(Hop::Spouse);
        assert_eq!(p.as_str(), "PS");
        assert_eq!(p.len(), 2);
        assert!(p.has_spouse_hop());
        assert_eq!(p.hops().collect::<Vec<_>>(), vec![Hop::Parent, Hop::Spouse]);
    }

    #[test]
    fn test_parent_only_path_has_no_spouse_hop() {
        let p = KinPath::empty().then(Hop::Parent).then(Hop::Parent);
        assert!(!p.has_spouse_hop());
    }

    #[test]
    fn test_combined_key() {
        let a = KinPath::empty().then(Hop::Parent).then(Hop::Parent);
        let b = KinPath::empty().then(Hop::Parent);
        let combined = CombinedPath::new(a, b);
        assert_eq!(combined.key(), "PP:P");
        assert_eq!(combined.len(), 4);
    }

    #[test]
    fn test_self_key_is_bare_separator() {
        let combined = CombinedPath::new(KinPath::empty(), KinPath::empty());
        assert_eq!(combined.key(), ":");
        assert_eq!(combined.len(), 1);
    }
}
