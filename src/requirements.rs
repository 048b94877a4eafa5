// src/requirements.rs
// Ordered requirement tables for Browser Compat Gate

use serde::Serialize;

use crate::identity::{title_case, BrowserIdentity};
use crate::requirement::VersionConstraint;

/// Insertion-ordered mapping from a title-cased browser name to the version
/// constraint that flags it. Reinserting a name overwrites its constraint in
/// place, keeping the original position.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct RequirementTable {
    entries: Vec<(String, VersionConstraint)>,
}

impl RequirementTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a requirement under the title-cased form of `name`.
    pub fn insert(&mut self, name: &str, constraint: VersionConstraint) {
        let name = title_case(name);
        match self.entries.iter_mut().find(|(existing, _)| *existing == name) {
            Some(entry) => entry.1 = constraint,
            None => self.entries.push((name, constraint)),
        }
    }

    pub fn get(&self, name: &str) -> Option<VersionConstraint> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, constraint)| *constraint)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, VersionConstraint)> {
        self.entries
            .iter()
            .map(|(name, constraint)| (name.as_str(), *constraint))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// First-match scan in insertion order: true when an entry names this
    /// identity and its constraint is satisfied by the identity's version.
    pub fn matches(&self, identity: &BrowserIdentity) -> bool {
        self.entries.iter().any(|(name, constraint)| {
            name == identity.name() && constraint.matches(identity.version())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::RequirementTable;
    use crate::identity::BrowserIdentity;
    use crate::requirement::{Comparator, VersionConstraint};

    fn earlier_than(threshold: f64) -> VersionConstraint {
        VersionConstraint::Bound {
            comparator: Comparator::EarlierThan,
            threshold,
        }
    }

    #[test]
    fn insert_normalizes_names_to_title_case() {
        let mut table = RequirementTable::new();
        table.insert("IE", earlier_than(9.0));
        assert_eq!(table.get("Ie"), Some(earlier_than(9.0)));
        assert_eq!(table.get("IE"), None);
    }

    #[test]
    fn insert_overwrites_in_place() {
        let mut table = RequirementTable::new();
        table.insert("ie", earlier_than(9.0));
        table.insert("safari", earlier_than(7.0));
        table.insert("IE", earlier_than(11.0));

        assert_eq!(table.len(), 2);
        let names: Vec<&str> = table.iter().map(|(name, _)| name).collect();
        assert_eq!(names, ["Ie", "Safari"]);
        assert_eq!(table.get("Ie"), Some(earlier_than(11.0)));
    }

    #[test]
    fn matches_requires_exact_name_and_satisfied_constraint() {
        let mut table = RequirementTable::new();
        table.insert("ie", earlier_than(9.0));

        assert!(table.matches(&BrowserIdentity::new("Ie", 7.0)));
        assert!(!table.matches(&BrowserIdentity::new("Ie", 9.0)));
        assert!(!table.matches(&BrowserIdentity::new("ie", 7.0)));
        assert!(!table.matches(&BrowserIdentity::new("Firefox", 7.0)));
    }

    #[test]
    fn unspecified_entries_never_match() {
        let mut table = RequirementTable::new();
        table.insert("ie", VersionConstraint::Unspecified);
        assert!(!table.matches(&BrowserIdentity::new("Ie", 7.0)));
    }

    #[test]
    fn empty_table_matches_nothing() {
        let table = RequirementTable::new();
        assert!(table.is_empty());
        assert!(!table.matches(&BrowserIdentity::new("Chrome", 120.0)));
    }
}
