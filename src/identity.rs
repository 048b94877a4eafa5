// src/identity.rs
// Browser identity values for Browser Compat Gate

use serde::Serialize;

/// A browser name/version pair as reported by a lookup source. The name keeps
/// whatever case and format the source supplied; matching against requirement
/// tables is an exact string comparison.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct BrowserIdentity {
    name: String,
    version: f64,
}

impl BrowserIdentity {
    pub fn new(name: impl Into<String>, version: f64) -> Self {
        Self {
            name: name.into(),
            version,
        }
    }

    /// Placeholder for a client the lookup could not identify, or when the
    /// lookup is disabled. An unknown identity matches no configured rule.
    pub fn unknown() -> Self {
        Self {
            name: String::new(),
            version: 0.0,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> f64 {
        self.version
    }

    pub fn is_unknown(&self) -> bool {
        self.name.is_empty()
    }
}

impl Default for BrowserIdentity {
    fn default() -> Self {
        Self::unknown()
    }
}

/// Title-case a configured browser name: first letter of each word upper,
/// remainder lower ("IE" -> "Ie", "internet explorer" -> "Internet Explorer").
pub(crate) fn title_case(name: &str) -> String {
    name.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(|c| c.to_lowercase()))
                    .collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::{title_case, BrowserIdentity};

    #[test]
    fn title_case_lowers_trailing_capitals() {
        assert_eq!(title_case("IE"), "Ie");
        assert_eq!(title_case("FIREFOX"), "Firefox");
    }

    #[test]
    fn title_case_capitalizes_each_word() {
        assert_eq!(title_case("internet explorer"), "Internet Explorer");
        assert_eq!(title_case("safari"), "Safari");
    }

    #[test]
    fn unknown_identity_has_empty_name() {
        let identity = BrowserIdentity::unknown();
        assert!(identity.is_unknown());
        assert_eq!(identity.name(), "");
        assert_eq!(identity.version(), 0.0);
    }

    #[test]
    fn named_identity_is_not_unknown() {
        let identity = BrowserIdentity::new("Chrome", 120.0);
        assert!(!identity.is_unknown());
        assert_eq!(identity.name(), "Chrome");
        assert_eq!(identity.version(), 120.0);
    }
}
