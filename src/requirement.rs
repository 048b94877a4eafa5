// src/requirement.rs
// Version requirement parsing for Browser Compat Gate

use serde::Serialize;

/// Relational operator of a version requirement.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Comparator {
    Exactly,
    EarlierThan,
    EqualOrEarlierThan,
    LaterThan,
    EqualOrLaterThan,
}

impl Comparator {
    pub fn as_str(self) -> &'static str {
        match self {
            Comparator::Exactly => "exactly",
            Comparator::EarlierThan => "earlier_than",
            Comparator::EqualOrEarlierThan => "equal_or_earlier_than",
            Comparator::LaterThan => "later_than",
            Comparator::EqualOrLaterThan => "equal_or_later_than",
        }
    }
}

/// A parsed version requirement. `Unspecified` stands for "no requirement
/// configured" and matches no version at all.
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum VersionConstraint {
    Unspecified,
    Bound { comparator: Comparator, threshold: f64 },
}

impl VersionConstraint {
    /// Parses a requirement string such as `">=10"`, `"<=3.5"` or `"7"`.
    ///
    /// Two-character operators are tried before their one-character prefixes,
    /// and an operator is only consumed when text remains after it. A missing
    /// operator means an exact requirement. Malformed input degrades to a
    /// constraint over threshold 0.0 rather than an error; only the empty
    /// string yields `Unspecified`.
    pub fn parse(raw: &str) -> Self {
        if raw.is_empty() {
            return VersionConstraint::Unspecified;
        }
        let (comparator, remainder) = split_operator(raw);
        VersionConstraint::Bound {
            comparator,
            threshold: numeric_prefix(remainder),
        }
    }

    /// True when `version` satisfies this constraint. `Unspecified` never
    /// matches.
    pub fn matches(self, version: f64) -> bool {
        match self {
            VersionConstraint::Unspecified => false,
            VersionConstraint::Bound {
                comparator,
                threshold,
            } => match comparator {
                Comparator::Exactly => version == threshold,
                Comparator::EarlierThan => version < threshold,
                Comparator::EqualOrEarlierThan => version <= threshold,
                Comparator::LaterThan => version > threshold,
                Comparator::EqualOrLaterThan => version >= threshold,
            },
        }
    }
}

fn split_operator(raw: &str) -> (Comparator, &str) {
    const OPERATORS: [(&str, Comparator); 4] = [
        ("<=", Comparator::EqualOrEarlierThan),
        (">=", Comparator::EqualOrLaterThan),
        ("<", Comparator::EarlierThan),
        (">", Comparator::LaterThan),
    ];
    for (operator, comparator) in OPERATORS {
        if let Some(rest) = raw.strip_prefix(operator) {
            if !rest.is_empty() {
                return (comparator, rest);
            }
        }
    }
    (Comparator::Exactly, raw)
}

/// Permissive float extraction: leading non-numeric text is skipped, the
/// longest sign/digits/decimal-point run is taken, and input with no digits
/// at all coerces to 0.0 rather than an error.
pub(crate) fn numeric_prefix(raw: &str) -> f64 {
    let Some(first_digit) = raw.find(|c: char| c.is_ascii_digit()) else {
        return 0.0;
    };

    // Pull in a decimal point or sign glued to the first digit.
    let bytes = raw.as_bytes();
    let mut start = first_digit;
    if start > 0 && bytes[start - 1] == b'.' {
        start -= 1;
    }
    if start > 0 && matches!(bytes[start - 1], b'+' | b'-') {
        start -= 1;
    }

    let tail = &raw[start..];
    let mut end = 0;
    let mut seen_point = false;
    for (idx, ch) in tail.char_indices() {
        match ch {
            '0'..='9' => end = idx + 1,
            '+' | '-' if idx == 0 => end = idx + 1,
            '.' if !seen_point => {
                seen_point = true;
                end = idx + 1;
            }
            _ => break,
        }
    }
    tail[..end].trim_end_matches('.').parse().unwrap_or(0.0)
}
