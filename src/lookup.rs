// src/lookup.rs
// Browser lookup providers for Browser Compat Gate

use crate::identity::BrowserIdentity;
use crate::requirement::numeric_prefix;

/// Capability that resolves a raw user-agent string to a browser identity.
/// Hosts with a real browser database plug it in here; the crate ships a
/// marker scanner and a disabled stub.
pub trait BrowserLookup {
    fn lookup(&self, user_agent: &str) -> BrowserIdentity;
}

/// Lookup stub for deployments without a browser database. Every agent is
/// unknown, so every verdict stays Compatible.
#[derive(Debug, Clone, Copy, Default)]
pub struct DisabledLookup;

impl BrowserLookup for DisabledLookup {
    fn lookup(&self, _user_agent: &str) -> BrowserIdentity {
        BrowserIdentity::unknown()
    }
}

/// Built-in lookup that scans for `Name/version` product markers.
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkerLookup;

// Marker order matters: Edge and Opera agents also carry Chrome and Safari
// tokens.
const MARKERS: &[(&str, &str)] = &[
    ("Edg", "Edge"),
    ("OPR", "Opera"),
    ("Firefox", "Firefox"),
    ("Chrome", "Chrome"),
    ("Safari", "Safari"),
];

impl BrowserLookup for MarkerLookup {
    fn lookup(&self, user_agent: &str) -> BrowserIdentity {
        // Legacy IE announces itself as "MSIE x.y" instead of a product/version pair.
        if let Some(rest) = user_agent.split("MSIE ").nth(1) {
            return BrowserIdentity::new("Ie", numeric_prefix(rest));
        }
        for &(marker, name) in MARKERS {
            if let Some(version) = extract_version(user_agent, marker) {
                return BrowserIdentity::new(name, version);
            }
        }
        BrowserIdentity::unknown()
    }
}

fn extract_version(ua: &str, name: &str) -> Option<f64> {
    // Safari versioning is exposed in Version/x.y while Safari/x tracks the
    // WebKit build.
    if name.eq_ignore_ascii_case("safari") {
        if let Some(version) = version_after_marker(ua, "Version/") {
            return Some(version);
        }
    }

    let marker = format!("{}/", name);
    version_after_marker(ua, &marker)
}

fn version_after_marker(ua: &str, marker: &str) -> Option<f64> {
    let idx = ua.find(marker)?;
    let tail = &ua[idx + marker.len()..];
    let token = tail.split_whitespace().next().unwrap_or(tail);
    if !token.contains(|c: char| c.is_ascii_digit()) {
        return None;
    }
    Some(numeric_prefix(token))
}
