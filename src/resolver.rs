// src/resolver.rs
// Compatibility tier resolution for Browser Compat Gate

use std::collections::BTreeMap;

use serde::Serialize;

use crate::config::RequirementsConfig;
use crate::identity::BrowserIdentity;
use crate::requirement::VersionConstraint;
use crate::requirements::RequirementTable;

/// Support classification for the current browser identity.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CompatibilityTier {
    Incompatible,
    PartiallyCompatible,
    Compatible,
}

impl CompatibilityTier {
    pub fn as_str(self) -> &'static str {
        match self {
            CompatibilityTier::Incompatible => "incompatible",
            CompatibilityTier::PartiallyCompatible => "partially_compatible",
            CompatibilityTier::Compatible => "compatible",
        }
    }
}

/// Evaluates browser identities against the configured requirement tables.
///
/// Rules degrade rather than fail: a browser absent from both tables and a
/// malformed requirement string both resolve to `Compatible`. Not
/// thread-safe; hosts serialize access.
#[derive(Debug, Clone)]
pub struct CompatResolver {
    incompatible: RequirementTable,
    partially_compatible: RequirementTable,
    config: RequirementsConfig,
    identity: BrowserIdentity,
    tier: CompatibilityTier,
}

impl CompatResolver {
    pub fn new() -> Self {
        Self {
            incompatible: RequirementTable::new(),
            partially_compatible: RequirementTable::new(),
            config: RequirementsConfig::default(),
            identity: BrowserIdentity::unknown(),
            tier: CompatibilityTier::Compatible,
        }
    }

    /// Rebuild both rule tables from `config` and re-derive the tier.
    /// Rebuilding from scratch keeps hot reloads predictable: names absent
    /// from the new config are gone.
    pub fn load_requirements(&mut self, config: &RequirementsConfig) {
        self.config = config.clone();
        self.incompatible = build_table(&config.incompatible);
        self.partially_compatible = build_table(&config.partially_compatible);
        self.recompute_tier();
    }

    /// Replace the current identity and re-derive the tier.
    pub fn set_identity(&mut self, identity: BrowserIdentity) {
        self.identity = identity;
        self.recompute_tier();
    }

    fn recompute_tier(&mut self) {
        self.tier = CompatibilityTier::Compatible;
        if self.identity.is_unknown() {
            return;
        }
        if self.incompatible.matches(&self.identity) {
            self.tier = CompatibilityTier::Incompatible;
        } else if self.partially_compatible.matches(&self.identity) {
            self.tier = CompatibilityTier::PartiallyCompatible;
        }
    }

    pub fn tier(&self) -> CompatibilityTier {
        self.tier
    }

    pub fn identity(&self) -> &BrowserIdentity {
        &self.identity
    }

    /// The raw configuration behind the current tables, for diagnostics.
    pub fn config(&self) -> &RequirementsConfig {
        &self.config
    }

    pub fn incompatible_rules(&self) -> &RequirementTable {
        &self.incompatible
    }

    pub fn partially_compatible_rules(&self) -> &RequirementTable {
        &self.partially_compatible
    }

    pub fn is_compatible(&self) -> bool {
        self.tier == CompatibilityTier::Compatible
    }

    pub fn is_partially_compatible(&self) -> bool {
        self.tier == CompatibilityTier::PartiallyCompatible
    }

    pub fn is_incompatible(&self) -> bool {
        self.tier == CompatibilityTier::Incompatible
    }
}

impl Default for CompatResolver {
    fn default() -> Self {
        Self::new()
    }
}

fn build_table(raw: &BTreeMap<String, String>) -> RequirementTable {
    let mut table = RequirementTable::new();
    for (name, requirement) in raw {
        table.insert(name, VersionConstraint::parse(requirement));
    }
    table
}
