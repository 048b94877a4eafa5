// src/detector.rs
// Browser detector facade: lookup glue around the compatibility resolver

use crate::config::RequirementsConfig;
use crate::identity::BrowserIdentity;
use crate::lookup::{BrowserLookup, MarkerLookup};
use crate::resolver::{CompatResolver, CompatibilityTier};

/// Front door for hosts: wires a lookup provider to the resolver and mirrors
/// its verdict surface. When the lookup is disabled, every agent resolves to
/// the unknown identity and the verdict stays Compatible.
pub struct BrowserDetector {
    resolver: CompatResolver,
    lookup: Box<dyn BrowserLookup>,
    lookup_enabled: bool,
}

impl BrowserDetector {
    /// Detector backed by the built-in marker lookup.
    pub fn new(lookup_enabled: bool) -> Self {
        Self::with_lookup(Box::new(MarkerLookup), lookup_enabled)
    }

    /// Detector backed by an injected lookup capability.
    pub fn with_lookup(lookup: Box<dyn BrowserLookup>, lookup_enabled: bool) -> Self {
        Self {
            resolver: CompatResolver::new(),
            lookup,
            lookup_enabled,
        }
    }

    pub fn load_configuration(&mut self, config: &RequirementsConfig) {
        self.resolver.load_requirements(config);
    }

    /// Resolve `user_agent` through the lookup (unknown when disabled) and
    /// re-derive the tier.
    pub fn set_user_agent(&mut self, user_agent: &str) {
        let identity = if self.lookup_enabled {
            self.lookup.lookup(user_agent)
        } else {
            BrowserIdentity::unknown()
        };
        self.resolver.set_identity(identity);
    }

    /// Set an already-resolved identity, bypassing the lookup.
    pub fn set_browser(&mut self, identity: BrowserIdentity) {
        self.resolver.set_identity(identity);
    }

    pub fn browser(&self) -> &BrowserIdentity {
        self.resolver.identity()
    }

    pub fn config(&self) -> &RequirementsConfig {
        self.resolver.config()
    }

    pub fn resolver(&self) -> &CompatResolver {
        &self.resolver
    }

    pub fn tier(&self) -> CompatibilityTier {
        self.resolver.tier()
    }

    pub fn is_compatible(&self) -> bool {
        self.resolver.is_compatible()
    }

    pub fn is_partially_compatible(&self) -> bool {
        self.resolver.is_partially_compatible()
    }

    pub fn is_incompatible(&self) -> bool {
        self.resolver.is_incompatible()
    }
}
