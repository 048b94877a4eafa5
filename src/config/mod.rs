// src/config/mod.rs
// Requirement configuration loading and defaults for Browser Compat Gate
// Requirements are plain JSON; built-in defaults live in config/defaults.json.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::log_event;

const DEFAULTS_JSON_TEXT: &str = include_str!("../../config/defaults.json");

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigLoadError {
    Unreadable,
    InvalidConfig,
}

impl ConfigLoadError {
    pub fn user_message(&self) -> &'static str {
        match self {
            ConfigLoadError::Unreadable => "Requirements unavailable (file unreadable)",
            ConfigLoadError::InvalidConfig => "Requirements unavailable (invalid JSON)",
        }
    }
}

/// Tiered browser requirements, keyed by raw browser name. A missing tier
/// deserializes to an empty rule set.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct RequirementsConfig {
    #[serde(default)]
    pub incompatible: BTreeMap<String, String>,
    #[serde(default)]
    pub partially_compatible: BTreeMap<String, String>,
}

impl RequirementsConfig {
    pub fn from_json_str(raw: &str) -> Result<Self, ConfigLoadError> {
        serde_json::from_str(raw).map_err(|_| ConfigLoadError::InvalidConfig)
    }

    /// Loads requirements from a JSON file.
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self, ConfigLoadError> {
        let raw = fs::read_to_string(path).map_err(|_| ConfigLoadError::Unreadable)?;
        Self::from_json_str(&raw)
    }
}

static DEFAULT_CONFIG: Lazy<RequirementsConfig> =
    Lazy::new(|| RequirementsConfig::from_json_str(DEFAULTS_JSON_TEXT).unwrap_or_default());

/// Built-in requirement set, embedded at compile time.
pub fn defaults() -> &'static RequirementsConfig {
    &DEFAULT_CONFIG
}

/// Fail-open load: when the file cannot be used, log the reason and return
/// the built-in defaults.
pub fn load_or_defaults(path: impl AsRef<Path>) -> RequirementsConfig {
    match RequirementsConfig::load_from_path(path) {
        Ok(config) => config,
        Err(err) => {
            log_event(
                "config",
                &format!("falling back to defaults: {}", err.user_message()),
            );
            defaults().clone()
        }
    }
}

#[cfg(test)]
mod tests;
