// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration schema definitions.
//!
//! Defines the options that can be loaded from commitgate.toml. Unknown keys
//! are rejected at parse time.

use crate::error::{ConfigError, Result};
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

lazy_static! {
    static ref TYPE_TOKEN_REGEX: Regex = Regex::new(r"^[a-z0-9]+$").unwrap();
}

/// Largest accepted value for `max_subject_length`.
pub const MAX_SUBJECT_LENGTH_LIMIT: usize = 1000;

/// Commit types accepted when no configuration overrides them.
pub const DEFAULT_TYPES: &[&str] = &[
    "feat", "fix", "build", "chore", "ci", "docs", "style", "refactor", "perf", "test",
];

/// The validator configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Commit types accepted by the type-enum rule, in suggestion order.
    pub allowed_types: Vec<String>,

    /// Maximum length of the header line, in characters.
    pub max_subject_length: usize,

    /// Whether to warn about non-imperative descriptions.
    pub enforce_imperative_mood: bool,

    /// Alternative spellings accepted as one of the allowed types.
    pub custom_type_aliases: BTreeMap<String, String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            allowed_types: DEFAULT_TYPES.iter().map(|t| t.to_string()).collect(),
            max_subject_length: 80,
            enforce_imperative_mood: true,
            custom_type_aliases: BTreeMap::new(),
        }
    }
}

impl Config {
    /// Load configuration from the default locations.
    pub fn load() -> Result<Self> {
        super::loader::load_config()
    }

    /// Load configuration from a specific path.
    pub fn load_from(path: &std::path::Path) -> Result<Self> {
        super::loader::load_config_from(path)
    }

    /// Check value ranges and cross-references between options.
    pub fn validate(&self) -> Result<()> {
        if self.max_subject_length == 0 || self.max_subject_length > MAX_SUBJECT_LENGTH_LIMIT {
            return Err(invalid(
                "max_subject_length",
                format!(
                    "must be between 1 and {}, got {}",
                    MAX_SUBJECT_LENGTH_LIMIT, self.max_subject_length
                ),
            ));
        }

        if self.allowed_types.is_empty() {
            return Err(invalid("allowed_types", "must not be empty".to_string()));
        }

        if let Some(bad) = self
            .allowed_types
            .iter()
            .find(|t| !TYPE_TOKEN_REGEX.is_match(t))
        {
            return Err(invalid(
                "allowed_types",
                format!("'{}' is not a lowercase alphanumeric type", bad),
            ));
        }

        for (alias, target) in &self.custom_type_aliases {
            if !TYPE_TOKEN_REGEX.is_match(alias) {
                return Err(invalid(
                    "custom_type_aliases",
                    format!("alias '{}' is not a lowercase alphanumeric type", alias),
                ));
            }
            if !self.is_allowed(target) {
                return Err(invalid(
                    "custom_type_aliases",
                    format!("alias '{}' points to unknown type '{}'", alias, target),
                ));
            }
        }

        Ok(())
    }

    /// Whether `commit_type` is one of the allowed types.
    pub fn is_allowed(&self, commit_type: &str) -> bool {
        self.allowed_types.iter().any(|t| t == commit_type)
    }

    /// Resolve a type through the alias table.
    ///
    /// Returns the canonical allowed type, or `None` if the type is neither
    /// allowed nor a configured alias.
    pub fn resolve_type<'a>(&'a self, commit_type: &'a str) -> Option<&'a str> {
        if self.is_allowed(commit_type) {
            return Some(commit_type);
        }
        self.custom_type_aliases.get(commit_type).map(String::as_str)
    }
}

fn invalid(key: &str, message: String) -> crate::error::GateError {
    ConfigError::InvalidValue {
        key: key.to_string(),
        message,
    }
    .into()
}
