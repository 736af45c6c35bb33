//! Configuration system for giftmatch.
//!
//! Load match configuration from TOML or YAML files to control the minimum
//! group size and the optional search budget without code changes.
//!
//! # Examples
//!
//! Load configuration from a TOML string:
//!
//! ```
//! use giftmatch_config::MatchConfig;
//!
//! let config = MatchConfig::from_toml_str(r#"
//!     min_group_size = 4
//!
//!     [budget]
//!     node_limit = 100000
//! "#).unwrap();
//!
//! assert_eq!(config.min_group_size, 4);
//! assert_eq!(config.node_limit(), Some(100_000));
//! ```
//!
//! Use the default config when no file is given:
//!
//! ```
//! use giftmatch_config::MatchConfig;
//!
//! let config = MatchConfig::load("match.toml").unwrap_or_default();
//! // Proceeds with defaults if the file doesn't exist
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[cfg(test)]
mod tests;

/// Default minimum number of participants for a meaningful exchange.
///
/// Below three people, self-pairing plus a single exclusion already makes
/// the problem trivial or impossible.
pub const DEFAULT_MIN_GROUP_SIZE: usize = 3;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Main match configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct MatchConfig {
    /// Minimum number of participants required before a match is attempted.
    #[serde(default = "default_min_group_size")]
    pub min_group_size: usize,

    /// Optional search budget.
    #[serde(default)]
    pub budget: Option<BudgetConfig>,
}

fn default_min_group_size() -> usize {
    DEFAULT_MIN_GROUP_SIZE
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            min_group_size: DEFAULT_MIN_GROUP_SIZE,
            budget: None,
        }
    }
}

impl MatchConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file doesn't exist, contains invalid TOML,
    /// or fails validation.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_toml_file(path)
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Sets the minimum group size.
    pub fn with_min_group_size(mut self, min_group_size: usize) -> Self {
        self.min_group_size = min_group_size;
        self
    }

    /// Sets the search node budget.
    pub fn with_node_limit(mut self, node_limit: u64) -> Self {
        self.budget = Some(BudgetConfig {
            node_limit: Some(node_limit),
        });
        self
    }

    /// Returns the node budget, if configured.
    ///
    /// Convenience method that delegates to `budget.node_limit`.
    pub fn node_limit(&self) -> Option<u64> {
        self.budget.as_ref().and_then(|b| b.node_limit)
    }

    /// Checks the configuration for unusable values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` if `min_group_size` is below 2: with
    /// fewer than two people there is no one to give to at all.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_group_size < 2 {
            return Err(ConfigError::Invalid(format!(
                "min_group_size must be at least 2, got {}",
                self.min_group_size
            )));
        }
        Ok(())
    }
}

/// Search budget configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct BudgetConfig {
    /// Maximum number of search nodes to explore (None = unlimited).
    pub node_limit: Option<u64>,
}
