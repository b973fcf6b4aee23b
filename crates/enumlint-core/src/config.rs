//! Configuration file loading for enumlint.
//!
//! Reads `.enumlint/enumlint.json` and provides typed access to all settings.
//! Falls back to sensible defaults when the config file is missing or incomplete.

use std::path::Path;

use globset::{Glob, GlobSet, GlobSetBuilder};
use serde::{Deserialize, Serialize};

use crate::types::Severity;

/// Name of the directory holding the config file.
pub const CONFIG_DIR: &str = ".enumlint";
/// Name of the config file inside [`CONFIG_DIR`].
pub const CONFIG_FILE: &str = "enumlint.json";

/// Top-level enumlint configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnumlintConfig {
    #[serde(default = "default_version")]
    pub version: String,
    #[serde(default)]
    pub rules: RulesConfig,
    /// Glob patterns (relative to the lint root) of files to skip.
    #[serde(default)]
    pub exclude: Vec<String>,
}

/// Per-rule settings, keyed by qualified rule name.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RulesConfig {
    #[serde(rename = "Rails/EnumNegative", default)]
    pub enum_negative: RuleConfig,
}

/// Generic toggles every rule understands.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default)]
    pub severity: Severity,
    #[serde(default = "default_true")]
    pub autocorrect: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid exclude pattern `{pattern}`: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },
}

fn default_true() -> bool {
    true
}
fn default_version() -> String {
    "0.1.0".to_string()
}

impl Default for RuleConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            severity: Severity::default(),
            autocorrect: true,
        }
    }
}

impl Default for EnumlintConfig {
    fn default() -> Self {
        Self {
            version: default_version(),
            rules: RulesConfig::default(),
            exclude: vec![],
        }
    }
}

impl EnumlintConfig {
    /// Load configuration from `enumlint.json` inside the given config directory.
    /// Returns defaults if the file doesn't exist or can't be parsed.
    pub fn load(config_dir: &Path) -> Self {
        let config_path = config_dir.join(CONFIG_FILE);
        let content = match std::fs::read_to_string(&config_path) {
            Ok(c) => c,
            Err(_) => {
                tracing::debug!(path = %config_path.display(), "no config file, using defaults");
                return Self::default();
            }
        };
        match serde_json::from_str(&content) {
            Ok(cfg) => cfg,
            Err(e) => {
                tracing::warn!(
                    path = %config_path.display(),
                    error = %e,
                    "failed to parse config, using defaults"
                );
                Self::default()
            }
        }
    }

    /// Compile the `exclude` patterns into a single matcher.
    pub fn exclude_set(&self) -> Result<GlobSet, ConfigError> {
        let mut builder = GlobSetBuilder::new();
        for pattern in &self.exclude {
            let glob = Glob::new(pattern).map_err(|source| ConfigError::InvalidPattern {
                pattern: pattern.clone(),
                source,
            })?;
            builder.add(glob);
        }
        builder.build().map_err(|source| ConfigError::InvalidPattern {
            pattern: self.exclude.join(", "),
            source,
        })
    }
}
