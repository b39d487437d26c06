//! Engine configuration.
//!
//! The engine runs without any configuration; these knobs let a host opt out
//! of the sample data or of glob pattern matching. Loaded from TOML:
//!
//! ```toml
//! seed = false
//! honor_glob_pattern = true
//! grep_max_matches = 200
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors loading a configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("failed to read config {path}: {source}")]
    Read {
        /// File that was being read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid TOML for this schema.
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Engine configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct VfsConfig {
    /// Start with the built-in sample entries.
    pub seed: bool,
    /// Filter `glob` results by the pattern. When false the pattern is
    /// accepted but only the ignore predicate constrains results.
    pub honor_glob_pattern: bool,
    /// Default cap on grep results when the caller sets none.
    pub grep_max_matches: Option<usize>,
}

impl Default for VfsConfig {
    fn default() -> Self {
        Self {
            seed: true,
            honor_glob_pattern: true,
            grep_max_matches: None,
        }
    }
}

impl VfsConfig {
    /// An empty store with otherwise default behavior.
    pub fn unseeded() -> Self {
        Self {
            seed: false,
            ..Default::default()
        }
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }
}
