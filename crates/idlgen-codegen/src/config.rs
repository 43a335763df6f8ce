//! Generator configuration.
//!
//! Example idlgen.toml:
//! ```toml
//! package_name = "com.example.rpc.enums"
//! return_type = "last-element"   # or "any-element"
//! ```

use crate::producer::ReturnTypePolicy;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Package name used when the configuration does not set one.
pub const DEFAULT_PACKAGE_NAME: &str = "enums";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Root configuration structure.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Package the generated enums are emitted into.
    pub package_name: String,
    /// How the enum-wide return type is inferred.
    pub return_type: ReturnTypePolicy,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            package_name: DEFAULT_PACKAGE_NAME.to_string(),
            return_type: ReturnTypePolicy::default(),
        }
    }
}

impl GeneratorConfig {
    /// Parse configuration from TOML text. Missing keys keep their defaults.
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Load configuration from a file path.
    pub fn load_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}
