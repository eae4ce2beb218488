//! Top-level configuration with 4-layer resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{ClientConfig, MarshallingPolicy};
use crate::errors::ConfigError;

/// Project config file name, looked up in the root passed to `load`.
pub const PROJECT_CONFIG_FILE: &str = "sas-pidl.toml";

/// Top-level configuration.
///
/// Resolution order (highest priority first):
/// 1. Explicit overrides (applied via `apply_overrides`)
/// 2. Environment variables (`SAS_PIDL_*`)
/// 3. Project config (`sas-pidl.toml` in project root)
/// 4. User config (`~/.sas-pidl/config.toml`)
/// 5. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct PidlConfig {
    pub client: ClientConfig,
}

/// Programmatic overrides applied on top of every other layer.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub client_name: Option<String>,
    pub marshalling: Option<MarshallingPolicy>,
    pub max_depth: Option<usize>,
}

impl PidlConfig {
    /// Load configuration with 4-layer resolution rooted at `root`.
    pub fn load(root: &Path, overrides: Option<&ConfigOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Layer 4 (lowest priority): user config
        if let Some(user_config_path) = Self::user_config_path() {
            if user_config_path.exists() {
                match Self::merge_toml_file(&mut config, &user_config_path) {
                    Ok(()) => {}
                    Err(e @ ConfigError::ParseError { .. }) => return Err(e),
                    Err(e) => {
                        ::tracing::warn!(error = %e, "Ignoring unreadable user config");
                    }
                }
            }
        }

        // Layer 3: project config
        let project_config_path = root.join(PROJECT_CONFIG_FILE);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        // Layer 2: environment variables
        Self::apply_env_overrides(&mut config)?;

        // Layer 1 (highest priority): explicit overrides
        if let Some(overrides) = overrides {
            Self::apply_overrides(&mut config, overrides);
        }

        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        Self::validate(&config)?;
        Ok(config)
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(config: &PidlConfig) -> Result<(), ConfigError> {
        config.client.validate()
    }

    fn user_config_path() -> Option<PathBuf> {
        home_dir().map(|h| h.join(".sas-pidl").join("config.toml"))
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored.
    fn merge_toml_file(config: &mut PidlConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Unreadable {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        let file_config: PidlConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`; `other` wins only where it has a value.
    fn merge(base: &mut PidlConfig, other: &PidlConfig) {
        if other.client.name.is_some() {
            base.client.name = other.client.name.clone();
        }
        if other.client.marshalling.is_some() {
            base.client.marshalling = other.client.marshalling;
        }
        if other.client.max_depth.is_some() {
            base.client.max_depth = other.client.max_depth;
        }
    }

    /// Apply environment variable overrides.
    /// Pattern: `SAS_PIDL_CLIENT_NAME`, `SAS_PIDL_MARSHALLING`, `SAS_PIDL_MAX_DEPTH`.
    /// A value that does not parse is an error, not a silent fallback.
    fn apply_env_overrides(config: &mut PidlConfig) -> Result<(), ConfigError> {
        if let Ok(val) = std::env::var("SAS_PIDL_CLIENT_NAME") {
            config.client.name = Some(val);
        }
        if let Ok(val) = std::env::var("SAS_PIDL_MARSHALLING") {
            config.client.marshalling = Some(val.parse()?);
        }
        if let Ok(val) = std::env::var("SAS_PIDL_MAX_DEPTH") {
            let depth = val.trim().parse::<usize>().map_err(|e| ConfigError::InvalidValue {
                field: "client.max_depth".to_string(),
                message: format!("\"{val}\": {e}"),
            })?;
            config.client.max_depth = Some(depth);
        }
        Ok(())
    }

    /// Apply explicit overrides (highest priority).
    fn apply_overrides(config: &mut PidlConfig, overrides: &ConfigOverrides) {
        if let Some(ref v) = overrides.client_name {
            config.client.name = Some(v.clone());
        }
        if let Some(v) = overrides.marshalling {
            config.client.marshalling = Some(v);
        }
        if let Some(v) = overrides.max_depth {
            config.client.max_depth = Some(v);
        }
    }
}

/// Cross-platform home directory resolution.
fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
}
