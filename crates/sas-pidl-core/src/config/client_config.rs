//! Client helper configuration.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// What the client helper does when a request cannot be encoded or a
/// response cannot be decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum MarshallingPolicy {
    /// Report the failure to the caller's collector and return
    /// `InvokeStatus::MarshallingError`.
    #[default]
    Status,
    /// Return the codec failure as `Err` without touching the collector.
    Propagate,
}

impl FromStr for MarshallingPolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "status" => Ok(Self::Status),
            "propagate" => Ok(Self::Propagate),
            other => Err(ConfigError::InvalidValue {
                field: "client.marshalling".to_string(),
                message: format!("expected \"status\" or \"propagate\", got \"{other}\""),
            }),
        }
    }
}

/// Nesting depth used when none is configured.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Largest accepted `max_depth`. Matches serde_json's own recursion limit,
/// which stays in force underneath.
pub const MAX_DEPTH_CEILING: usize = 128;

/// Configuration for `JsonClientHelper`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ClientConfig {
    /// Client name, used as the log field on every invocation. Default: "default".
    pub name: Option<String>,
    /// Marshalling failure handling. Default: `status`.
    pub marshalling: Option<MarshallingPolicy>,
    /// Maximum nesting of a payload or document. Default: 64, at most 128.
    pub max_depth: Option<usize>,
}

impl ClientConfig {
    pub fn effective_name(&self) -> &str {
        self.name.as_deref().unwrap_or("default")
    }

    pub fn effective_marshalling(&self) -> MarshallingPolicy {
        self.marshalling.unwrap_or_default()
    }

    pub fn effective_max_depth(&self) -> usize {
        self.max_depth.unwrap_or(DEFAULT_MAX_DEPTH)
    }

    /// Validate the client values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(ref name) = self.name {
            if name.trim().is_empty() {
                return Err(ConfigError::ValidationFailed {
                    field: "client.name".to_string(),
                    message: "must not be empty".to_string(),
                });
            }
        }
        if let Some(depth) = self.max_depth {
            if !(1..=MAX_DEPTH_CEILING).contains(&depth) {
                return Err(ConfigError::ValidationFailed {
                    field: "client.max_depth".to_string(),
                    message: format!("must be between 1 and {MAX_DEPTH_CEILING}"),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.effective_name(), "default");
        assert_eq!(config.effective_marshalling(), MarshallingPolicy::Status);
        assert_eq!(config.effective_max_depth(), DEFAULT_MAX_DEPTH);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_max_depth_bounds() {
        for bad in [0, MAX_DEPTH_CEILING + 1, 100_000] {
            let config = ClientConfig {
                max_depth: Some(bad),
                ..Default::default()
            };
            assert!(matches!(config.validate(), Err(ConfigError::ValidationFailed { .. })));
        }
        let config = ClientConfig {
            max_depth: Some(MAX_DEPTH_CEILING),
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_policy_from_str() {
        assert_eq!("status".parse::<MarshallingPolicy>().unwrap(), MarshallingPolicy::Status);
        assert_eq!(" Propagate ".parse::<MarshallingPolicy>().unwrap(), MarshallingPolicy::Propagate);
        assert!("retry".parse::<MarshallingPolicy>().is_err());
    }
}
