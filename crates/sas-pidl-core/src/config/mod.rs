//! Configuration system for the SAS/PIDL adapters.
//! TOML-based, 4-layer resolution: overrides > env > project > user > defaults.

pub mod client_config;
pub mod pidl_config;

pub use client_config::{ClientConfig, MarshallingPolicy, DEFAULT_MAX_DEPTH, MAX_DEPTH_CEILING};
pub use pidl_config::{ConfigOverrides, PidlConfig};
