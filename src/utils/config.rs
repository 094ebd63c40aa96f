// Copyright 2024 Contributors to the vault-gpg-transit project.
// SPDX-License-Identifier: Apache-2.0
//! Structures for the client configuration file
//!
//! ```toml
//! [core_settings]
//! log_level = "info"
//! log_timestamp = false
//! log_error_details = false
//!
//! [engine]
//! mount_point = "vault-gpg-plugin"
//! ```
use crate::back::request_builder::DEFAULT_MOUNT_POINT;
use anyhow::{Context, Result};
use log::LevelFilter;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Core settings
#[derive(Copy, Clone, Default, Deserialize, Debug)]
#[allow(missing_docs)]
pub struct CoreSettings {
    pub log_level: Option<LevelFilter>,
    pub log_timestamp: Option<bool>,
    pub log_error_details: Option<bool>,
}

/// Location of the GPG engine on the secrets service
#[derive(Clone, Deserialize, Debug)]
pub struct EngineConfig {
    /// Path the engine is mounted at
    #[serde(default = "default_mount_point")]
    pub mount_point: String,
}

fn default_mount_point() -> String {
    String::from(DEFAULT_MOUNT_POINT)
}

/// Configuration of the client
#[derive(Clone, Default, Deserialize, Debug)]
#[allow(missing_docs)]
pub struct ClientConfig {
    #[serde(default)]
    pub core_settings: CoreSettings,
    pub engine: Option<EngineConfig>,
}

impl ClientConfig {
    /// Parse a configuration from TOML text
    pub fn from_toml(contents: &str) -> Result<ClientConfig> {
        toml::from_str(contents).context("failed to parse the client configuration")
    }

    /// Read and parse a TOML configuration file
    pub fn from_file(path: impl AsRef<Path>) -> Result<ClientConfig> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed to read configuration file {}", path.display()))?;
        ClientConfig::from_toml(&contents)
    }
}
