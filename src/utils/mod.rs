// Copyright 2024 Contributors to the vault-gpg-transit project.
// SPDX-License-Identifier: Apache-2.0
//! Client utilities
pub mod config;
mod global_config;

use self::config::CoreSettings;

pub use global_config::GlobalConfig;
pub(crate) use global_config::GlobalConfigBuilder;

/// Initialize `env_logger` from the core settings.
///
/// Without a configured level the `RUST_LOG` environment variable decides.
/// Fails if a global logger was already installed.
pub fn init_logging(settings: &CoreSettings) -> Result<(), log::SetLoggerError> {
    let mut env_log_builder = env_logger::Builder::from_default_env();

    if let Some(level) = settings.log_level {
        let _ = env_log_builder.filter_level(level);
    }

    if let Some(true) = settings.log_timestamp {
        let _ = env_log_builder.format_timestamp_millis();
    } else {
        let _ = env_log_builder.format_timestamp(None);
    }

    env_log_builder.try_init()
}
