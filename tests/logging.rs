// Copyright 2024 Contributors to the vault-gpg-transit project.
// SPDX-License-Identifier: Apache-2.0
use vault_gpg_transit::utils::config::ClientConfig;
use vault_gpg_transit::utils::init_logging;

#[test]
fn logger_is_installed_once() {
    let config = ClientConfig::from_toml(
        r#"
        [core_settings]
        log_level = "debug"
        log_timestamp = true
        "#,
    )
    .expect("configuration should parse");

    init_logging(&config.core_settings).expect("first initialization should succeed");
    log::debug!("logger installed");

    let _ = init_logging(&config.core_settings)
        .expect_err("a second logger can not be installed");
}
