// Copyright 2024 Contributors to the vault-gpg-transit project.
// SPDX-License-Identifier: Apache-2.0
//! Caller-facing entry point
//!
//! The client ties the pipeline together: parameters are validated, shaped
//! into an engine request and submitted once. A client holds no per-call state
//! and can be shared between threads.
use crate::back::request_builder::{RequestBuilder, RequestBuilderBuilder};
use crate::backends::SecretsBackend;
use crate::operations::{KeyCreationRequest, KeyHandle, KeyOptions};
use crate::requests::Result;
use crate::utils::config::ClientConfig;
use crate::utils::GlobalConfigBuilder;
use crate::validator;
use log::{info, warn};
use std::sync::Arc;

/// OpenPGP key management client for the Vault GPG engine
#[derive(Debug)]
pub struct Client {
    request_builder: RequestBuilder,
}

impl Client {
    /// Create a key named `name` on the engine.
    ///
    /// # Errors
    /// - `UnsupportedParam`, `MissingRequiredParam` or `InvalidParamValue` if the
    /// parameters are refused; the engine is not contacted in that case
    /// - `BackendFailure` if the engine refused the request or could not be reached
    pub fn create_key(&self, name: &str, options: KeyOptions) -> Result<KeyHandle> {
        self.create_key_from_request(KeyCreationRequest::new(name, options))
    }

    /// Create a key from a complete parameter bundle, for example one
    /// deserialized from JSON.
    pub fn create_key_from_request(&self, request: KeyCreationRequest) -> Result<KeyHandle> {
        let validated = validator::validate(&request).map_err(|status| {
            warn!("Key creation request refused: {}", status);
            status
        })?;

        let call = self.request_builder.build(&validated);
        let handle = self.request_builder.submit(call)?;
        info!(
            "Created {} key \"{}\" under \"{}\"",
            validated.key_type,
            handle.name,
            self.request_builder.mount_point()
        );
        Ok(handle)
    }
}

/// Builder for `Client`
#[derive(Debug, Default)]
pub struct ClientBuilder {
    request_builder: RequestBuilderBuilder,
}

impl ClientBuilder {
    /// Create a new Client builder
    pub fn new() -> ClientBuilder {
        ClientBuilder {
            request_builder: RequestBuilderBuilder::new(),
        }
    }

    /// Apply a client configuration.
    ///
    /// Also sets the process-wide settings (`log_error_details`) it contains.
    pub fn from_config(config: &ClientConfig) -> ClientBuilder {
        GlobalConfigBuilder::new()
            .with_log_error_details(config.core_settings.log_error_details.unwrap_or(false))
            .build();

        let builder = ClientBuilder::new();
        match &config.engine {
            Some(engine) => builder.with_mount_point(engine.mount_point.as_str()),
            None => builder,
        }
    }

    /// Add the backend used to reach the engine
    pub fn with_backend(mut self, backend: Arc<dyn SecretsBackend + Send + Sync>) -> Self {
        self.request_builder = self.request_builder.with_backend(backend);
        self
    }

    /// Set the mount point of the engine
    pub fn with_mount_point(mut self, mount_point: impl Into<String>) -> Self {
        self.request_builder = self.request_builder.with_mount_point(mount_point);
        self
    }

    /// Build into a Client
    pub fn build(self) -> anyhow::Result<Client> {
        Ok(Client {
            request_builder: self.request_builder.build()?,
        })
    }
}
