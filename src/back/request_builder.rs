// Copyright 2024 Contributors to the vault-gpg-transit project.
// SPDX-License-Identifier: Apache-2.0
//! Convert validated parameters into calls to the engine
//!
//! The request builder is the last step between a validated request and the
//! engine: it shapes the request payload, hands it to the `SecretsBackend`
//! and translates backend failures into a `ResponseStatus`.
use crate::backends::{BackendCall, SecretsBackend};
use crate::operations::{KeyHandle, Setting, ValidatedRequest};
use crate::requests::{ResponseStatus, Result};
use derivative::Derivative;
use log::trace;
use serde_json::{Map, Value};
use std::io::{Error, ErrorKind};
use std::sync::Arc;

/// Mount point of the GPG engine when none is configured.
pub const DEFAULT_MOUNT_POINT: &str = "vault-gpg-plugin";

/// Request builder component
///
/// Owns the connection to the engine and the location the engine is mounted at.
#[derive(Derivative)]
#[derivative(Debug)]
pub struct RequestBuilder {
    // Send and Sync are required for the client to be shared between threads.
    #[derivative(Debug = "ignore")]
    backend: Arc<dyn SecretsBackend + Send + Sync>,
    mount_point: String,
}

impl RequestBuilder {
    /// Shape the engine request for a validated key creation.
    ///
    /// Optional fields left to the engine default are absent from the body. The
    /// engine derives the key size from `key_bits`, so it is sent next to
    /// `key_type`.
    pub fn build(&self, request: &ValidatedRequest) -> BackendCall {
        let mut body = Map::new();
        let _ = body.insert(String::from("name"), Value::from(request.name.as_str()));
        let _ = body.insert(
            String::from("key_type"),
            Value::from(request.key_type.as_str()),
        );
        let _ = body.insert(
            String::from("key_bits"),
            Value::from(request.key_type.bits()),
        );
        let _ = body.insert(String::from("generate"), Value::Bool(true));

        if let Setting::Explicit(exportable) = request.exportable {
            let _ = body.insert(String::from("exportable"), Value::Bool(exportable));
        }
        if let Setting::Explicit(real_name) = &request.real_name {
            let _ = body.insert(String::from("real_name"), Value::from(real_name.as_str()));
        }
        if let Setting::Explicit(email) = &request.email {
            let _ = body.insert(String::from("email"), Value::from(email.as_str()));
        }

        BackendCall {
            name: request.name.clone(),
            path: format!("{}/keys/{}", self.mount_point, request.name),
            body,
        }
    }

    /// Send a call to the engine, exactly once.
    ///
    /// The returned handle is named after the key the call created.
    ///
    /// # Errors
    /// Any failure of the backend is returned as `ResponseStatus::BackendFailure`
    /// with the status and message it reported.
    pub fn submit(&self, call: BackendCall) -> Result<KeyHandle> {
        trace!("create_key ingress, path {}", call.path);
        match self.backend.create_key(&call) {
            Ok(metadata) => {
                trace!("create_key egress");
                Ok(KeyHandle {
                    name: call.name,
                    metadata,
                })
            }
            Err(error) => {
                format_error!(format!("Creating key \"{}\" failed", call.name), error);
                Err(ResponseStatus::BackendFailure {
                    status: error.status,
                    message: error.message,
                })
            }
        }
    }

    /// Mount point the engine is reached at
    pub fn mount_point(&self) -> &str {
        &self.mount_point
    }
}

/// Builder for `RequestBuilder`
#[derive(Default, Derivative)]
#[derivative(Debug)]
pub struct RequestBuilderBuilder {
    #[derivative(Debug = "ignore")]
    backend: Option<Arc<dyn SecretsBackend + Send + Sync>>,
    mount_point: Option<String>,
}

impl RequestBuilderBuilder {
    /// Create a new RequestBuilder builder
    pub fn new() -> RequestBuilderBuilder {
        RequestBuilderBuilder {
            backend: None,
            mount_point: None,
        }
    }

    /// Add a backend to the builder
    pub fn with_backend(mut self, backend: Arc<dyn SecretsBackend + Send + Sync>) -> Self {
        self.backend = Some(backend);
        self
    }

    /// Set the mount point of the engine
    pub fn with_mount_point(mut self, mount_point: impl Into<String>) -> Self {
        self.mount_point = Some(mount_point.into());
        self
    }

    /// Build into a RequestBuilder
    pub fn build(self) -> std::io::Result<RequestBuilder> {
        let mount_point = self
            .mount_point
            .unwrap_or_else(|| String::from(DEFAULT_MOUNT_POINT));
        let mount_point = mount_point.trim_matches('/');
        if mount_point.is_empty() {
            return Err(Error::new(ErrorKind::InvalidData, "mount_point is empty"));
        }

        Ok(RequestBuilder {
            backend: self
                .backend
                .ok_or_else(|| Error::new(ErrorKind::InvalidData, "backend is missing"))?,
            mount_point: mount_point.to_owned(),
        })
    }
}
