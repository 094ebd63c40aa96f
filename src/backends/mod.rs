// Copyright 2024 Contributors to the vault-gpg-transit project.
// SPDX-License-Identifier: Apache-2.0
//! Connection to the secrets engine
//!
//! The transport to the engine (HTTP client, authentication, timeouts) is not
//! part of this crate. It is plugged in through the `SecretsBackend` trait,
//! which receives fully formed calls and reports either the engine response
//! data or a `BackendError`.
use serde_json::{Map, Value};
use std::error::Error as ErrorTrait;
use std::fmt;

/// A request ready to be sent to the engine.
///
/// `path` is relative to the API root of the secrets service (for example
/// `vault-gpg-plugin/keys/my-key`) and `body` is the JSON object to write
/// there. Only parameters with a value are present in `body`.
#[derive(Clone, Debug, PartialEq)]
pub struct BackendCall {
    /// Name of the key the call creates
    pub name: String,
    /// Path of the engine endpoint
    pub path: String,
    /// JSON body of the request
    pub body: Map<String, Value>,
}

/// Failure reported while executing a `BackendCall`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BackendError {
    /// HTTP-style status returned by the engine, `None` if no response was received
    pub status: Option<u16>,
    /// Message describing the failure
    pub message: String,
}

impl BackendError {
    /// The engine answered with a non-success status
    pub fn with_status(status: u16, message: impl Into<String>) -> BackendError {
        BackendError {
            status: Some(status),
            message: message.into(),
        }
    }

    /// The engine could not be reached, or the transport timed out
    pub fn transport(message: impl Into<String>) -> BackendError {
        BackendError {
            status: None,
            message: message.into(),
        }
    }
}

impl fmt::Display for BackendError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.status {
            Some(status) => write!(f, "status {}: {}", status, self.message),
            None => write!(f, "transport error: {}", self.message),
        }
    }
}

impl ErrorTrait for BackendError {}

/// Definition of the interface a transport to the engine must implement.
pub trait SecretsBackend {
    /// Send a key creation call to the engine.
    ///
    /// Returns the `data` object of a successful engine response, which may be
    /// empty. Implementations must not retry: creating a key is not idempotent.
    fn create_key(&self, call: &BackendCall) -> Result<Map<String, Value>, BackendError>;
}
