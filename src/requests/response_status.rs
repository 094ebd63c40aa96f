// Copyright 2024 Contributors to the vault-gpg-transit project.
// SPDX-License-Identifier: Apache-2.0
use std::error::Error as ErrorTrait;
use std::fmt;

/// Failure kinds surfaced to the caller of a key creation.
///
/// The first three are raised locally, before any request is sent to the
/// engine. `BackendFailure` carries whatever the engine (or the transport in
/// front of it) reported, unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResponseStatus {
    /// A parameter belonging to another engine mode was supplied.
    UnsupportedParam {
        /// Name of the offending parameter
        param: String,
    },
    /// A required parameter was not supplied.
    MissingRequiredParam {
        /// Name of the missing parameter
        param: String,
    },
    /// A parameter was supplied with a value the engine does not accept.
    InvalidParamValue {
        /// Name of the offending parameter
        param: String,
        /// Value that was supplied
        value: String,
        /// Values the engine accepts, empty when not enumerable
        allowed: Vec<String>,
    },
    /// The engine answered with a non-success status, or could not be reached.
    BackendFailure {
        /// HTTP-style status code, `None` for transport failures
        status: Option<u16>,
        /// Message reported by the engine or the transport
        message: String,
    },
}

impl ResponseStatus {
    /// Name of the parameter responsible for a validation failure.
    ///
    /// Returns `None` for backend failures.
    pub fn param(&self) -> Option<&str> {
        match self {
            ResponseStatus::UnsupportedParam { param }
            | ResponseStatus::MissingRequiredParam { param }
            | ResponseStatus::InvalidParamValue { param, .. } => Some(param.as_str()),
            ResponseStatus::BackendFailure { .. } => None,
        }
    }

    /// Whether the failure was detected before reaching the engine.
    pub fn is_validation_error(&self) -> bool {
        !matches!(self, ResponseStatus::BackendFailure { .. })
    }
}

impl fmt::Display for ResponseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResponseStatus::UnsupportedParam { param } => {
                write!(f, "parameter \"{}\" is not supported by this engine", param)
            }
            ResponseStatus::MissingRequiredParam { param } => {
                write!(f, "required parameter \"{}\" was not provided", param)
            }
            ResponseStatus::InvalidParamValue {
                param,
                value,
                allowed,
            } => {
                write!(f, "invalid {} argument provided \"{}\"", param, value)?;
                if !allowed.is_empty() {
                    write!(f, ", supported values: \"{}\"", allowed.join(", "))?;
                }
                Ok(())
            }
            ResponseStatus::BackendFailure {
                status: Some(status),
                message,
            } => write!(f, "engine returned status {}: {}", status, message),
            ResponseStatus::BackendFailure {
                status: None,
                message,
            } => write!(f, "engine could not be reached: {}", message),
        }
    }
}

impl ErrorTrait for ResponseStatus {}

/// Result type used throughout the crate.
pub type Result<T> = std::result::Result<T, ResponseStatus>;
