// Copyright 2024 Contributors to the vault-gpg-transit project.
// SPDX-License-Identifier: Apache-2.0
//! # CreateKey operation
//!
//! Creates an OpenPGP key on the engine under a caller-chosen name.
use super::key_type::KeyType;
use serde::Deserialize;
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Options bundle accepted by a key creation.
///
/// Every field defaults to "not provided", which is distinct from a provided
/// `false` or empty value. Keys not listed here end up in `other` whatever
/// their value, including `null`, so that refused parameters such as `derived`
/// are detected by name alone.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct KeyOptions {
    /// Token of the key algorithm, see `ALLOWED_KEY_TYPES`
    pub key_type: Option<String>,
    /// Whether the key material may later be exported
    pub exportable: Option<bool>,
    /// Real name of the identity bound to the key
    pub real_name: Option<String>,
    /// E-mail of the identity bound to the key, forwarded unchecked
    pub email: Option<String>,
    /// Any other parameter supplied by the caller
    #[serde(flatten)]
    pub other: BTreeMap<String, Value>,
}

impl KeyOptions {
    /// Create an empty options bundle
    pub fn new() -> KeyOptions {
        KeyOptions::default()
    }

    /// Set the key type token
    pub fn with_key_type(mut self, key_type: impl Into<String>) -> Self {
        self.key_type = Some(key_type.into());
        self
    }

    /// Set the exportable flag
    pub fn with_exportable(mut self, exportable: bool) -> Self {
        self.exportable = Some(exportable);
        self
    }

    /// Set the real name of the key identity
    pub fn with_real_name(mut self, real_name: impl Into<String>) -> Self {
        self.real_name = Some(real_name.into());
        self
    }

    /// Set the e-mail of the key identity
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Add an arbitrary parameter
    pub fn with_param(mut self, name: impl Into<String>, value: Value) -> Self {
        let _ = self.other.insert(name.into(), value);
        self
    }

    /// Names of all parameters the caller actually supplied.
    pub fn supplied_params(&self) -> impl Iterator<Item = &str> {
        let typed: Vec<&str> = [
            ("key_type", self.key_type.is_some()),
            ("exportable", self.exportable.is_some()),
            ("real_name", self.real_name.is_some()),
            ("email", self.email.is_some()),
        ]
        .iter()
        .filter(|(_, present)| *present)
        .map(|(name, _)| *name)
        .collect();

        typed
            .into_iter()
            .chain(self.other.keys().map(String::as_str))
    }
}

/// Parameter bundle for one key creation call, as received from the caller.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct KeyCreationRequest {
    /// Name under which the engine stores the key
    pub name: Option<String>,
    /// Remaining parameters
    #[serde(flatten)]
    pub options: KeyOptions,
}

impl KeyCreationRequest {
    /// Bundle a key name with its options
    pub fn new(name: impl Into<String>, options: KeyOptions) -> KeyCreationRequest {
        KeyCreationRequest {
            name: Some(name.into()),
            options,
        }
    }
}

/// Value of an optional field after validation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Setting<T> {
    /// Not provided: the engine applies its own default
    EngineDefault,
    /// Provided by the caller
    Explicit(T),
}

impl<T> Setting<T> {
    /// Explicit value, if any
    pub fn explicit(&self) -> Option<&T> {
        match self {
            Setting::EngineDefault => None,
            Setting::Explicit(value) => Some(value),
        }
    }
}

impl<T> From<Option<T>> for Setting<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Setting::EngineDefault, Setting::Explicit)
    }
}

/// Key creation parameters that passed validation.
///
/// Every recognized optional field is present, either with the caller's value
/// or marked as left to the engine.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidatedRequest {
    /// Name under which the engine stores the key
    pub name: String,
    /// Key algorithm
    pub key_type: KeyType,
    /// Whether the key material may later be exported
    pub exportable: Setting<bool>,
    /// Real name of the identity bound to the key
    pub real_name: Setting<String>,
    /// E-mail of the identity bound to the key
    pub email: Setting<String>,
}

/// Handle on a key the engine created.
#[derive(Clone, Debug, PartialEq)]
pub struct KeyHandle {
    /// Name of the created key
    pub name: String,
    /// Key metadata returned by the engine, possibly empty
    pub metadata: Map<String, Value>,
}

impl KeyHandle {
    /// Fingerprint of the key, when the engine reported one
    pub fn fingerprint(&self) -> Option<&str> {
        self.metadata.get("fingerprint").and_then(Value::as_str)
    }
}
