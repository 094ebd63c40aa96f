// Copyright 2024 Contributors to the vault-gpg-transit project.
// SPDX-License-Identifier: Apache-2.0
//! Native representation of the key creation operation
//!
//! Parameters as the caller supplies them, their validated form and the
//! result handed back once the engine has created the key.
pub mod create_key;
pub mod key_type;

pub use create_key::{KeyCreationRequest, KeyHandle, KeyOptions, Setting, ValidatedRequest};
pub use key_type::{KeyType, ALLOWED_KEY_TYPES};
