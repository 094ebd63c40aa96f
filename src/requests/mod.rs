// Copyright 2024 Contributors to the vault-gpg-transit project.
// SPDX-License-Identifier: Apache-2.0
//! Error taxonomy shared by every component
mod response_status;

pub use response_status::{ResponseStatus, Result};
