// Copyright 2024 Contributors to the vault-gpg-transit project.
// SPDX-License-Identifier: Apache-2.0
//! Engine-facing side of the client
//!
//! Holds the request builder, which turns validated parameters into calls to
//! the secrets engine and reports the outcome back.
pub mod request_builder;
