// Copyright 2024 Contributors to the vault-gpg-transit project.
// SPDX-License-Identifier: Apache-2.0
//! Vault GPG transit client documentation
//!
//! Client-side contract for creating OpenPGP keys through the Vault GPG
//! secrets engine. Caller parameters are checked against the capabilities of
//! the engine before any request leaves the process; accepted parameters are
//! shaped into the payload the engine expects and handed to an injected
//! [`SecretsBackend`](backends::SecretsBackend).
//!
//! ```text
//! caller -> Client -> validator -> RequestBuilder -> SecretsBackend
//! ```
#![deny(
    nonstandard_style,
    dead_code,
    improper_ctypes,
    non_shorthand_field_patterns,
    no_mangle_generic_items,
    overflowing_literals,
    path_statements,
    patterns_in_fns_without_body,
    unconditional_recursion,
    unused,
    unused_allocation,
    unused_comparisons,
    unused_parens,
    while_true,
    missing_debug_implementations,
    missing_docs,
    trivial_casts,
    trivial_numeric_casts,
    unused_extern_crates,
    unused_import_braces,
    unused_qualifications,
    unused_results
)]
// This one is hard to avoid.
#![allow(clippy::multiple_crate_versions)]

macro_rules! format_error {
    ($message:expr, $error:expr) => {
        if crate::utils::GlobalConfig::log_error_details() {
            log::error!("{}; Error: {}", $message, $error)
        } else {
            log::error!("{};", $message)
        }
    };
}

pub mod back;
pub mod backends;
pub mod client;
pub mod operations;
pub mod requests;
pub mod utils;
pub mod validator;

pub use client::{Client, ClientBuilder};
