// Copyright 2024 Contributors to the vault-gpg-transit project.
// SPDX-License-Identifier: Apache-2.0
//! Key algorithms offered by the engine
use std::fmt;

/// Key types the engine can generate, in the order they are advertised.
pub const ALLOWED_KEY_TYPES: [KeyType; 3] =
    [KeyType::Rsa2048, KeyType::Rsa3072, KeyType::Rsa4096];

/// Enumeration of the OpenPGP key algorithms supported for key creation.
///
/// The engine only generates RSA primary keys; the variants fix the modulus size.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum KeyType {
    /// RSA, 2048 bits
    Rsa2048,
    /// RSA, 3072 bits
    Rsa3072,
    /// RSA, 4096 bits
    Rsa4096,
}

impl KeyType {
    /// Token naming this key type on the wire.
    pub const fn as_str(self) -> &'static str {
        match self {
            KeyType::Rsa2048 => "rsa-2048",
            KeyType::Rsa3072 => "rsa-3072",
            KeyType::Rsa4096 => "rsa-4096",
        }
    }

    /// Modulus size in bits.
    pub const fn bits(self) -> u32 {
        match self {
            KeyType::Rsa2048 => 2048,
            KeyType::Rsa3072 => 3072,
            KeyType::Rsa4096 => 4096,
        }
    }

    /// Look up a token in `ALLOWED_KEY_TYPES`.
    pub fn from_token(token: &str) -> Option<KeyType> {
        ALLOWED_KEY_TYPES
            .iter()
            .copied()
            .find(|key_type| key_type.as_str() == token)
    }

    /// Tokens of every allowed key type, in table order.
    pub fn allowed_tokens() -> Vec<String> {
        ALLOWED_KEY_TYPES
            .iter()
            .map(|key_type| key_type.as_str().to_owned())
            .collect()
    }
}

impl fmt::Display for KeyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::{KeyType, ALLOWED_KEY_TYPES};

    #[test]
    fn tokens_resolve_to_their_key_type() {
        for key_type in ALLOWED_KEY_TYPES.iter() {
            assert_eq!(KeyType::from_token(key_type.as_str()), Some(*key_type));
            assert_eq!(key_type.to_string(), key_type.as_str());
        }
    }

    #[test]
    fn unknown_tokens_are_rejected() {
        assert_eq!(KeyType::from_token("rsa-1024"), None);
        assert_eq!(KeyType::from_token("RSA-2048"), None);
        assert_eq!(KeyType::from_token("ed25519"), None);
        assert_eq!(KeyType::from_token(""), None);
    }

    #[test]
    fn bits_match_token() {
        for key_type in ALLOWED_KEY_TYPES.iter() {
            let (_, bits) = key_type.as_str().split_at(4);
            assert_eq!(bits, key_type.bits().to_string());
        }
    }

    #[test]
    fn allowed_tokens_keep_table_order() {
        assert_eq!(
            KeyType::allowed_tokens(),
            vec!["rsa-2048", "rsa-3072", "rsa-4096"]
        );
    }
}
