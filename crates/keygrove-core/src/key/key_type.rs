//! Signature algorithm identifiers

use std::fmt;

use serde::{Deserialize, Serialize};

/// Supported signature algorithms
///
/// The algorithm determines the expected byte lengths of key material and
/// signatures, which consumers use for validation before any cryptography.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyType {
    Ed25519,
}

impl KeyType {
    /// Human-readable algorithm name
    pub fn name(&self) -> &'static str {
        match self {
            Self::Ed25519 => "ed25519",
        }
    }

    /// Expected public key length in bytes
    pub const fn public_key_length(&self) -> usize {
        match self {
            Self::Ed25519 => 32,
        }
    }

    /// Expected secret key length in bytes
    pub const fn secret_key_length(&self) -> usize {
        match self {
            Self::Ed25519 => 32,
        }
    }

    /// Expected signature length in bytes
    pub const fn signature_length(&self) -> usize {
        match self {
            Self::Ed25519 => 64,
        }
    }
}

impl fmt::Display for KeyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lengths() {
        assert_eq!(KeyType::Ed25519.public_key_length(), 32);
        assert_eq!(KeyType::Ed25519.secret_key_length(), 32);
        assert_eq!(KeyType::Ed25519.signature_length(), 64);
    }

    #[test]
    fn test_serde_snake_case() {
        let json = serde_json::to_string(&KeyType::Ed25519).unwrap();
        assert_eq!(json, "\"ed25519\"");

        let parsed: KeyType = serde_json::from_str("\"ed25519\"").unwrap();
        assert_eq!(parsed, KeyType::Ed25519);
    }

    #[test]
    fn test_display() {
        assert_eq!(KeyType::Ed25519.to_string(), "ed25519");
    }
}
