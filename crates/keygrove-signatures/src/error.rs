//! Signature Scheme Error Types

use thiserror::Error;

use keygrove_core::CoreError;
use keygrove_merkle::MerkleError;

use crate::tag::MerkleTag;

/// Error type for Merkle key collection operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SignatureError {
    #[error("Invalid key format: {0}")]
    InvalidKeyFormat(String),

    #[error("Algorithm mismatch: expected tag {expected}, received {received}")]
    AlgorithmMismatch {
        expected: MerkleTag,
        received: MerkleTag,
    },

    #[error("Invalid inclusion proof: {0}")]
    InvalidProof(String),

    #[error("Key at index {index} has been revoked")]
    KeyRevoked { index: u32 },

    #[error("Collection size {requested} outside supported range 1..={limit}")]
    CollectionBounds { requested: usize, limit: usize },

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Merkle(#[from] MerkleError),
}

/// Result type for signature scheme operations
pub type SignatureResult<T> = Result<T, SignatureError>;

impl SignatureError {
    /// Create an invalid key format error
    pub fn invalid_key_format<S: Into<String>>(msg: S) -> Self {
        Self::InvalidKeyFormat(msg.into())
    }

    /// Create an invalid proof error
    pub fn invalid_proof<S: Into<String>>(msg: S) -> Self {
        Self::InvalidProof(msg.into())
    }

    /// Check if verification failed because the key was revoked
    ///
    /// Callers distinguish this from cryptographic failure: the signature may
    /// be genuine, but the collection owner has withdrawn the key.
    pub fn is_revocation(&self) -> bool {
        matches!(self, Self::KeyRevoked { .. })
    }
}
