//! Merkle Tree Error Types

use thiserror::Error;

/// Error type for tree construction and proof handling
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MerkleError {
    #[error("Cannot build a Merkle tree from zero leaves")]
    EmptyTree,

    #[error("Leaf index {index} out of bounds for tree of {len} leaves")]
    IndexOutOfBounds { index: usize, len: usize },

    #[error("Malformed proof: {0}")]
    MalformedProof(String),

    #[error("Invalid hash format: {0}")]
    InvalidHash(String),
}

/// Result type for Merkle operations
pub type MerkleResult<T> = Result<T, MerkleError>;

impl MerkleError {
    /// Create a malformed proof error
    pub fn malformed_proof<S: Into<String>>(msg: S) -> Self {
        Self::MalformedProof(msg.into())
    }

    /// Create an invalid hash error
    pub fn invalid_hash<S: Into<String>>(msg: S) -> Self {
        Self::InvalidHash(msg.into())
    }
}
