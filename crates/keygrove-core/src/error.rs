//! Core Error Types
//!
//! Shared error handling for key material, signing, and encoding operations.

use thiserror::Error;

/// Error type for key material and signature operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    #[error("Invalid key length: expected {expected} bytes, received {received}")]
    InvalidKeyLength { expected: usize, received: usize },

    #[error("Invalid signature length: expected {expected} bytes, received {received}")]
    InvalidSignatureLength { expected: usize, received: usize },

    #[error("Invalid encoding: {0}")]
    InvalidEncoding(String),

    #[error("Signature creation failed")]
    SignatureFailure,

    #[error("Signature verification failed")]
    VerificationFailure,

    #[error("Key generation failed: {0}")]
    KeyGeneration(String),
}

/// Result type for core operations
pub type CoreResult<T> = Result<T, CoreError>;

impl CoreError {
    /// Create an invalid encoding error
    pub fn invalid_encoding<S: Into<String>>(msg: S) -> Self {
        Self::InvalidEncoding(msg.into())
    }

    /// Create a key generation error
    pub fn key_generation<S: Into<String>>(msg: S) -> Self {
        Self::KeyGeneration(msg.into())
    }

    /// Check if the error indicates malformed input rather than a crypto failure
    pub fn is_malformed_input(&self) -> bool {
        matches!(
            self,
            Self::InvalidKeyLength { .. }
                | Self::InvalidSignatureLength { .. }
                | Self::InvalidEncoding(_)
        )
    }
}
