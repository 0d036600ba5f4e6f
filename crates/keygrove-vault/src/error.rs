//! Vault Error Types

use thiserror::Error;

/// Error type for storage adapter operations
#[derive(Error, Debug)]
pub enum VaultError {
    #[error("No record stored under id '{id}'")]
    NotFound { id: String },

    #[error("Invalid record id: {0}")]
    InvalidId(String),

    #[error("Record serialization failed: {0}")]
    Serialization(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result type for vault operations
pub type VaultResult<T> = Result<T, VaultError>;

impl VaultError {
    /// Create a not-found error for a record id
    pub fn not_found<S: Into<String>>(id: S) -> Self {
        Self::NotFound { id: id.into() }
    }

    /// Create an invalid id error
    pub fn invalid_id<S: Into<String>>(msg: S) -> Self {
        Self::InvalidId(msg.into())
    }

    /// Check if the error means the record simply does not exist
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

impl From<serde_json::Error> for VaultError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_classification() {
        assert!(VaultError::not_found("key-1").is_not_found());
        assert!(!VaultError::invalid_id("../escape").is_not_found());
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            VaultError::not_found("did:example:1").to_string(),
            "No record stored under id 'did:example:1'"
        );
    }
}
