//! Stored Records

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use keygrove_core::KeyType;

/// One stored unit of key material
///
/// The vault does not interpret `data`; callers decide what a record holds
/// (a serialized collection snapshot, a single wrapped key, an encoded
/// verification key). The id is the lookup handle and must be unique per
/// vault.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VaultRecord {
    /// Unique lookup handle
    pub id: String,
    /// Signature algorithm of the stored material
    pub key_type: KeyType,
    /// Opaque payload bytes
    pub data: Vec<u8>,
    /// When the record was created
    pub created_at: DateTime<Utc>,
}

impl VaultRecord {
    /// Create a record stamped with the current time
    pub fn new<S: Into<String>>(id: S, key_type: KeyType, data: Vec<u8>) -> Self {
        Self {
            id: id.into(),
            key_type,
            data,
            created_at: Utc::now(),
        }
    }
}
