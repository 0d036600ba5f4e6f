//! In-Memory Adapter

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use crate::error::{VaultError, VaultResult};
use crate::record::VaultRecord;
use crate::vault::KeyVault;

/// A vault held entirely in process memory
///
/// Intended for tests and short-lived agents; nothing survives the process.
#[derive(Debug, Default)]
pub struct MemoryVault {
    records: RwLock<HashMap<String, VaultRecord>>,
}

impl MemoryVault {
    /// Create an empty vault
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    /// True if no records are stored
    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

#[async_trait]
impl KeyVault for MemoryVault {
    async fn list(&self) -> VaultResult<Vec<String>> {
        let records = self.records.read().await;
        let mut ids: Vec<String> = records.keys().cloned().collect();
        ids.sort();
        Ok(ids)
    }

    async fn get(&self, id: &str) -> VaultResult<VaultRecord> {
        self.records
            .read()
            .await
            .get(id)
            .cloned()
            .ok_or_else(|| VaultError::not_found(id))
    }

    async fn set(&self, record: VaultRecord) -> VaultResult<()> {
        debug!(id = %record.id, "storing record in memory vault");
        self.records
            .write()
            .await
            .insert(record.id.clone(), record);
        Ok(())
    }

    async fn del(&self, id: &str) -> VaultResult<()> {
        self.records
            .write()
            .await
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| VaultError::not_found(id))
    }
}
