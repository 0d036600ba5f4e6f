//! The Storage Seam

use async_trait::async_trait;

use crate::error::VaultResult;
use crate::record::VaultRecord;

/// A common interface for key storage backends
///
/// # Design Principles
///
/// - **Async Support**: all methods are async to support non-blocking I/O
/// - **Object Safety**: can be used as `dyn KeyVault` behind a pointer
/// - **Send + Sync**: safe to share across tasks
/// - **Upsert semantics**: `set` overwrites silently; only `get`/`del` report
///   missing records
#[async_trait]
pub trait KeyVault: Send + Sync {
    /// List the ids of every stored record
    async fn list(&self) -> VaultResult<Vec<String>>;

    /// Fetch the record stored under `id`
    ///
    /// # Errors
    ///
    /// Returns [`VaultError::NotFound`](crate::VaultError::NotFound) if no
    /// record exists.
    async fn get(&self, id: &str) -> VaultResult<VaultRecord>;

    /// Store a record, replacing any existing record with the same id
    async fn set(&self, record: VaultRecord) -> VaultResult<()>;

    /// Delete the record stored under `id`
    ///
    /// # Errors
    ///
    /// Returns [`VaultError::NotFound`](crate::VaultError::NotFound) if no
    /// record exists.
    async fn del(&self, id: &str) -> VaultResult<()>;

    /// Check whether a record exists without fetching it
    async fn contains(&self, id: &str) -> VaultResult<bool> {
        match self.get(id).await {
            Ok(_) => Ok(true),
            Err(err) if err.is_not_found() => Ok(false),
            Err(err) => Err(err),
        }
    }
}

#[async_trait]
impl<T: KeyVault + ?Sized> KeyVault for Box<T> {
    async fn list(&self) -> VaultResult<Vec<String>> {
        (**self).list().await
    }

    async fn get(&self, id: &str) -> VaultResult<VaultRecord> {
        (**self).get(id).await
    }

    async fn set(&self, record: VaultRecord) -> VaultResult<()> {
        (**self).set(record).await
    }

    async fn del(&self, id: &str) -> VaultResult<()> {
        (**self).del(id).await
    }
}
