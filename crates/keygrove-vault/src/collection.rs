//! Collection Snapshots
//!
//! Serializes a whole [`KeyCollection`] into one vault record and back.
//! Public keys travel as base64 strings (their normal serde form); secret
//! keys have no serde of their own, so the snapshot carries them as base64
//! text built and torn down explicitly here. The snapshot never leaves the
//! record payload.

use serde::{Deserialize, Serialize};
use tracing::debug;

use keygrove_core::encoding::{decode_b64, encode_b64};
use keygrove_core::{KeyType, PublicKey, SecretKey};
use keygrove_signatures::KeyCollection;

use crate::error::{VaultError, VaultResult};
use crate::record::VaultRecord;
use crate::vault::KeyVault;

#[derive(Serialize, Deserialize)]
struct CollectionSnapshot {
    key_type: KeyType,
    public: Vec<PublicKey>,
    secret: Vec<String>,
}

/// Store a collection under `id`, replacing any existing record
///
/// # Errors
///
/// Propagates adapter failures and snapshot serialization errors.
pub async fn store_collection<V: KeyVault + ?Sized>(
    vault: &V,
    id: &str,
    collection: &KeyCollection,
) -> VaultResult<()> {
    let snapshot = CollectionSnapshot {
        key_type: collection.key_type(),
        public: collection.iter().cloned().collect(),
        secret: (0..collection.len())
            .map(|index| {
                collection
                    .secret(index)
                    .map(|secret| encode_b64(secret.as_bytes()))
            })
            .collect::<Option<Vec<String>>>()
            .ok_or_else(|| {
                VaultError::Serialization("collection secret half is incomplete".to_string())
            })?,
    };

    let data = serde_json::to_vec(&snapshot)?;
    debug!(id, members = collection.len(), "storing collection snapshot");

    vault
        .set(VaultRecord::new(id, collection.key_type(), data))
        .await
}

/// Load the collection stored under `id`
///
/// # Errors
///
/// Returns [`VaultError::NotFound`] if no record exists, and
/// [`VaultError::Serialization`] if the record payload is not a valid
/// snapshot or fails collection validation.
pub async fn load_collection<V: KeyVault + ?Sized>(
    vault: &V,
    id: &str,
) -> VaultResult<KeyCollection> {
    let record = vault.get(id).await?;
    let snapshot: CollectionSnapshot = serde_json::from_slice(&record.data)?;

    let secret = snapshot
        .secret
        .iter()
        .map(|text| decode_b64(text).map(SecretKey::from))
        .collect::<Result<Vec<SecretKey>, _>>()
        .map_err(|err| VaultError::Serialization(err.to_string()))?;

    KeyCollection::from_parts(snapshot.key_type, snapshot.public, secret)
        .map_err(|err| VaultError::Serialization(err.to_string()))
}
