//! Key Storage Adapters
//!
//! Async storage for key material and collection snapshots. The [`KeyVault`]
//! trait is the seam an identity layer plugs a backend into; this crate ships
//! an in-memory adapter for tests and ephemeral agents, and a file adapter
//! for durable single-host storage.
//!
//! ## Architecture
//!
//! Following clean separation of concerns:
//! - This crate: the storage seam and its adapters
//! - keygrove-signatures: the collection types being stored
//! - keygrove-core: key material inside the records
//!
//! ## Usage
//!
//! ```rust
//! use keygrove_vault::{KeyVault, MemoryVault, VaultRecord};
//! use keygrove_core::KeyType;
//!
//! # async fn example() -> keygrove_vault::VaultResult<()> {
//! let vault = MemoryVault::new();
//! vault
//!     .set(VaultRecord::new("did:example:1", KeyType::Ed25519, vec![1, 2, 3]))
//!     .await?;
//!
//! let record = vault.get("did:example:1").await?;
//! assert_eq!(record.data, vec![1, 2, 3]);
//! # Ok(())
//! # }
//! ```

pub mod collection;
pub mod error;
pub mod file;
pub mod memory;
pub mod record;
pub mod vault;

pub use collection::{load_collection, store_collection};
pub use error::{VaultError, VaultResult};
pub use file::FileVault;
pub use memory::MemoryVault;
pub use record::VaultRecord;
pub use vault::KeyVault;
