//! Merkle Key Collection Signatures
//!
//! A signature scheme in which a collection of key pairs is committed to by
//! a single Merkle root. Each signature discloses the signing public key
//! plus an inclusion proof against that root, and individual members can be
//! revoked after the fact through a compact flag set.
//!
//! ## Why
//!
//! Published key material that names one verification key must be rotated
//! whenever that key is. Committing a whole collection up front keeps the
//! published value stable (two algorithm tags plus a 32-byte root) while the
//! holder signs with any member key, and revocation becomes a bitmap update
//! instead of a key rollover.
//!
//! ## Usage
//!
//! ```rust
//! use keygrove_signatures::{
//!     Ed25519, KeyCollection, Sha256, Signer, VerificationKey, Verifier,
//! };
//!
//! let collection = KeyCollection::new_ed25519(8).unwrap();
//! let key_data = collection.verification_key::<Sha256, _>(&Ed25519).unwrap();
//!
//! let signer = Signer::<Sha256, _>::new(Ed25519);
//! let member = collection.signing_key::<Sha256>(3).unwrap();
//! let value = signer.sign(b"hello", &member).unwrap();
//!
//! let verifier = Verifier::<Sha256, _>::new(Ed25519);
//! let key = VerificationKey::new(&key_data);
//! assert!(verifier.verify(b"hello", &value, &key).is_ok());
//! ```

pub mod collection;
pub mod error;
pub mod merkle_key;
pub mod revocation;
pub mod signer;
pub mod tag;
pub mod traits;
pub mod verifier;

pub use collection::{KeyCollection, MAX_KEYS};
pub use error::{SignatureError, SignatureResult};
pub use merkle_key::MerkleKey;
pub use revocation::{restore_one, revoke_one, revoke_set};
pub use signer::{DynSigner, Signer, SigningKey};
pub use tag::MerkleTag;
pub use traits::{MerkleKeyDigest, MerkleSignature};
pub use verifier::{DynVerifier, VerificationKey, Verifier};

// Re-export the algorithm types callers pair with the scheme
pub use keygrove_core::{Ed25519, RevocationFlags};
pub use keygrove_merkle::{Blake3, Sha256};
