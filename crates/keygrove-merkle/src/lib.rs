//! Merkle Trees for Key Collection Commitment
//!
//! This crate provides the digest abstraction and Merkle tree machinery that
//! Keygrove uses to commit a collection of public keys to a single root and
//! prove membership of individual keys.
//!
//! ## Purpose
//!
//! Pure transformation: leaf bytes → tree → root + inclusion proofs
//!
//! ## Architecture
//!
//! Following clean separation of concerns:
//! - This crate: digest algorithms, tree building, proof generation/verification
//! - keygrove-core: key material and raw signatures
//! - keygrove-signatures: the signature scheme built on both
//!
//! ## Usage
//!
//! ```rust
//! use keygrove_merkle::{MerkleTree, Sha256};
//!
//! let leaves: Vec<&[u8]> = vec![b"alpha", b"beta", b"gamma"];
//! let tree = MerkleTree::<Sha256>::from_leaves(&leaves).unwrap();
//!
//! let proof = tree.proof(1).unwrap();
//! assert!(proof.verify::<Sha256>(b"beta", &tree.root()));
//! ```

pub mod digest;
pub mod error;
pub mod hash;
pub mod proof;
pub mod tree;

// Re-export main types
pub use digest::*;
pub use error::*;
pub use hash::*;
pub use proof::*;
pub use tree::*;
