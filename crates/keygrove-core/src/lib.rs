//! Key Material and Signature Primitives
//!
//! Foundation crate for the Keygrove workspace: owned key types, the
//! object-safe signing seam, the Ed25519 implementation, revocation flags,
//! and shared text encoding.
//!
//! ## Architecture
//!
//! Following clean separation of concerns:
//! - This crate: key bytes, raw sign/verify, revocation bitmaps
//! - keygrove-merkle: digest algorithms and tree hashing
//! - keygrove-signatures: the Merkle key collection scheme built on both
//!
//! ## Usage
//!
//! ```rust
//! use keygrove_core::{ed25519, KeyPair};
//!
//! let pair = KeyPair::new_ed25519();
//! let signature = ed25519::sign(b"hello", pair.secret()).unwrap();
//! assert!(ed25519::verify(b"hello", &signature, pair.public()).is_ok());
//! ```

pub mod encoding;
pub mod error;
pub mod key;
pub mod revocation;
pub mod signature;

pub use error::{CoreError, CoreResult};
pub use key::{KeyPair, KeyType, PublicKey, SecretKey};
pub use revocation::RevocationFlags;
pub use signature::{ed25519, Ed25519, Sign, Verify};
