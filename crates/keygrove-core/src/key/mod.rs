//! Key Material Types
//!
//! Owned public/secret key bytes plus the algorithm tag that gives them
//! meaning. Secret material is redacted in debug output and zeroized on drop.

mod key_type;
mod material;
mod pair;

pub use key_type::KeyType;
pub use material::{PublicKey, SecretKey};
pub use pair::KeyPair;
