//! SHA-256 Digest Implementation
//!
//! ## Features
//!
//! - **Cryptographically Secure**: collision-resistant 256-bit output
//! - **Deterministic**: same input always produces the same output
//! - **Standards Compliant**: matches the FIPS 180-4 test vectors

use sha2::Digest;

use crate::digest::MerkleDigest;
use crate::hash::NodeHash;

/// The SHA-256 hash algorithm with the SHA-256 initial hash value
#[derive(Debug, Clone, Default)]
pub struct Sha256 {
    inner: sha2::Sha256,
}

impl MerkleDigest for Sha256 {
    const OUTPUT_SIZE: usize = 32;

    fn algorithm_name(&self) -> &'static str {
        "sha256"
    }

    fn update(&mut self, data: &[u8]) {
        Digest::update(&mut self.inner, data);
    }

    fn finalize(&mut self) -> NodeHash {
        NodeHash::new(self.inner.finalize_reset().into())
    }
}
