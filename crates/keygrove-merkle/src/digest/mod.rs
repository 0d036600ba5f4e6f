//! Digest Algorithm Abstraction
//!
//! A common interface for the hash algorithms usable in tree construction,
//! plus the two supported implementations.

mod blake3;
mod sha256;

pub use self::blake3::Blake3;
pub use self::sha256::Sha256;

use crate::hash::NodeHash;

/// A common interface for digest algorithms
///
/// Implementations are streaming hashers that can be fed incrementally and
/// reset on finalization, so one value can serve a whole tree build.
///
/// # Design Principles
///
/// - **Fixed output**: every supported algorithm produces 32 bytes, the width
///   of [`NodeHash`]
/// - **Cheap construction**: `Default` must be inexpensive; tree code creates
///   digests freely
/// - **Thread-safe**: `Send + Sync` so trees can be built on worker threads
pub trait MerkleDigest: Clone + Default + Send + Sync {
    /// Output width in bytes
    const OUTPUT_SIZE: usize;

    /// Name of the hash algorithm
    fn algorithm_name(&self) -> &'static str;

    /// Feed data into the digest state
    fn update(&mut self, data: &[u8]);

    /// Produce the hash and reset the state for reuse
    fn finalize(&mut self) -> NodeHash;

    /// One-shot convenience over update + finalize
    fn hash(data: &[u8]) -> NodeHash {
        let mut digest = Self::default();
        digest.update(data);
        digest.finalize()
    }
}
