//! Hash types and domain-separated node hashing
//!
//! This module provides the hash value type shared by every tree operation,
//! plus the leaf/interior hashing rules.
//!
//! ## Design Philosophy
//!
//! - **Compact representation**: `[u8; 32]` instead of `String` hex digests
//! - **Digest-agnostic**: hashing is generic over [`MerkleDigest`]
//! - **Domain separation**: leaves and interior nodes are hashed under
//!   distinct prefixes, so a crafted leaf cannot impersonate an interior node
//! - **Zero-copy operations**: comparison and combination without allocation

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::digest::MerkleDigest;
use crate::error::{MerkleError, MerkleResult};

/// Size of a node hash in bytes
pub const NODE_HASH_SIZE: usize = 32;

/// Prefix byte mixed into leaf hashes
const LEAF_PREFIX: u8 = 0x00;

/// Prefix byte mixed into interior node hashes
const NODE_PREFIX: u8 = 0x01;

/// A 32-byte hash identifying one Merkle tree node
///
/// ## Properties
///
/// - **Size**: 32 bytes (256 bits), the output width of every supported digest
/// - **Copy**: Zero-cost cloning
/// - **Equality**: Fast byte-wise comparison
/// - **Hash/Ord**: Usable as a map key and sortable for stable output
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeHash([u8; NODE_HASH_SIZE]);

impl NodeHash {
    /// Size of the hash in bytes
    pub const SIZE: usize = NODE_HASH_SIZE;

    /// Create a new NodeHash from raw bytes
    pub fn new(bytes: [u8; NODE_HASH_SIZE]) -> Self {
        Self(bytes)
    }

    /// Create a zero hash (all bytes are 0)
    ///
    /// Useful as a placeholder for empty or null nodes.
    pub fn zero() -> Self {
        Self([0u8; NODE_HASH_SIZE])
    }

    /// Check if this is a zero hash
    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; NODE_HASH_SIZE]
    }

    /// Get the hash as a fixed-size byte array reference
    pub fn as_bytes(&self) -> &[u8; NODE_HASH_SIZE] {
        &self.0
    }

    /// Convert the hash to a hexadecimal string
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Create a hash from a hexadecimal string
    ///
    /// # Errors
    ///
    /// Returns [`MerkleError::InvalidHash`] if the string is not valid hex or
    /// does not decode to exactly 32 bytes.
    pub fn from_hex(hex: &str) -> MerkleResult<Self> {
        let bytes = hex::decode(hex)
            .map_err(|err| MerkleError::invalid_hash(format!("invalid hex: {}", err)))?;

        if bytes.len() != NODE_HASH_SIZE {
            return Err(MerkleError::invalid_hash(format!(
                "expected {} bytes, received {}",
                NODE_HASH_SIZE,
                bytes.len()
            )));
        }

        let mut array = [0u8; NODE_HASH_SIZE];
        array.copy_from_slice(&bytes);
        Ok(Self(array))
    }
}

impl Default for NodeHash {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Debug for NodeHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeHash({})", self.to_hex())
    }
}

impl fmt::Display for NodeHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl From<[u8; NODE_HASH_SIZE]> for NodeHash {
    fn from(bytes: [u8; NODE_HASH_SIZE]) -> Self {
        Self::new(bytes)
    }
}

impl From<&[u8; NODE_HASH_SIZE]> for NodeHash {
    fn from(bytes: &[u8; NODE_HASH_SIZE]) -> Self {
        Self::new(*bytes)
    }
}

impl AsRef<[u8]> for NodeHash {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

/// Hash leaf content under the leaf domain prefix
///
/// Computes `H(0x00 || data)` with the chosen digest.
///
/// # Performance
///
/// This is a hot path in tree construction. Inlined for performance.
#[inline]
pub fn hash_leaf<D: MerkleDigest>(data: &[u8]) -> NodeHash {
    let mut digest = D::default();
    digest.update(&[LEAF_PREFIX]);
    digest.update(data);
    digest.finalize()
}

/// Combine two child hashes into a parent hash under the node domain prefix
///
/// Computes `H(0x01 || left || right)` with the chosen digest. Argument order
/// matters: swapping children produces a different parent.
///
/// # Performance
///
/// This is a hot path in tree construction. Inlined for performance.
#[inline]
pub fn hash_nodes<D: MerkleDigest>(left: &NodeHash, right: &NodeHash) -> NodeHash {
    let mut digest = D::default();
    digest.update(&[NODE_PREFIX]);
    digest.update(left.as_bytes());
    digest.update(right.as_bytes());
    digest.finalize()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::digest::{Blake3, Sha256};

    #[test]
    fn test_node_hash_creation() {
        let hash = NodeHash::new([1u8; 32]);
        assert_eq!(hash.as_bytes().len(), 32);
        assert!(!hash.is_zero());
    }

    #[test]
    fn test_zero_hash() {
        let zero = NodeHash::zero();
        assert!(zero.is_zero());
        assert_eq!(zero.as_bytes(), &[0u8; 32]);
        assert!(NodeHash::default().is_zero());
    }

    #[test]
    fn test_hex_round_trip() {
        let original = NodeHash::new([0xAB; 32]);
        let hex = original.to_hex();

        assert_eq!(hex.len(), 64); // 32 bytes = 64 hex chars

        let restored = NodeHash::from_hex(&hex).unwrap();
        assert_eq!(original, restored);
    }

    #[test]
    fn test_from_hex_invalid() {
        // Too short
        assert!(NodeHash::from_hex("1234").is_err());

        // Invalid hex characters
        let bad: String = "g".repeat(64);
        assert!(matches!(
            NodeHash::from_hex(&bad),
            Err(MerkleError::InvalidHash(_))
        ));
    }

    #[test]
    fn test_debug_display() {
        let hash = NodeHash::new([0x12; 32]);
        let debug = format!("{:?}", hash);
        let display = format!("{}", hash);

        assert!(debug.contains("NodeHash"));
        assert_eq!(display.len(), 64);
    }

    #[test]
    fn test_leaf_hashing_deterministic() {
        let a = hash_leaf::<Sha256>(b"leaf data");
        let b = hash_leaf::<Sha256>(b"leaf data");
        assert_eq!(a, b);
        assert!(!a.is_zero());
    }

    #[test]
    fn test_leaf_prefix_applied() {
        // hash_leaf prepends 0x00, so it must differ from the bare digest
        let prefixed = hash_leaf::<Sha256>(b"data");
        let bare = Sha256::hash(b"data");
        assert_ne!(prefixed, bare);
    }

    #[test]
    fn test_node_combination_order_matters() {
        let left = hash_leaf::<Sha256>(b"left");
        let right = hash_leaf::<Sha256>(b"right");

        let lr = hash_nodes::<Sha256>(&left, &right);
        let rl = hash_nodes::<Sha256>(&right, &left);

        assert_ne!(lr, rl);
        assert_ne!(lr, left);
        assert_ne!(lr, right);
    }

    #[test]
    fn test_leaf_and_node_domains_disjoint() {
        // An interior hash over (a, b) must differ from a leaf whose content
        // is the concatenation of the same two child hashes.
        let a = hash_leaf::<Sha256>(b"a");
        let b = hash_leaf::<Sha256>(b"b");
        let interior = hash_nodes::<Sha256>(&a, &b);

        let mut forged = Vec::with_capacity(64);
        forged.extend_from_slice(a.as_bytes());
        forged.extend_from_slice(b.as_bytes());
        let leaf = hash_leaf::<Sha256>(&forged);

        assert_ne!(interior, leaf);
    }

    #[test]
    fn test_digests_produce_distinct_hashes() {
        let sha = hash_leaf::<Sha256>(b"same input");
        let blake = hash_leaf::<Blake3>(b"same input");
        assert_ne!(sha, blake);
    }

    #[test]
    fn test_serialization() {
        let hash = hash_leaf::<Blake3>(b"serialize me");
        let json = serde_json::to_string(&hash).unwrap();
        let restored: NodeHash = serde_json::from_str(&json).unwrap();
        assert_eq!(hash, restored);
    }
}
