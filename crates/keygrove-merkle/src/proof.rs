//! Inclusion Proofs
//!
//! A proof carries the leaf's position and the sibling hashes needed to
//! recompute the root. Proofs have a fixed binary layout so they can be
//! embedded in signature values:
//!
//! ```text
//! index: u32 LE | count: u32 LE | count * (side: u8 | hash: 32 bytes)
//! ```
//!
//! Side `0x00` means the sibling sits to the left of the path, `0x01` to the
//! right. Levels where the path node was promoted without a sibling
//! contribute no entry.

use serde::{Deserialize, Serialize};

use crate::digest::MerkleDigest;
use crate::error::{MerkleError, MerkleResult};
use crate::hash::{hash_leaf, hash_nodes, NodeHash, NODE_HASH_SIZE};

/// Upper bound on proof length accepted from the wire
///
/// A tree would need 2^64 leaves to produce a longer path, so anything above
/// this is hostile or corrupt input.
pub const MAX_PROOF_NODES: usize = 64;

const SIDE_LEFT: u8 = 0x00;
const SIDE_RIGHT: u8 = 0x01;

/// Bytes occupied by the index + count header
const HEADER_SIZE: usize = 8;

/// Bytes occupied by one serialized proof node
const NODE_SIZE: usize = 1 + NODE_HASH_SIZE;

/// A sibling hash and the side of the path it joins from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProofNode {
    /// Sibling to the left: parent = H(0x01 || sibling || current)
    Left(NodeHash),
    /// Sibling to the right: parent = H(0x01 || current || sibling)
    Right(NodeHash),
}

impl ProofNode {
    /// The sibling hash regardless of side
    pub fn hash(&self) -> &NodeHash {
        match self {
            Self::Left(hash) | Self::Right(hash) => hash,
        }
    }

    fn side_byte(&self) -> u8 {
        match self {
            Self::Left(_) => SIDE_LEFT,
            Self::Right(_) => SIDE_RIGHT,
        }
    }
}

/// An inclusion proof for one leaf of a Merkle tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Proof {
    index: u32,
    nodes: Vec<ProofNode>,
}

impl Proof {
    /// Assemble a proof from a leaf index and its path siblings
    pub fn new(index: u32, nodes: Vec<ProofNode>) -> Self {
        Self { index, nodes }
    }

    /// Position of the proven leaf in the tree
    pub fn index(&self) -> u32 {
        self.index
    }

    /// Path siblings, ordered leaf-to-root
    pub fn nodes(&self) -> &[ProofNode] {
        &self.nodes
    }

    /// Number of path siblings
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True for the single-leaf tree, whose proof has no siblings
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Verify the proof: rehash the leaf, fold in each sibling, compare roots
    pub fn verify<D: MerkleDigest>(&self, leaf: &[u8], root: &NodeHash) -> bool {
        let mut current = hash_leaf::<D>(leaf);

        for node in &self.nodes {
            current = match node {
                ProofNode::Left(sibling) => hash_nodes::<D>(sibling, &current),
                ProofNode::Right(sibling) => hash_nodes::<D>(&current, sibling),
            };
        }

        current == *root
    }

    /// Serialize to the fixed binary layout
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(HEADER_SIZE + self.nodes.len() * NODE_SIZE);
        bytes.extend_from_slice(&self.index.to_le_bytes());
        bytes.extend_from_slice(&(self.nodes.len() as u32).to_le_bytes());

        for node in &self.nodes {
            bytes.push(node.side_byte());
            bytes.extend_from_slice(node.hash().as_bytes());
        }

        bytes
    }

    /// Deserialize from the fixed binary layout
    ///
    /// # Errors
    ///
    /// Returns [`MerkleError::MalformedProof`] for truncated input, trailing
    /// bytes, unknown side tags, or a node count above [`MAX_PROOF_NODES`].
    pub fn from_bytes(data: &[u8]) -> MerkleResult<Self> {
        if data.len() < HEADER_SIZE {
            return Err(MerkleError::malformed_proof(format!(
                "header requires {} bytes, received {}",
                HEADER_SIZE,
                data.len()
            )));
        }

        let index = u32::from_le_bytes([data[0], data[1], data[2], data[3]]);
        let count = u32::from_le_bytes([data[4], data[5], data[6], data[7]]) as usize;

        if count > MAX_PROOF_NODES {
            return Err(MerkleError::malformed_proof(format!(
                "node count {} exceeds maximum {}",
                count, MAX_PROOF_NODES
            )));
        }

        let expected = HEADER_SIZE + count * NODE_SIZE;
        if data.len() != expected {
            return Err(MerkleError::malformed_proof(format!(
                "expected {} bytes for {} nodes, received {}",
                expected,
                count,
                data.len()
            )));
        }

        let mut nodes = Vec::with_capacity(count);
        for chunk in data[HEADER_SIZE..].chunks_exact(NODE_SIZE) {
            let mut hash = [0u8; NODE_HASH_SIZE];
            hash.copy_from_slice(&chunk[1..]);
            let hash = NodeHash::new(hash);

            let node = match chunk[0] {
                SIDE_LEFT => ProofNode::Left(hash),
                SIDE_RIGHT => ProofNode::Right(hash),
                other => {
                    return Err(MerkleError::malformed_proof(format!(
                        "unknown side tag {:#04x}",
                        other
                    )))
                }
            };
            nodes.push(node);
        }

        Ok(Self { index, nodes })
    }
}
