//! Merkle Tree Construction
//!
//! Bottom-up tree building over pre-hashed leaves. Every level is retained so
//! inclusion proofs can be generated without rebuilding.
//!
//! ## Odd level widths
//!
//! When a level has an odd number of nodes, the trailing node is promoted to
//! the next level unchanged rather than paired with a copy of itself.
//! Duplicate-pairing would let two different leaf sets share a root; promotion
//! keeps the mapping injective, and proofs simply skip promoted levels.

use std::marker::PhantomData;

use tracing::trace;

use crate::digest::MerkleDigest;
use crate::error::{MerkleError, MerkleResult};
use crate::hash::{hash_leaf, hash_nodes, NodeHash};
use crate::proof::{Proof, ProofNode};

/// A Merkle tree with all levels retained for proof generation
///
/// Level 0 holds the leaf hashes; the last level holds the single root.
#[derive(Debug, Clone)]
pub struct MerkleTree<D: MerkleDigest> {
    levels: Vec<Vec<NodeHash>>,
    _digest: PhantomData<D>,
}

impl<D: MerkleDigest> MerkleTree<D> {
    /// Build a tree by hashing each leaf and folding levels to the root
    ///
    /// # Errors
    ///
    /// Returns [`MerkleError::EmptyTree`] if `leaves` is empty.
    pub fn from_leaves<B: AsRef<[u8]>>(leaves: &[B]) -> MerkleResult<Self> {
        if leaves.is_empty() {
            return Err(MerkleError::EmptyTree);
        }

        let leaf_hashes: Vec<NodeHash> = leaves
            .iter()
            .map(|leaf| hash_leaf::<D>(leaf.as_ref()))
            .collect();

        let mut levels = vec![leaf_hashes];
        while levels[levels.len() - 1].len() > 1 {
            let next = fold_level::<D>(&levels[levels.len() - 1]);
            levels.push(next);
        }

        trace!(
            leaves = leaves.len(),
            depth = levels.len(),
            "built merkle tree"
        );

        Ok(Self {
            levels,
            _digest: PhantomData,
        })
    }

    /// Number of leaves
    pub fn len(&self) -> usize {
        self.levels[0].len()
    }

    /// True if the tree holds no leaves (unreachable through the constructor)
    pub fn is_empty(&self) -> bool {
        self.levels[0].is_empty()
    }

    /// The hashed leaves, in insertion order
    pub fn leaves(&self) -> &[NodeHash] {
        &self.levels[0]
    }

    /// Number of levels, leaves included
    pub fn depth(&self) -> usize {
        self.levels.len()
    }

    /// The root hash
    pub fn root(&self) -> NodeHash {
        self.levels[self.levels.len() - 1][0]
    }

    /// Generate an inclusion proof for the leaf at `index`
    ///
    /// Returns `None` if the index is out of bounds. Promoted levels (where
    /// the path node had no sibling) contribute no proof entry.
    pub fn proof(&self, index: usize) -> Option<Proof> {
        if index >= self.len() {
            return None;
        }

        let mut nodes = Vec::new();
        let mut position = index;

        for level in &self.levels[..self.levels.len() - 1] {
            let sibling = position ^ 1;
            if sibling < level.len() {
                let node = if sibling < position {
                    ProofNode::Left(level[sibling])
                } else {
                    ProofNode::Right(level[sibling])
                };
                nodes.push(node);
            }
            position /= 2;
        }

        Some(Proof::new(index as u32, nodes))
    }
}

/// Compute just the root of a leaf set, without retaining levels
///
/// # Errors
///
/// Returns [`MerkleError::EmptyTree`] if `leaves` is empty.
pub fn compute_root<D: MerkleDigest, B: AsRef<[u8]>>(leaves: &[B]) -> MerkleResult<NodeHash> {
    if leaves.is_empty() {
        return Err(MerkleError::EmptyTree);
    }

    let mut current: Vec<NodeHash> = leaves
        .iter()
        .map(|leaf| hash_leaf::<D>(leaf.as_ref()))
        .collect();

    while current.len() > 1 {
        current = fold_level::<D>(&current);
    }

    Ok(current[0])
}

/// Fold one level into the next: pair adjacent nodes, promote a trailing odd one
fn fold_level<D: MerkleDigest>(level: &[NodeHash]) -> Vec<NodeHash> {
    level
        .chunks(2)
        .map(|chunk| {
            if chunk.len() == 2 {
                hash_nodes::<D>(&chunk[0], &chunk[1])
            } else {
                chunk[0]
            }
        })
        .collect()
}
