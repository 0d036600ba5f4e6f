//! Key Collections
//!
//! A generated set of key pairs committed to by a single Merkle root. The
//! collection itself never changes after generation; revocation happens in
//! the verification-side flags, not here.

use tracing::debug;

use keygrove_core::{KeyPair, KeyType, PublicKey, SecretKey};
use keygrove_merkle::{compute_root, MerkleTree, NodeHash, Proof};

use crate::error::{SignatureError, SignatureResult};
use crate::merkle_key::MerkleKey;
use crate::signer::SigningKey;
use crate::traits::{MerkleKeyDigest, MerkleSignature};

/// Maximum number of keys in one collection
///
/// 2^12 keys keeps every inclusion proof at 12 nodes, well inside the wire
/// cap, while leaving room for years of key rotation.
pub const MAX_KEYS: usize = 4096;

/// A collection of key pairs committed to by a single Merkle root
///
/// Members are addressed by their index at generation time. Each leaf of the
/// commitment tree covers the member's position and public key, so proofs
/// are bound to both.
#[derive(Debug)]
pub struct KeyCollection {
    key_type: KeyType,
    public: Vec<PublicKey>,
    secret: Vec<SecretKey>,
}

impl KeyCollection {
    /// Generate a collection of fresh Ed25519 key pairs
    ///
    /// # Errors
    ///
    /// Returns [`SignatureError::CollectionBounds`] if `count` is zero or
    /// exceeds [`MAX_KEYS`].
    pub fn new_ed25519(count: usize) -> SignatureResult<Self> {
        if count == 0 || count > MAX_KEYS {
            return Err(SignatureError::CollectionBounds {
                requested: count,
                limit: MAX_KEYS,
            });
        }

        debug!(count, "generating ed25519 key collection");

        let mut public = Vec::with_capacity(count);
        let mut secret = Vec::with_capacity(count);
        for _ in 0..count {
            let (_, public_half, secret_half) = KeyPair::new_ed25519().into_parts();
            public.push(public_half);
            secret.push(secret_half);
        }

        Ok(Self {
            key_type: KeyType::Ed25519,
            public,
            secret,
        })
    }

    /// Rebuild a collection from stored material
    ///
    /// # Errors
    ///
    /// Returns [`SignatureError::CollectionBounds`] for an empty or oversized
    /// collection, [`SignatureError::InvalidKeyFormat`] if the halves differ
    /// in length, and a length error if any key does not match the algorithm.
    pub fn from_parts(
        key_type: KeyType,
        public: Vec<PublicKey>,
        secret: Vec<SecretKey>,
    ) -> SignatureResult<Self> {
        if public.len() != secret.len() {
            return Err(SignatureError::invalid_key_format(format!(
                "{} public keys but {} secret keys",
                public.len(),
                secret.len()
            )));
        }

        if public.is_empty() || public.len() > MAX_KEYS {
            return Err(SignatureError::CollectionBounds {
                requested: public.len(),
                limit: MAX_KEYS,
            });
        }

        for (public_half, secret_half) in public.iter().zip(&secret) {
            if public_half.len() != key_type.public_key_length() {
                return Err(keygrove_core::CoreError::InvalidKeyLength {
                    expected: key_type.public_key_length(),
                    received: public_half.len(),
                }
                .into());
            }
            if secret_half.len() != key_type.secret_key_length() {
                return Err(keygrove_core::CoreError::InvalidKeyLength {
                    expected: key_type.secret_key_length(),
                    received: secret_half.len(),
                }
                .into());
            }
        }

        Ok(Self {
            key_type,
            public,
            secret,
        })
    }

    /// The collection's signature algorithm
    pub fn key_type(&self) -> KeyType {
        self.key_type
    }

    /// Number of member keys
    pub fn len(&self) -> usize {
        self.public.len()
    }

    /// True if the collection has no members (unreachable through the
    /// constructors)
    pub fn is_empty(&self) -> bool {
        self.public.is_empty()
    }

    /// The public key at `index`
    pub fn public(&self, index: usize) -> Option<&PublicKey> {
        self.public.get(index)
    }

    /// The secret key at `index`
    pub fn secret(&self, index: usize) -> Option<&SecretKey> {
        self.secret.get(index)
    }

    /// Iterate the member public keys in index order
    pub fn iter(&self) -> impl Iterator<Item = &PublicKey> {
        self.public.iter()
    }

    /// Compute the collection's Merkle root under the chosen digest
    ///
    /// # Errors
    ///
    /// Propagates tree construction failures; with a constructed collection
    /// these do not occur.
    pub fn merkle_root<D: MerkleKeyDigest>(&self) -> SignatureResult<NodeHash> {
        Ok(compute_root::<D, _>(&self.leaves())?)
    }

    /// Generate the inclusion proof for the member at `index`
    ///
    /// # Errors
    ///
    /// Returns an out-of-bounds error if `index` is past the last member.
    pub fn merkle_proof<D: MerkleKeyDigest>(&self, index: usize) -> SignatureResult<Proof> {
        let tree = MerkleTree::<D>::from_leaves(&self.leaves())?;
        tree.proof(index)
            .ok_or(SignatureError::Merkle(keygrove_merkle::MerkleError::IndexOutOfBounds {
                index,
                len: self.len(),
            }))
    }

    /// Borrow the member at `index` as a ready-to-sign key with its proof
    ///
    /// Returns `None` if the index is out of bounds.
    pub fn signing_key<D: MerkleKeyDigest>(&self, index: usize) -> Option<SigningKey<'_, D>> {
        let tree = MerkleTree::<D>::from_leaves(&self.leaves()).ok()?;
        let proof = tree.proof(index)?;

        Some(SigningKey::new(
            &self.public[index],
            &self.secret[index],
            proof,
        ))
    }

    /// Encode the published verification key data for this collection
    ///
    /// # Errors
    ///
    /// Propagates root computation failures; with a constructed collection
    /// these do not occur.
    pub fn verification_key<D, S>(&self, suite: &S) -> SignatureResult<Vec<u8>>
    where
        D: MerkleKeyDigest,
        S: MerkleSignature,
    {
        let root = self.merkle_root::<D>()?;
        Ok(MerkleKey::encode_key::<D, S>(suite, &root))
    }

    fn leaves(&self) -> Vec<Vec<u8>> {
        self.public
            .iter()
            .enumerate()
            .map(|(index, key)| MerkleKey::leaf(index as u32, key.as_bytes()))
            .collect()
    }
}
