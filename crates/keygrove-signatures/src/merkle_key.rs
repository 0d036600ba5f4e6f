//! Encoded Collection Keys

use keygrove_merkle::NodeHash;

use crate::error::{SignatureError, SignatureResult};
use crate::tag::MerkleTag;
use crate::traits::{MerkleKeyDigest, MerkleSignature};

/// Common utilities for working with Merkle Key Collection Signatures
///
/// The published key material for a collection is a fixed 34-byte value:
///
/// ```text
/// signature tag: u8 | digest tag: u8 | merkle root: 32 bytes
/// ```
///
/// Everything else a verifier needs arrives inside individual signatures.
#[derive(Debug, Clone, Copy)]
pub struct MerkleKey;

impl MerkleKey {
    /// Length in bytes of an encoded collection key
    pub const KEY_LENGTH: usize = 2 + NodeHash::SIZE;

    /// Encode the published key data for a collection root
    pub fn encode_key<D, S>(suite: &S, root: &NodeHash) -> Vec<u8>
    where
        D: MerkleKeyDigest,
        S: MerkleSignature,
    {
        let mut data = Vec::with_capacity(Self::KEY_LENGTH);
        data.push(suite.signature_tag().value());
        data.push(D::DIGEST_TAG.value());
        data.extend_from_slice(root.as_bytes());
        data
    }

    /// Split encoded key data into its signature tag, digest tag, and root
    ///
    /// # Errors
    ///
    /// Returns [`SignatureError::InvalidKeyFormat`] if the data is not
    /// exactly [`Self::KEY_LENGTH`] bytes.
    pub fn decode_key(data: &[u8]) -> SignatureResult<(MerkleTag, MerkleTag, NodeHash)> {
        if data.len() != Self::KEY_LENGTH {
            return Err(SignatureError::invalid_key_format(format!(
                "expected {} bytes, received {}",
                Self::KEY_LENGTH,
                data.len()
            )));
        }

        let signature_tag = MerkleTag::new(data[0]);
        let digest_tag = MerkleTag::new(data[1]);

        let mut root = [0u8; NodeHash::SIZE];
        root.copy_from_slice(&data[2..]);

        Ok((signature_tag, digest_tag, NodeHash::new(root)))
    }

    /// Build the leaf content committing a public key to its position
    ///
    /// The index is part of the hashed leaf, so a signature cannot claim a
    /// different position than the one its proof was generated for.
    pub fn leaf(index: u32, public_key: &[u8]) -> Vec<u8> {
        let mut data = Vec::with_capacity(4 + public_key.len());
        data.extend_from_slice(&index.to_le_bytes());
        data.extend_from_slice(public_key);
        data
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use keygrove_core::Ed25519;
    use keygrove_merkle::{Blake3, Sha256};

    #[test]
    fn test_encode_decode_round_trip() {
        let root = NodeHash::new([0x42; 32]);
        let encoded = MerkleKey::encode_key::<Sha256, _>(&Ed25519, &root);

        assert_eq!(encoded.len(), MerkleKey::KEY_LENGTH);
        assert_eq!(encoded[0], 0x00); // ed25519
        assert_eq!(encoded[1], 0x00); // sha256

        let (sig_tag, dig_tag, decoded_root) = MerkleKey::decode_key(&encoded).unwrap();
        assert_eq!(sig_tag, MerkleTag::new(0x00));
        assert_eq!(dig_tag, MerkleTag::new(0x00));
        assert_eq!(decoded_root, root);
    }

    #[test]
    fn test_blake3_digest_tag_encoded() {
        let root = NodeHash::new([0x01; 32]);
        let encoded = MerkleKey::encode_key::<Blake3, _>(&Ed25519, &root);
        assert_eq!(encoded[1], 0x01);
    }

    #[test]
    fn test_decode_rejects_wrong_length() {
        let err = MerkleKey::decode_key(&[0u8; 33]).unwrap_err();
        assert!(matches!(err, SignatureError::InvalidKeyFormat(_)));
        assert!(err.to_string().contains("expected 34 bytes"));
    }

    #[test]
    fn test_leaf_binds_index() {
        let key = [0xAA; 32];
        let leaf_0 = MerkleKey::leaf(0, &key);
        let leaf_1 = MerkleKey::leaf(1, &key);

        assert_eq!(leaf_0.len(), 36);
        assert_ne!(leaf_0, leaf_1);
        assert_eq!(&leaf_0[4..], &key);
    }
}
