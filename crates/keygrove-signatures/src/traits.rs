//! Scheme-Level Algorithm Traits
//!
//! These traits bind concrete signature and digest algorithms to the tags
//! stored in encoded collection keys. The signature side is object-safe so a
//! suite can be chosen at runtime; the digest side stays a compile-time
//! parameter and carries its tag as an associated constant.

use keygrove_core::{Ed25519, KeyType, Sign, Verify};
use keygrove_merkle::{Blake3, MerkleDigest, Sha256};

use crate::tag::MerkleTag;

/// A common interface for signature algorithms usable with Merkle key
/// collections
///
/// # Design Principles
///
/// - **Object safety**: tag and key metadata are instance methods, so
///   `Box<dyn MerkleSignature>` works for runtime algorithm selection
/// - **Composable**: the raw sign/verify behavior comes from the
///   [`Sign`]/[`Verify`] supertraits
pub trait MerkleSignature: Sign + Verify {
    /// Tag stored in the encoded collection key
    fn signature_tag(&self) -> MerkleTag;

    /// The key algorithm, fixing public key and signature lengths
    fn key_type(&self) -> KeyType;
}

/// A common interface for digest algorithms usable with Merkle key
/// collections
pub trait MerkleKeyDigest: MerkleDigest {
    /// Tag stored in the encoded collection key
    const DIGEST_TAG: MerkleTag;
}

impl MerkleSignature for Ed25519 {
    fn signature_tag(&self) -> MerkleTag {
        MerkleTag::new(0x00)
    }

    fn key_type(&self) -> KeyType {
        KeyType::Ed25519
    }
}

impl<T: MerkleSignature + ?Sized> MerkleSignature for Box<T> {
    fn signature_tag(&self) -> MerkleTag {
        (**self).signature_tag()
    }

    fn key_type(&self) -> KeyType {
        (**self).key_type()
    }
}

impl MerkleKeyDigest for Sha256 {
    const DIGEST_TAG: MerkleTag = MerkleTag::new(0x00);
}

impl MerkleKeyDigest for Blake3 {
    const DIGEST_TAG: MerkleTag = MerkleTag::new(0x01);
}
