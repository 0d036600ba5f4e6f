//! Signature Verification
//!
//! [`Verifier`] checks signature values produced by [`Signer`](crate::Signer)
//! against a collection's 34-byte verification key, in a fixed order:
//!
//! 1. decode the verification key and check both algorithm tags
//! 2. decode the base64 value and split key, proof, and raw signature
//! 3. reject revoked member indices before any hashing
//! 4. recompute the root from the disclosed key through the proof
//! 5. verify the raw signature with the disclosed key
//!
//! The member index is committed inside the hashed leaf, so a revoked
//! signature cannot dodge step 3 by claiming a different index: the altered
//! index fails step 4 instead.

use std::marker::PhantomData;

use tracing::warn;

use keygrove_core::encoding::decode_b64;
use keygrove_core::{PublicKey, RevocationFlags};
use keygrove_merkle::{Proof, Sha256};

use crate::error::{SignatureError, SignatureResult};
use crate::merkle_key::MerkleKey;
use crate::traits::{MerkleKeyDigest, MerkleSignature};

/// A verifier's view of a collection key, with optional revocation flags
///
/// Borrows the encoded key bytes and, when attached, the flag set naming the
/// member indices the collection owner has withdrawn.
#[derive(Debug, Clone, Copy)]
pub struct VerificationKey<'a> {
    data: &'a [u8],
    revocation: Option<&'a RevocationFlags>,
}

impl<'a> VerificationKey<'a> {
    /// Wrap encoded collection key bytes
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            data,
            revocation: None,
        }
    }

    /// Attach revocation flags, builder style
    pub fn with_revocation(mut self, flags: &'a RevocationFlags) -> Self {
        self.revocation = Some(flags);
        self
    }

    /// Attach or replace revocation flags
    pub fn set_revocation(&mut self, flags: &'a RevocationFlags) {
        self.revocation = Some(flags);
    }

    /// Detach revocation flags
    pub fn clear_revocation(&mut self) {
        self.revocation = None;
    }

    /// The encoded key bytes
    pub fn as_bytes(&self) -> &[u8] {
        self.data
    }
}

/// A signature verification helper for Merkle Key Collection Signatures
///
/// Generic over the digest algorithm `D` and the signature suite `S`,
/// mirroring [`Signer`](crate::Signer).
#[derive(Debug, Clone, Default)]
pub struct Verifier<D, S> {
    suite: S,
    _digest: PhantomData<D>,
}

impl<D, S> Verifier<D, S>
where
    D: MerkleKeyDigest,
    S: MerkleSignature,
{
    /// Create a verifier around a signature suite
    pub fn new(suite: S) -> Self {
        Self {
            suite,
            _digest: PhantomData,
        }
    }

    /// The wrapped suite
    pub fn suite(&self) -> &S {
        &self.suite
    }

    /// Verify a signature value against a collection key
    ///
    /// # Errors
    ///
    /// - [`SignatureError::AlgorithmMismatch`] if either tag in the key does
    ///   not match this verifier
    /// - [`SignatureError::InvalidKeyFormat`] for malformed key or value
    ///   framing
    /// - [`SignatureError::KeyRevoked`] if the member index is flagged
    /// - [`SignatureError::InvalidProof`] if the disclosed key is not the
    ///   committed member
    /// - [`SignatureError::Core`] if the raw signature does not verify
    pub fn verify(
        &self,
        message: &[u8],
        signature: &str,
        key: &VerificationKey<'_>,
    ) -> SignatureResult<()> {
        let (signature_tag, digest_tag, root) = MerkleKey::decode_key(key.as_bytes())?;

        let expected_signature = self.suite.signature_tag();
        if signature_tag != expected_signature {
            return Err(SignatureError::AlgorithmMismatch {
                expected: expected_signature,
                received: signature_tag,
            });
        }
        if digest_tag != D::DIGEST_TAG {
            return Err(SignatureError::AlgorithmMismatch {
                expected: D::DIGEST_TAG,
                received: digest_tag,
            });
        }

        let raw = decode_b64(signature).map_err(|_| {
            SignatureError::invalid_key_format("signature value is not valid base64")
        })?;

        let key_type = self.suite.key_type();
        let public_len = key_type.public_key_length();
        let signature_len = key_type.signature_length();

        // Shortest well-formed value: key + empty proof header + signature
        if raw.len() < public_len + 8 + signature_len {
            return Err(SignatureError::invalid_key_format(format!(
                "signature value too short: {} bytes",
                raw.len()
            )));
        }

        let (public_bytes, rest) = raw.split_at(public_len);
        let (proof_bytes, raw_signature) = rest.split_at(rest.len() - signature_len);

        let proof = Proof::from_bytes(proof_bytes)
            .map_err(|err| SignatureError::invalid_proof(err.to_string()))?;

        if let Some(flags) = key.revocation {
            if flags.contains(proof.index()) {
                warn!(index = proof.index(), "rejected signature from revoked key");
                return Err(SignatureError::KeyRevoked {
                    index: proof.index(),
                });
            }
        }

        let leaf = MerkleKey::leaf(proof.index(), public_bytes);
        if !proof.verify::<D>(&leaf, &root) {
            return Err(SignatureError::invalid_proof(
                "public key is not a member of the collection root",
            ));
        }

        let public = PublicKey::from(public_bytes.to_vec());
        self.suite.verify(message, raw_signature, &public)?;

        Ok(())
    }
}

/// An alias for a [`Verifier`] with a dynamic signature type
pub type DynVerifier<'a, D = Sha256> = Verifier<D, Box<dyn MerkleSignature + 'a>>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collection::KeyCollection;
    use crate::signer::Signer;
    use crate::tag::MerkleTag;
    use keygrove_core::encoding::encode_b64;
    use keygrove_core::Ed25519;
    use keygrove_merkle::Blake3;

    fn signed_sample(
        count: usize,
        index: usize,
        message: &[u8],
    ) -> (KeyCollection, Vec<u8>, String) {
        let collection = KeyCollection::new_ed25519(count).unwrap();
        let encoded_key = collection.verification_key::<Sha256, _>(&Ed25519).unwrap();

        let signer = Signer::<Sha256, _>::new(Ed25519);
        let key = collection.signing_key::<Sha256>(index).unwrap();
        let value = signer.sign(message, &key).unwrap();

        (collection, encoded_key, value)
    }

    #[test]
    fn test_round_trip_verifies() {
        let (_, encoded_key, value) = signed_sample(5, 3, b"round trip");

        let verifier = Verifier::<Sha256, _>::new(Ed25519);
        let key = VerificationKey::new(&encoded_key);
        assert!(verifier.verify(b"round trip", &value, &key).is_ok());
    }

    #[test]
    fn test_wrong_message_rejected() {
        let (_, encoded_key, value) = signed_sample(5, 0, b"original");

        let verifier = Verifier::<Sha256, _>::new(Ed25519);
        let key = VerificationKey::new(&encoded_key);

        let err = verifier.verify(b"tampered", &value, &key).unwrap_err();
        assert!(matches!(err, SignatureError::Core(_)));
    }

    #[test]
    fn test_foreign_collection_rejected() {
        let (_, _, value) = signed_sample(4, 1, b"message");
        let other = KeyCollection::new_ed25519(4).unwrap();
        let other_key = other.verification_key::<Sha256, _>(&Ed25519).unwrap();

        let verifier = Verifier::<Sha256, _>::new(Ed25519);
        let key = VerificationKey::new(&other_key);

        let err = verifier.verify(b"message", &value, &key).unwrap_err();
        assert!(matches!(err, SignatureError::InvalidProof(_)));
    }

    #[test]
    fn test_digest_tag_mismatch_rejected() {
        let (_, encoded_key, value) = signed_sample(3, 0, b"message");

        // A BLAKE3 verifier must refuse a SHA-256 encoded key before any
        // proof work
        let verifier = Verifier::<Blake3, _>::new(Ed25519);
        let key = VerificationKey::new(&encoded_key);

        let err = verifier.verify(b"message", &value, &key).unwrap_err();
        assert_eq!(
            err,
            SignatureError::AlgorithmMismatch {
                expected: MerkleTag::new(0x01),
                received: MerkleTag::new(0x00),
            }
        );
    }

    #[test]
    fn test_revoked_index_rejected_then_restored() {
        let (_, encoded_key, value) = signed_sample(4, 2, b"message");
        let verifier = Verifier::<Sha256, _>::new(Ed25519);

        let mut flags = RevocationFlags::new();
        flags.set(2);

        let key = VerificationKey::new(&encoded_key).with_revocation(&flags);
        let err = verifier.verify(b"message", &value, &key).unwrap_err();
        assert_eq!(err, SignatureError::KeyRevoked { index: 2 });

        // Clearing the flag makes the very same value verify again
        flags.clear(2);
        let key = VerificationKey::new(&encoded_key).with_revocation(&flags);
        assert!(verifier.verify(b"message", &value, &key).is_ok());
    }

    #[test]
    fn test_rewritten_index_cannot_dodge_revocation() {
        let (_, encoded_key, value) = signed_sample(4, 2, b"message");
        let verifier = Verifier::<Sha256, _>::new(Ed25519);

        let mut flags = RevocationFlags::new();
        flags.set(2);

        // Rewrite the proof's index field (bytes 32..36 of the raw value)
        let mut raw = decode_b64(&value).unwrap();
        raw[32..36].copy_from_slice(&99u32.to_le_bytes());
        let forged = encode_b64(&raw);

        let key = VerificationKey::new(&encoded_key).with_revocation(&flags);
        let err = verifier.verify(b"message", &forged, &key).unwrap_err();

        // The revocation check no longer fires, but the leaf binding does
        assert!(matches!(err, SignatureError::InvalidProof(_)));
    }

    #[test]
    fn test_garbage_values_rejected() {
        let (_, encoded_key, _) = signed_sample(2, 0, b"message");
        let verifier = Verifier::<Sha256, _>::new(Ed25519);
        let key = VerificationKey::new(&encoded_key);

        assert!(matches!(
            verifier.verify(b"message", "@@not-base64@@", &key),
            Err(SignatureError::InvalidKeyFormat(_))
        ));

        let short = encode_b64(&[0u8; 16]);
        assert!(matches!(
            verifier.verify(b"message", &short, &key),
            Err(SignatureError::InvalidKeyFormat(_))
        ));
    }

    #[test]
    fn test_dyn_verifier_round_trip() {
        let (_, encoded_key, value) = signed_sample(3, 1, b"dynamic");

        let verifier: DynVerifier<'_> = DynVerifier::new(Box::new(Ed25519));
        let key = VerificationKey::new(&encoded_key);
        assert!(verifier.verify(b"dynamic", &value, &key).is_ok());
    }
}
