//! Signature Creation
//!
//! [`Signer`] turns a collection member into portable signature values. The
//! emitted value is base64 text wrapping:
//!
//! ```text
//! public key | inclusion proof | raw signature
//! ```
//!
//! so a verifier needs nothing beyond the 34-byte collection key.

use std::marker::PhantomData;

use keygrove_core::encoding::encode_b64;
use keygrove_core::{PublicKey, SecretKey};
use keygrove_merkle::{Proof, Sha256};

use crate::error::SignatureResult;
use crate::traits::{MerkleKeyDigest, MerkleSignature};

/// One collection member prepared for signing
///
/// Bundles the member's key material with the inclusion proof for its
/// position. Obtained from
/// [`KeyCollection::signing_key`](crate::KeyCollection::signing_key).
#[derive(Debug)]
pub struct SigningKey<'a, D: MerkleKeyDigest> {
    public: &'a PublicKey,
    secret: &'a SecretKey,
    proof: Proof,
    _digest: PhantomData<D>,
}

impl<'a, D: MerkleKeyDigest> SigningKey<'a, D> {
    pub(crate) fn new(public: &'a PublicKey, secret: &'a SecretKey, proof: Proof) -> Self {
        Self {
            public,
            secret,
            proof,
            _digest: PhantomData,
        }
    }

    /// The member's public key
    pub fn public(&self) -> &PublicKey {
        self.public
    }

    /// The member's position in the collection
    pub fn index(&self) -> u32 {
        self.proof.index()
    }

    /// The member's inclusion proof
    pub fn proof(&self) -> &Proof {
        &self.proof
    }
}

/// A signature creation helper for Merkle Key Collection Signatures
///
/// Generic over the digest algorithm `D` baked into the collection root and
/// the signature suite `S`. The digest is fixed at compile time; the suite
/// may be a concrete algorithm or a boxed [`MerkleSignature`] for runtime
/// selection.
#[derive(Debug, Clone, Default)]
pub struct Signer<D, S> {
    suite: S,
    _digest: PhantomData<D>,
}

impl<D, S> Signer<D, S>
where
    D: MerkleKeyDigest,
    S: MerkleSignature,
{
    /// Create a signer around a signature suite
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

    /// Sign a message as one collection member
    ///
    /// Returns the base64 signature value disclosing the member's public key
    /// and inclusion proof alongside the raw signature.
    ///
    /// # Errors
    ///
    /// Propagates signing failures from the suite.
    pub fn sign(&self, message: &[u8], key: &SigningKey<'_, D>) -> SignatureResult<String> {
        let raw = self.suite.sign(message, key.secret)?;
        let proof_bytes = key.proof.to_bytes();

        let mut value =
            Vec::with_capacity(key.public.len() + proof_bytes.len() + raw.len());
        value.extend_from_slice(key.public.as_bytes());
        value.extend_from_slice(&proof_bytes);
        value.extend_from_slice(&raw);

        Ok(encode_b64(&value))
    }
}

/// An alias for a [`Signer`] with a dynamic signature type
pub type DynSigner<'a, D = Sha256> = Signer<D, Box<dyn MerkleSignature + 'a>>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collection::KeyCollection;
    use keygrove_core::encoding::decode_b64;
    use keygrove_core::Ed25519;

    #[test]
    fn test_signature_value_layout() {
        let collection = KeyCollection::new_ed25519(4).unwrap();
        let key = collection.signing_key::<Sha256>(2).unwrap();

        let signer = Signer::<Sha256, _>::new(Ed25519);
        let value = signer.sign(b"layout", &key).unwrap();

        let raw = decode_b64(&value).unwrap();
        let proof_len = key.proof().to_bytes().len();
        assert_eq!(raw.len(), 32 + proof_len + 64);

        // Leading bytes disclose the member public key
        assert_eq!(&raw[..32], key.public().as_bytes());
    }

    #[test]
    fn test_signing_is_deterministic_for_ed25519() {
        let collection = KeyCollection::new_ed25519(2).unwrap();
        let key = collection.signing_key::<Sha256>(0).unwrap();
        let signer = Signer::<Sha256, _>::new(Ed25519);

        let first = signer.sign(b"same message", &key).unwrap();
        let second = signer.sign(b"same message", &key).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_dyn_signer_matches_static() {
        let collection = KeyCollection::new_ed25519(2).unwrap();
        let key = collection.signing_key::<Sha256>(1).unwrap();

        let static_signer = Signer::<Sha256, _>::new(Ed25519);
        let dyn_signer: DynSigner<'_> = DynSigner::new(Box::new(Ed25519));

        let static_value = static_signer.sign(b"message", &key).unwrap();
        let dyn_value = dyn_signer.sign(b"message", &key).unwrap();
        assert_eq!(static_value, dyn_value);
    }
}
