//! Ed25519 signing and verification
//!
//! Thin wrappers over `ed25519-dalek` that work on the crate's owned key
//! types and surface structured errors instead of panics.

use ed25519_dalek::{
    Signature, Signer as _, SigningKey, Verifier as _, VerifyingKey, PUBLIC_KEY_LENGTH,
    SECRET_KEY_LENGTH, SIGNATURE_LENGTH,
};

use crate::error::{CoreError, CoreResult};
use crate::key::{PublicKey, SecretKey};
use crate::signature::{Sign, Verify};

/// Sign a message, returning the raw 64-byte signature
///
/// # Errors
///
/// Returns [`CoreError::InvalidKeyLength`] if the secret key is not exactly
/// 32 bytes.
pub fn sign(message: &[u8], secret: &SecretKey) -> CoreResult<Vec<u8>> {
    let bytes: [u8; SECRET_KEY_LENGTH] =
        secret
            .as_bytes()
            .try_into()
            .map_err(|_| CoreError::InvalidKeyLength {
                expected: SECRET_KEY_LENGTH,
                received: secret.len(),
            })?;

    let signing = SigningKey::from_bytes(&bytes);
    Ok(signing.sign(message).to_bytes().to_vec())
}

/// Verify a raw signature over a message
///
/// # Errors
///
/// Returns a length error for malformed inputs, or
/// [`CoreError::VerificationFailure`] if the key is not a valid curve point
/// or the signature does not match.
pub fn verify(message: &[u8], signature: &[u8], public: &PublicKey) -> CoreResult<()> {
    let key_bytes: [u8; PUBLIC_KEY_LENGTH] =
        public
            .as_bytes()
            .try_into()
            .map_err(|_| CoreError::InvalidKeyLength {
                expected: PUBLIC_KEY_LENGTH,
                received: public.len(),
            })?;

    let sig_bytes: [u8; SIGNATURE_LENGTH] =
        signature
            .try_into()
            .map_err(|_| CoreError::InvalidSignatureLength {
                expected: SIGNATURE_LENGTH,
                received: signature.len(),
            })?;

    let verifying =
        VerifyingKey::from_bytes(&key_bytes).map_err(|_| CoreError::VerificationFailure)?;

    verifying
        .verify(message, &Signature::from_bytes(&sig_bytes))
        .map_err(|_| CoreError::VerificationFailure)
}

/// The Ed25519 signature algorithm
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Ed25519;

impl Sign for Ed25519 {
    fn sign(&self, message: &[u8], secret: &SecretKey) -> CoreResult<Vec<u8>> {
        sign(message, secret)
    }
}

impl Verify for Ed25519 {
    fn verify(&self, message: &[u8], signature: &[u8], public: &PublicKey) -> CoreResult<()> {
        verify(message, signature, public)
    }
}
