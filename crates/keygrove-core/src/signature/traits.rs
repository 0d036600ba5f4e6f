//! Signature creation and verification seams

use crate::error::CoreResult;
use crate::key::{PublicKey, SecretKey};

/// A common interface for signature creation
///
/// # Design Principles
///
/// - **Object safety**: implementations can be boxed and chosen at runtime
/// - **Raw output**: the signature is returned as raw bytes; text encoding
///   is the caller's concern
pub trait Sign: Send + Sync {
    /// Sign a message with the given secret key
    ///
    /// # Errors
    ///
    /// Returns an error if the secret key is malformed for the algorithm or
    /// signing fails.
    fn sign(&self, message: &[u8], secret: &SecretKey) -> CoreResult<Vec<u8>>;
}

/// A common interface for signature verification
///
/// # Design Principles
///
/// - **Object safety**: implementations can be boxed and chosen at runtime
/// - **Fail closed**: any malformed input verifies as an error, never as
///   success
pub trait Verify: Send + Sync {
    /// Verify a raw signature over a message with the given public key
    ///
    /// # Errors
    ///
    /// Returns an error if the key or signature is malformed, or the
    /// signature does not match.
    fn verify(&self, message: &[u8], signature: &[u8], public: &PublicKey) -> CoreResult<()>;
}

impl<T: Sign + ?Sized> Sign for Box<T> {
    fn sign(&self, message: &[u8], secret: &SecretKey) -> CoreResult<Vec<u8>> {
        (**self).sign(message, secret)
    }
}

impl<T: Verify + ?Sized> Verify for Box<T> {
    fn verify(&self, message: &[u8], signature: &[u8], public: &PublicKey) -> CoreResult<()> {
        (**self).verify(message, signature, public)
    }
}
