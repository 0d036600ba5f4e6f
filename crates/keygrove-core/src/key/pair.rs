//! Key pair generation and assembly

use ed25519_dalek::SigningKey;
use rand_core::OsRng;

use crate::error::{CoreError, CoreResult};
use crate::key::{KeyType, PublicKey, SecretKey};

/// A public/secret key pair for one algorithm
#[derive(Debug)]
pub struct KeyPair {
    key_type: KeyType,
    public: PublicKey,
    secret: SecretKey,
}

impl KeyPair {
    /// Generate a fresh Ed25519 key pair from OS randomness
    pub fn new_ed25519() -> Self {
        let signing = SigningKey::generate(&mut OsRng);
        let public = PublicKey::from(signing.verifying_key().to_bytes().to_vec());
        let secret = SecretKey::from(signing.to_bytes().to_vec());

        Self {
            key_type: KeyType::Ed25519,
            public,
            secret,
        }
    }

    /// Assemble a key pair from existing material, validating lengths
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidKeyLength`] if either half does not match
    /// the algorithm's expected length.
    pub fn from_parts(
        key_type: KeyType,
        public: PublicKey,
        secret: SecretKey,
    ) -> CoreResult<Self> {
        if public.len() != key_type.public_key_length() {
            return Err(CoreError::InvalidKeyLength {
                expected: key_type.public_key_length(),
                received: public.len(),
            });
        }

        if secret.len() != key_type.secret_key_length() {
            return Err(CoreError::InvalidKeyLength {
                expected: key_type.secret_key_length(),
                received: secret.len(),
            });
        }

        Ok(Self {
            key_type,
            public,
            secret,
        })
    }

    /// The pair's signature algorithm
    pub fn key_type(&self) -> KeyType {
        self.key_type
    }

    /// The public half
    pub fn public(&self) -> &PublicKey {
        &self.public
    }

    /// The secret half
    pub fn secret(&self) -> &SecretKey {
        &self.secret
    }

    /// Split the pair into its owned parts
    pub fn into_parts(self) -> (KeyType, PublicKey, SecretKey) {
        (self.key_type, self.public, self.secret)
    }
}
