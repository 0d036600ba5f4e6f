//! Text Encoding Helpers
//!
//! Base64 (standard alphabet) encoding used for signature values and
//! serialized key material.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::error::{CoreError, CoreResult};

/// Encode bytes as standard-alphabet base64
///
/// # Examples
///
/// ```rust
/// use keygrove_core::encoding::encode_b64;
///
/// assert_eq!(encode_b64(b"foobar"), "Zm9vYmFy");
/// ```
pub fn encode_b64(data: &[u8]) -> String {
    STANDARD.encode(data)
}

/// Decode standard-alphabet base64 into bytes
///
/// # Errors
///
/// Returns [`CoreError::InvalidEncoding`] if the input is not valid base64.
pub fn decode_b64(data: &str) -> CoreResult<Vec<u8>> {
    STANDARD
        .decode(data)
        .map_err(|err| CoreError::invalid_encoding(err.to_string()))
}
