//! Algorithm Tags

use std::fmt;

use serde::{Deserialize, Serialize};

/// A tag identifying a Merkle Key Collection signature or digest algorithm
///
/// Tags are single bytes stored at the front of an encoded collection key.
/// Signature and digest algorithms draw from separate namespaces, so equal
/// tag values across the two kinds are unrelated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MerkleTag(u8);

impl MerkleTag {
    /// Wrap a raw tag byte
    pub const fn new(value: u8) -> Self {
        Self(value)
    }

    /// The raw tag byte
    pub const fn value(&self) -> u8 {
        self.0
    }
}

impl fmt::Display for MerkleTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#04x}", self.0)
    }
}

impl From<u8> for MerkleTag {
    fn from(value: u8) -> Self {
        Self(value)
    }
}

impl From<MerkleTag> for u8 {
    fn from(tag: MerkleTag) -> Self {
        tag.0
    }
}
