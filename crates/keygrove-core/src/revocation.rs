//! Revocation Flags
//!
//! A growable bitmap over `u64` words, one bit per key index. The word
//! vector is the serialized representation, so revocation state can travel
//! as a compact integer list alongside a published key.

use serde::{Deserialize, Serialize};

const WORD_BITS: u32 = u64::BITS;

/// A set of revoked key indices backed by `u64` words
///
/// Trailing zero words are trimmed on mutation and deserialization, so two
/// flag sets holding the same indices always compare equal regardless of how
/// they were built.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<u64>", into = "Vec<u64>")]
pub struct RevocationFlags {
    words: Vec<u64>,
}

impl From<Vec<u64>> for RevocationFlags {
    fn from(words: Vec<u64>) -> Self {
        Self::from_words(words)
    }
}

impl From<RevocationFlags> for Vec<u64> {
    fn from(flags: RevocationFlags) -> Self {
        flags.words
    }
}

impl RevocationFlags {
    /// Create an empty flag set
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a flag set from raw words
    pub fn from_words(words: Vec<u64>) -> Self {
        let mut flags = Self { words };
        flags.trim();
        flags
    }

    /// Borrow the underlying words
    pub fn as_words(&self) -> &[u64] {
        &self.words
    }

    /// Mark an index as revoked, growing the word vector as needed
    pub fn set(&mut self, index: u32) {
        let (word, bit) = Self::locate(index);
        if word >= self.words.len() {
            self.words.resize(word + 1, 0);
        }
        self.words[word] |= 1 << bit;
    }

    /// Clear a revocation; out-of-range indices are a no-op
    pub fn clear(&mut self, index: u32) {
        let (word, bit) = Self::locate(index);
        if let Some(slot) = self.words.get_mut(word) {
            *slot &= !(1 << bit);
            self.trim();
        }
    }

    /// True if the index is revoked
    pub fn contains(&self, index: u32) -> bool {
        let (word, bit) = Self::locate(index);
        self.words
            .get(word)
            .is_some_and(|slot| slot & (1 << bit) != 0)
    }

    /// Number of revoked indices
    pub fn len(&self) -> usize {
        self.words.iter().map(|word| word.count_ones() as usize).sum()
    }

    /// True if no index is revoked
    pub fn is_empty(&self) -> bool {
        self.words.iter().all(|word| *word == 0)
    }

    /// Iterate revoked indices in ascending order
    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        self.words.iter().enumerate().flat_map(|(word, &bits)| {
            (0..WORD_BITS)
                .filter(move |bit| bits & (1u64 << bit) != 0)
                .map(move |bit| word as u32 * WORD_BITS + bit)
        })
    }

    fn locate(index: u32) -> (usize, u32) {
        ((index / WORD_BITS) as usize, index % WORD_BITS)
    }

    fn trim(&mut self) {
        while self.words.last() == Some(&0) {
            self.words.pop();
        }
    }
}
