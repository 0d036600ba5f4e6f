//! Signature Traits and Algorithms
//!
//! Object-safe creation/verification seams plus the Ed25519 implementation.
//! Higher layers stay generic over [`Sign`] and [`Verify`] so algorithms can
//! be selected at compile time or boxed at runtime.

pub mod ed25519;
mod traits;

pub use ed25519::Ed25519;
pub use traits::{Sign, Verify};
