//! Revocation Maintenance
//!
//! Collections are immutable once generated; withdrawing a member means
//! updating the flag set published beside the collection key. These helpers
//! mirror the two update shapes that travel between collection owners:
//! a single index, or a batch of indices.

use tracing::debug;

use keygrove_core::RevocationFlags;

/// Revoke a single member index
pub fn revoke_one(flags: &mut RevocationFlags, index: u32) {
    flags.set(index);
    debug!(index, "revoked collection member");
}

/// Revoke a batch of member indices; duplicates are harmless
pub fn revoke_set(flags: &mut RevocationFlags, indices: &[u32]) {
    for &index in indices {
        flags.set(index);
    }
    debug!(count = indices.len(), "applied batch revocation");
}

/// Restore a previously revoked member index
pub fn restore_one(flags: &mut RevocationFlags, index: u32) {
    flags.clear(index);
    debug!(index, "restored collection member");
}
