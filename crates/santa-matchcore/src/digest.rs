//! Draw root hashing for audit.
//!
//! A committed draw is stamped with a SHA-256 root over its assignments, so
//! a stored or transmitted draw can be checked against the one that was
//! committed without comparing full payloads.

use santa_types::{Assignment, constants};
use sha2::{Digest, Sha256};

/// Compute the draw root over a set of assignments.
///
/// Depends on the number of entries and each (giver, receiver) pair in
/// order. The same draw in the same giver order always produces the same
/// root.
#[must_use]
pub fn compute_draw_root(assignments: &[Assignment]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(constants::DRAW_ROOT_TAG);
    hasher.update((assignments.len() as u64).to_le_bytes());

    for assignment in assignments {
        hasher.update(assignment.giver.as_bytes());
        hasher.update(assignment.receiver.as_bytes());
    }

    hasher.finalize().into()
}

/// Recompute the root from `assignments` and compare with `expected_root`.
#[must_use]
pub fn verify_draw_root(assignments: &[Assignment], expected_root: &[u8; 32]) -> bool {
    compute_draw_root(assignments) == *expected_root
}
