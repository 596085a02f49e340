//! Draw result verification.
//!
//! Checks a finished draw against every guarantee the matcher makes, so a
//! caller can refuse to commit anything that slipped through.

use std::collections::HashSet;
use std::fmt::Debug;
use std::hash::Hash;

use santa_types::{Assignment, ExclusionSet, Result, SantaError};

/// Verify that `assignments` is a valid draw for `participants` under
/// `exclusions`.
///
/// A valid draw has exactly one entry per participant, every participant
/// appears once as giver and once as receiver, nobody draws themselves, and
/// no entry pairs two excluded participants in either direction.
///
/// # Errors
/// Returns [`SantaError::InvalidAssignment`] describing the first violation.
pub fn verify_assignments<P>(
    participants: &[P],
    exclusions: &ExclusionSet<P>,
    assignments: &[Assignment<P>],
) -> Result<()>
where
    P: Eq + Hash + Ord + Clone + Debug,
{
    if assignments.len() != participants.len() {
        return Err(invalid(format!(
            "expected {} assignments, got {}",
            participants.len(),
            assignments.len()
        )));
    }

    let roster: HashSet<&P> = participants.iter().collect();
    let mut givers: HashSet<&P> = HashSet::with_capacity(assignments.len());
    let mut receivers: HashSet<&P> = HashSet::with_capacity(assignments.len());

    for assignment in assignments {
        let Assignment { giver, receiver } = assignment;

        if !roster.contains(giver) {
            return Err(invalid(format!("giver {giver:?} is not a participant")));
        }
        if !roster.contains(receiver) {
            return Err(invalid(format!("receiver {receiver:?} is not a participant")));
        }
        if giver == receiver {
            return Err(invalid(format!("{giver:?} is assigned to themselves")));
        }
        if exclusions.contains(giver, receiver) {
            return Err(invalid(format!(
                "{giver:?} -> {receiver:?} is an excluded pair"
            )));
        }
        if !givers.insert(giver) {
            return Err(invalid(format!("{giver:?} gives more than once")));
        }
        if !receivers.insert(receiver) {
            return Err(invalid(format!("{receiver:?} receives more than once")));
        }
    }

    Ok(())
}

/// Boolean form of [`verify_assignments`].
#[must_use]
pub fn is_valid_draw<P>(
    participants: &[P],
    exclusions: &ExclusionSet<P>,
    assignments: &[Assignment<P>],
) -> bool
where
    P: Eq + Hash + Ord + Clone + Debug,
{
    verify_assignments(participants, exclusions, assignments).is_ok()
}

fn invalid(reason: String) -> SantaError {
    SantaError::InvalidAssignment { reason }
}
