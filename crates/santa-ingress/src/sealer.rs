//! Roster sealer — produces the immutable `SealedRoster`.
//!
//! When the organizer asks for a draw, the `RosterSealer` takes the
//! eligible participants and the registered exclusions, freezes them, and
//! computes a hash committing to both. The draw ledger keeps that hash next
//! to the committed draw.

use chrono::Utc;
use santa_types::{EventId, ExclusionSet, ParticipantId, SealedRoster, constants};
use sha2::{Digest, Sha256};

use crate::{ExclusionRegistry, Roster};

/// Seals a roster and its exclusions into a [`SealedRoster`].
#[derive(Debug, Clone, Copy, Default)]
pub struct RosterSealer;

impl RosterSealer {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Seal the current roster for `event_id`.
    ///
    /// 1. Take eligible participants in registration order (administrators
    ///    are left out)
    /// 2. Take every registered exclusion
    /// 3. Compute the roster hash
    #[must_use]
    pub fn seal(
        &self,
        event_id: EventId,
        roster: &Roster,
        exclusions: &ExclusionRegistry,
    ) -> SealedRoster {
        let participants = roster.eligible_ids();
        let exclusions = exclusions.to_set();
        let roster_hash = Self::compute_roster_hash(event_id, &participants, &exclusions);

        tracing::info!(
            event = %event_id,
            participants = participants.len(),
            registered = roster.len(),
            exclusions = exclusions.len(),
            roster_hash = hex::encode(roster_hash),
            "Roster sealed"
        );

        SealedRoster {
            event_id,
            participants,
            exclusions,
            roster_hash,
            sealed_at: Utc::now(),
        }
    }

    /// SHA-256 over the event ID, the participants in giver order, and the
    /// normalized exclusion pairs.
    fn compute_roster_hash(
        event_id: EventId,
        participants: &[ParticipantId],
        exclusions: &ExclusionSet,
    ) -> [u8; 32] {
        let mut hasher = Sha256::new();
        hasher.update(constants::ROSTER_HASH_TAG);
        hasher.update(event_id.0.to_le_bytes());

        hasher.update((participants.len() as u64).to_le_bytes());
        for id in participants {
            hasher.update(id.as_bytes());
        }

        hasher.update((exclusions.len() as u64).to_le_bytes());
        for exclusion in exclusions {
            let (a, b) = exclusion.members();
            hasher.update(a.as_bytes());
            hasher.update(b.as_bytes());
        }

        hasher.finalize().into()
    }
}
