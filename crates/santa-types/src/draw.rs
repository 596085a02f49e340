//! Draw lifecycle types.
//!
//! An event moves through two states: **NOT-RUN → COMPLETED**.
//!
//! The caller seals the roster into a [`SealedRoster`] (the immutable input
//! to the matcher), runs the draw, and commits the outcome as a
//! [`DrawRecord`]. Once an event is completed it is never drawn again.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{Assignment, EventId, ExclusionSet, ParticipantId};

/// Whether an event's draw has been committed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DrawStatus {
    #[default]
    NotRun,
    Completed,
}

impl fmt::Display for DrawStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotRun => write!(f, "not-run"),
            Self::Completed => write!(f, "completed"),
        }
    }
}

// ---------------------------------------------------------------------------
// SealedRoster — the immutable input to the matcher
// ---------------------------------------------------------------------------

/// Frozen draw input for one event.
///
/// `participants` holds only eligible entrants, in registration order; that
/// order is the giver order the matcher walks. `roster_hash` commits to the
/// participants and exclusions so a committed draw can be traced back to
/// exactly the input it was drawn from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SealedRoster {
    pub event_id: EventId,
    pub participants: Vec<ParticipantId>,
    pub exclusions: ExclusionSet,
    pub roster_hash: [u8; 32],
    pub sealed_at: DateTime<Utc>,
}

impl SealedRoster {
    pub fn len(&self) -> usize {
        self.participants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.participants.is_empty()
    }
}

// ---------------------------------------------------------------------------
// DrawRecord — the committed output
// ---------------------------------------------------------------------------

/// A committed draw for one event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DrawRecord {
    pub event_id: EventId,
    pub status: DrawStatus,
    pub created_at: DateTime<Utc>,
    /// One entry per participant, in giver order.
    pub assignments: Vec<Assignment>,
    /// SHA-256 over the assignments, for audit.
    pub draw_root: [u8; 32],
    /// Hash of the sealed roster this draw was made from.
    pub roster_hash: [u8; 32],
}

impl DrawRecord {
    /// Receiver drawn for `giver`.
    pub fn receiver_of(&self, giver: &ParticipantId) -> Option<ParticipantId> {
        crate::receiver_of(&self.assignments, giver).copied()
    }

    pub fn is_completed(&self) -> bool {
        self.status == DrawStatus::Completed
    }
}

/// Test helpers.
#[cfg(any(test, feature = "test-helpers"))]
impl SealedRoster {
    /// Roster with no exclusions and a zero hash.
    pub fn dummy(event_id: EventId, participants: Vec<ParticipantId>) -> Self {
        Self {
            event_id,
            participants,
            exclusions: ExclusionSet::new(),
            roster_hash: [0u8; 32],
            sealed_at: Utc::now(),
        }
    }
}
