//! Read-only views over committed draws.
//!
//! A giver only ever sees their own receiver. The organizer sees every
//! pair by name. Distribution notices carry what a giver needs to be told:
//! who they drew and that person's notes.

use chrono::{DateTime, Utc};
use santa_ingress::Roster;
use santa_types::{DrawStatus, EventId, ParticipantId, constants};
use serde::{Deserialize, Serialize};

use crate::DrawLedger;

/// What a giver is shown about the person they drew.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReceiverView {
    pub name: String,
    pub notes: String,
}

/// One pair of the organizer's overview.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignmentDetail {
    pub giver_name: String,
    pub receiver_name: String,
}

/// Organizer's view of an event's draw.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawOverview {
    pub status: DrawStatus,
    pub created_at: Option<DateTime<Utc>>,
    pub assignments: Vec<AssignmentDetail>,
}

/// Payload for telling one giver their assignment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignmentNotice {
    pub giver: ParticipantId,
    pub giver_name: String,
    pub receiver_name: String,
    pub receiver_notes: String,
}

impl DrawLedger {
    /// The receiver drawn for `giver`.
    ///
    /// `None` while the event has no committed draw, when `giver` is not in
    /// it, or when the receiver is no longer on the roster.
    pub fn receiver_for(
        &self,
        event_id: EventId,
        giver: &ParticipantId,
        roster: &Roster,
    ) -> Option<ReceiverView> {
        let record = self.record(event_id)?;
        let receiver = roster.get(&record.receiver_of(giver)?)?;
        Some(ReceiverView {
            name: receiver.name.clone(),
            notes: receiver.notes.clone(),
        })
    }

    /// Every pair of the event's draw by name. IDs missing from the roster
    /// show as `"Unknown"`.
    pub fn overview(&self, event_id: EventId, roster: &Roster) -> DrawOverview {
        let Some(record) = self.record(event_id) else {
            return DrawOverview {
                status: DrawStatus::NotRun,
                created_at: None,
                assignments: Vec::new(),
            };
        };

        let name = |id: &ParticipantId| {
            roster
                .name_of(id)
                .unwrap_or(constants::UNKNOWN_PARTICIPANT_NAME)
                .to_string()
        };

        DrawOverview {
            status: record.status,
            created_at: Some(record.created_at),
            assignments: record
                .assignments
                .iter()
                .map(|a| AssignmentDetail {
                    giver_name: name(&a.giver),
                    receiver_name: name(&a.receiver),
                })
                .collect(),
        }
    }

    /// One notice per giver, in giver order. Pairs where either side has
    /// left the roster are skipped.
    pub fn notices(&self, event_id: EventId, roster: &Roster) -> Vec<AssignmentNotice> {
        let Some(record) = self.record(event_id) else {
            return Vec::new();
        };

        record
            .assignments
            .iter()
            .filter_map(|a| {
                let giver = roster.get(&a.giver)?;
                let receiver = roster.get(&a.receiver)?;
                Some(AssignmentNotice {
                    giver: giver.id,
                    giver_name: giver.name.clone(),
                    receiver_name: receiver.name.clone(),
                    receiver_notes: receiver.notes.clone(),
                })
            })
            .collect()
    }
}
