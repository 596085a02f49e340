//! Exclusion registry — the caller-side list of forbidden pairs.
//!
//! Each pair is stored once under an [`ExclusionId`] so it can be listed
//! and removed individually. Adding `{B, A}` when `{A, B}` exists is
//! refused, as is a self-pair.
//!
//! Pairs naming people who are not (or no longer) on the roster are kept;
//! the matcher ignores them.

use santa_types::{
    Exclusion, ExclusionId, ExclusionSet, ParticipantId, Result, SantaError, constants,
};
use serde::{Deserialize, Serialize};

use crate::Roster;

/// One registered exclusion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExclusionRecord {
    pub id: ExclusionId,
    pub exclusion: Exclusion,
}

/// An exclusion as the organizer sees it: both members by ID and by name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExclusionDetail {
    pub id: ExclusionId,
    pub a: ParticipantId,
    pub b: ParticipantId,
    pub a_name: String,
    pub b_name: String,
}

/// Registered exclusions in insertion order.
#[derive(Debug, Clone, Default)]
pub struct ExclusionRegistry {
    records: Vec<ExclusionRecord>,
}

impl ExclusionRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Forbid `a` and `b` from drawing each other.
    ///
    /// # Errors
    /// - [`SantaError::InvalidExclusion`] if `a == b`
    /// - [`SantaError::DuplicateExclusion`] if the pair already exists in
    ///   either orientation
    pub fn add(&mut self, a: ParticipantId, b: ParticipantId) -> Result<ExclusionId> {
        let exclusion = Exclusion::new(a, b)?;

        if let Some(existing) = self.records.iter().find(|r| r.exclusion == exclusion) {
            return Err(SantaError::DuplicateExclusion {
                existing: existing.id,
            });
        }

        let id = ExclusionId::new();
        tracing::debug!(
            exclusion = %id,
            a = %a.short(),
            b = %b.short(),
            total = self.records.len() + 1,
            "Exclusion added"
        );
        self.records.push(ExclusionRecord { id, exclusion });
        Ok(id)
    }

    /// Delete an exclusion by ID.
    ///
    /// # Errors
    /// Returns [`SantaError::ExclusionNotFound`] for an unknown ID.
    pub fn remove(&mut self, id: ExclusionId) -> Result<ExclusionRecord> {
        let pos = self
            .records
            .iter()
            .position(|r| r.id == id)
            .ok_or(SantaError::ExclusionNotFound(id))?;
        let record = self.records.remove(pos);
        tracing::debug!(exclusion = %id, remaining = self.records.len(), "Exclusion removed");
        Ok(record)
    }

    pub fn get(&self, id: ExclusionId) -> Option<&ExclusionRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    pub fn list(&self) -> &[ExclusionRecord] {
        &self.records
    }

    /// Every exclusion with member names from `roster`, in insertion order.
    /// Members missing from the roster show as `"Unknown"`.
    pub fn details(&self, roster: &Roster) -> Vec<ExclusionDetail> {
        let name = |id: &ParticipantId| {
            roster
                .name_of(id)
                .unwrap_or(constants::UNKNOWN_PARTICIPANT_NAME)
                .to_string()
        };

        self.records
            .iter()
            .map(|record| {
                let (a, b) = record.exclusion.members();
                ExclusionDetail {
                    id: record.id,
                    a: *a,
                    b: *b,
                    a_name: name(a),
                    b_name: name(b),
                }
            })
            .collect()
    }

    /// The pairs alone, as the matcher consumes them.
    pub fn to_set(&self) -> ExclusionSet {
        self.records.iter().map(|r| r.exclusion.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
