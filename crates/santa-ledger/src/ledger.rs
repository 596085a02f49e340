//! Draw ledger — one committed draw per event.
//!
//! An event can only be drawn once. Running the draw again for a completed
//! event returns [`SantaError::DrawAlreadyCompleted`] and leaves the
//! committed record untouched. An infeasible draw commits nothing, so the
//! organizer can relax exclusions and try again.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use chrono::Utc;
use santa_matchcore::{compute_draw_root, draw_with_config, verify_assignments};
use santa_types::{
    DrawRecord, DrawStatus, EventId, LedgerConfig, Result, SantaError, SealedRoster,
};

/// Committed draws keyed by event.
#[derive(Debug, Clone, Default)]
pub struct DrawLedger {
    config: LedgerConfig,
    records: HashMap<EventId, DrawRecord>,
}

impl DrawLedger {
    #[must_use]
    pub fn new(config: LedgerConfig) -> Self {
        Self {
            config,
            records: HashMap::new(),
        }
    }

    /// `Completed` once a draw is committed for `event_id`, `NotRun` before.
    pub fn status(&self, event_id: EventId) -> DrawStatus {
        self.records
            .get(&event_id)
            .map_or(DrawStatus::NotRun, |record| record.status)
    }

    pub fn record(&self, event_id: EventId) -> Option<&DrawRecord> {
        self.records.get(&event_id)
    }

    /// Number of events with a committed draw.
    pub fn completed_events(&self) -> usize {
        self.records.len()
    }

    /// Run and commit the draw for `sealed.event_id`.
    ///
    /// # Errors
    /// - [`SantaError::DrawAlreadyCompleted`] if the event already has a draw
    /// - [`SantaError::Infeasible`] if the matcher finds no valid draw
    /// - [`SantaError::InvalidAssignment`] if verification is enabled and the
    ///   result breaks a draw guarantee
    pub fn run_draw(&mut self, sealed: &SealedRoster) -> Result<&DrawRecord> {
        let event_id = sealed.event_id;
        let Entry::Vacant(slot) = self.records.entry(event_id) else {
            tracing::warn!(event = %event_id, "Draw refused: already completed");
            return Err(SantaError::DrawAlreadyCompleted(event_id));
        };

        let assignments =
            match draw_with_config(&sealed.participants, &sealed.exclusions, &self.config.draw) {
                Ok(assignments) => assignments,
                Err(infeasible) => {
                    tracing::warn!(
                        event = %event_id,
                        participants = sealed.participants.len(),
                        exclusions = sealed.exclusions.len(),
                        reason = %infeasible,
                        "Draw infeasible"
                    );
                    return Err(infeasible.into());
                }
            };

        if self.config.verify_before_commit {
            verify_assignments(&sealed.participants, &sealed.exclusions, &assignments)?;
        }

        let draw_root = compute_draw_root(&assignments);
        tracing::info!(
            event = %event_id,
            participants = assignments.len(),
            exclusions = sealed.exclusions.len(),
            draw_root = hex::encode(draw_root),
            roster_hash = hex::encode(sealed.roster_hash),
            "Draw committed"
        );

        Ok(slot.insert(DrawRecord {
            event_id,
            status: DrawStatus::Completed,
            created_at: Utc::now(),
            assignments,
            draw_root,
            roster_hash: sealed.roster_hash,
        }))
    }
}
