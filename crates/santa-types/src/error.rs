//! Error types for the Secret Santa draw engine.
//!
//! All errors use the `SS_ERR_` prefix convention for easy grepping in logs.
//! Error codes are grouped by subsystem:
//! - 1xx: Participant / roster errors
//! - 2xx: Exclusion errors
//! - 3xx: Draw errors
//! - 4xx: Verification errors
//!
//! The matcher itself reports only [`Infeasible`]. "No valid draw" is an
//! expected business outcome, so it is a plain value the caller inspects,
//! and it converts into [`SantaError::Infeasible`] at the ledger boundary.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{EventId, ExclusionId, ParticipantId};

/// Why the matcher could not produce a draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum Infeasible {
    /// Fewer participants than a draw needs. No search was attempted.
    #[error("need at least {min} participants, got {count}")]
    InsufficientParticipants { count: usize, min: usize },

    /// Every reachable candidate ordering was tried without completing a draw.
    #[error("no valid assignment exists ({steps} candidates examined)")]
    SearchExhausted { steps: u64 },

    /// The caller's step budget ran out before the search finished.
    #[error("step budget of {budget} exhausted before a valid assignment was found")]
    StepBudgetExhausted { budget: u64 },
}

impl Infeasible {
    /// Message suitable for the person who asked for the draw.
    #[must_use]
    pub fn advice(&self) -> &'static str {
        match self {
            Self::InsufficientParticipants { .. } => "Need at least 2 participants.",
            Self::SearchExhausted { .. } | Self::StepBudgetExhausted { .. } => {
                "Unable to find a valid draw. Try removing some exclusions or changing the participants."
            }
        }
    }
}

/// Central error enum for all draw engine operations.
#[derive(Debug, Error)]
pub enum SantaError {
    // =================================================================
    // Participant Errors (1xx)
    // =================================================================
    /// The participant is not registered.
    #[error("SS_ERR_100: Participant not found: {0}")]
    ParticipantNotFound(ParticipantId),

    /// A participant with this ID is already registered.
    #[error("SS_ERR_101: Participant already registered: {0}")]
    DuplicateParticipant(ParticipantId),

    // =================================================================
    // Exclusion Errors (2xx)
    // =================================================================
    /// The exclusion is structurally invalid (e.g. a self-pair).
    #[error("SS_ERR_200: Invalid exclusion: {reason}")]
    InvalidExclusion { reason: String },

    /// The same pair is already excluded, in either orientation.
    #[error("SS_ERR_201: Exclusion already exists: {existing}")]
    DuplicateExclusion { existing: ExclusionId },

    /// No exclusion record with this ID.
    #[error("SS_ERR_202: Exclusion not found: {0}")]
    ExclusionNotFound(ExclusionId),

    // =================================================================
    // Draw Errors (3xx)
    // =================================================================
    /// No valid draw exists for the supplied roster.
    #[error("SS_ERR_300: Draw infeasible: {0}")]
    Infeasible(#[from] Infeasible),

    /// A draw is already committed for this event.
    #[error("SS_ERR_301: Draw already completed for {0}")]
    DrawAlreadyCompleted(EventId),

    // =================================================================
    // Verification Errors (4xx)
    // =================================================================
    /// A draw result broke one of the assignment guarantees.
    #[error("SS_ERR_400: Invalid assignment: {reason}")]
    InvalidAssignment { reason: String },
}

/// Crate-wide `Result` alias.
pub type Result<T> = std::result::Result<T, SantaError>;
