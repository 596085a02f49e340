//! Participant records supplied by the caller.
//!
//! Only the identifier reaches the matcher. Name and notes travel with the
//! record so the ledger can tell a giver who they drew.

use serde::{Deserialize, Serialize};

use crate::ParticipantId;

/// Whether a registered person takes part in the draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Role {
    /// Gives and receives a gift.
    #[default]
    Participant,
    /// Runs the event; never drawn.
    Administrator,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Participant => write!(f, "PARTICIPANT"),
            Self::Administrator => write!(f, "ADMINISTRATOR"),
        }
    }
}

/// A person registered for an event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    pub id: ParticipantId,
    /// Display name shown to the giver who draws this person.
    pub name: String,
    /// Free-form wish list / preferences.
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub role: Role,
}

impl Participant {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: ParticipantId::new(),
            name: name.into(),
            notes: String::new(),
            role: Role::Participant,
        }
    }

    #[must_use]
    pub fn administrator(name: impl Into<String>) -> Self {
        Self {
            role: Role::Administrator,
            ..Self::new(name)
        }
    }

    #[must_use]
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }

    /// Administrators are kept out of the draw.
    #[must_use]
    pub fn is_eligible(&self) -> bool {
        self.role == Role::Participant
    }
}

/// Test helpers.
#[cfg(any(test, feature = "test-helpers"))]
impl Participant {
    /// `count` eligible participants named `P0`, `P1`, ...
    pub fn dummy_group(count: usize) -> Vec<Self> {
        (0..count).map(|i| Self::new(format!("P{i}"))).collect()
    }
}
