//! Assignment types produced by the matcher.
//!
//! An [`Assignment`] is the ordered pair "giver buys a gift for receiver".
//! A full draw is a `Vec<Assignment>` with one entry per participant, in
//! the order givers were supplied.

use serde::{Deserialize, Serialize};

use crate::ParticipantId;

/// One giver → receiver edge of a draw.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Assignment<P = ParticipantId> {
    pub giver: P,
    pub receiver: P,
}

impl<P> Assignment<P> {
    #[must_use]
    pub fn new(giver: P, receiver: P) -> Self {
        Self { giver, receiver }
    }
}

impl<P: PartialEq> Assignment<P> {
    /// A giver drawn to themselves. Never present in a valid draw.
    pub fn is_fixed_point(&self) -> bool {
        self.giver == self.receiver
    }
}

impl<P: std::fmt::Display> std::fmt::Display for Assignment<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.giver, self.receiver)
    }
}

/// Receiver drawn for `giver`, if `giver` appears in `assignments`.
pub fn receiver_of<'a, P: PartialEq>(assignments: &'a [Assignment<P>], giver: &P) -> Option<&'a P> {
    assignments
        .iter()
        .find(|a| a.giver == *giver)
        .map(|a| &a.receiver)
}
