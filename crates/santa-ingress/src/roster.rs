//! Participant roster for one event.
//!
//! Keeps participants in registration order, which becomes the giver order
//! of the draw. IDs are unique; registering the same ID twice is refused.

use std::collections::HashMap;

use santa_types::{Participant, ParticipantId, Result, SantaError};

/// Registered people, administrators included.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    /// Registration order.
    participants: Vec<Participant>,
    /// ID → position in `participants`.
    index: HashMap<ParticipantId, usize>,
}

impl Roster {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a participant.
    ///
    /// # Errors
    /// Returns [`SantaError::DuplicateParticipant`] if the ID is taken.
    pub fn register(&mut self, participant: Participant) -> Result<()> {
        if self.index.contains_key(&participant.id) {
            return Err(SantaError::DuplicateParticipant(participant.id));
        }

        tracing::debug!(
            participant = %participant.id.short(),
            role = %participant.role,
            total = self.participants.len() + 1,
            "Participant registered"
        );

        self.index.insert(participant.id, self.participants.len());
        self.participants.push(participant);
        Ok(())
    }

    /// Replace a participant's notes.
    ///
    /// # Errors
    /// Returns [`SantaError::ParticipantNotFound`] for an unknown ID.
    pub fn update_notes(&mut self, id: ParticipantId, notes: impl Into<String>) -> Result<()> {
        let pos = *self
            .index
            .get(&id)
            .ok_or(SantaError::ParticipantNotFound(id))?;
        self.participants[pos].notes = notes.into();
        tracing::debug!(participant = %id.short(), "Participant notes updated");
        Ok(())
    }

    pub fn get(&self, id: &ParticipantId) -> Option<&Participant> {
        self.index.get(id).map(|&pos| &self.participants[pos])
    }

    pub fn contains(&self, id: &ParticipantId) -> bool {
        self.index.contains_key(id)
    }

    /// Display name for `id`, if registered.
    pub fn name_of(&self, id: &ParticipantId) -> Option<&str> {
        self.get(id).map(|p| p.name.as_str())
    }

    /// All registered people in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Participant> {
        self.participants.iter()
    }

    /// IDs that take part in the draw, in registration order.
    pub fn eligible_ids(&self) -> Vec<ParticipantId> {
        self.participants
            .iter()
            .filter(|p| p.is_eligible())
            .map(|p| p.id)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.participants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.participants.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_and_lookup() {
        let mut roster = Roster::new();
        let alice = Participant::new("Alice").with_notes("books");
        let id = alice.id;
        roster.register(alice).unwrap();

        assert_eq!(roster.len(), 1);
        assert!(roster.contains(&id));
        assert_eq!(roster.name_of(&id), Some("Alice"));
        assert_eq!(roster.get(&id).unwrap().notes, "books");
    }

    #[test]
    fn duplicate_registration_refused() {
        let mut roster = Roster::new();
        let alice = Participant::new("Alice");
        let id = alice.id;
        roster.register(alice.clone()).unwrap();

        let err = roster.register(alice).unwrap_err();
        assert!(matches!(err, SantaError::DuplicateParticipant(dup) if dup == id));
        assert_eq!(roster.len(), 1);
    }

    #[test]
    fn administrators_are_not_eligible() {
        let mut roster = Roster::new();
        let admin = Participant::administrator("Organizer");
        let bob = Participant::new("Bob");
        let carol = Participant::new("Carol");
        let (bob_id, carol_id) = (bob.id, carol.id);

        roster.register(bob).unwrap();
        roster.register(admin).unwrap();
        roster.register(carol).unwrap();

        assert_eq!(roster.len(), 3);
        assert_eq!(roster.eligible_ids(), vec![bob_id, carol_id]);
    }

    #[test]
    fn eligible_ids_keep_registration_order() {
        let mut roster = Roster::new();
        let group = Participant::dummy_group(5);
        let expected: Vec<ParticipantId> = group.iter().rev().map(|p| p.id).collect();
        for p in group.into_iter().rev() {
            roster.register(p).unwrap();
        }
        assert_eq!(roster.eligible_ids(), expected);
    }

    #[test]
    fn update_notes() {
        let mut roster = Roster::new();
        let dave = Participant::new("Dave");
        let id = dave.id;
        roster.register(dave).unwrap();

        roster.update_notes(id, "socks, size 44").unwrap();
        assert_eq!(roster.get(&id).unwrap().notes, "socks, size 44");
    }

    #[test]
    fn update_notes_unknown_participant() {
        let mut roster = Roster::new();
        let ghost = ParticipantId::new();
        let err = roster.update_notes(ghost, "anything").unwrap_err();
        assert!(matches!(err, SantaError::ParticipantNotFound(id) if id == ghost));
    }
}
