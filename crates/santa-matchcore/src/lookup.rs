//! Per-draw exclusion index.
//!
//! Participants are mapped to dense indices in giver order, and each index
//! gets the set of receiver indices it may not draw. Exclusions naming an
//! identifier outside the participant list are dropped here, so they never
//! influence the search.

use std::collections::{HashMap, HashSet};
use std::hash::Hash;

use santa_types::ExclusionSet;

/// Forbidden receiver indices per giver index.
#[derive(Debug, Clone)]
pub struct ExclusionLookup {
    forbidden: Vec<HashSet<usize>>,
}

impl ExclusionLookup {
    #[must_use]
    pub fn build<P: Eq + Hash + Ord>(participants: &[P], exclusions: &ExclusionSet<P>) -> Self {
        let index: HashMap<&P, usize> = participants
            .iter()
            .enumerate()
            .map(|(i, p)| (p, i))
            .collect();

        let mut forbidden = vec![HashSet::new(); participants.len()];
        for exclusion in exclusions {
            let (a, b) = exclusion.members();
            if let (Some(&i), Some(&j)) = (index.get(a), index.get(b)) {
                forbidden[i].insert(j);
                forbidden[j].insert(i);
            }
        }

        Self { forbidden }
    }

    /// Whether `giver` may not draw `receiver`. Self-draws are always
    /// forbidden.
    #[must_use]
    pub fn forbids(&self, giver: usize, receiver: usize) -> bool {
        giver == receiver
            || self
                .forbidden
                .get(giver)
                .is_some_and(|set| set.contains(&receiver))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.forbidden.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.forbidden.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn self_is_always_forbidden() {
        let lookup = ExclusionLookup::build(&["A", "B"], &ExclusionSet::new());
        assert!(lookup.forbids(0, 0));
        assert!(lookup.forbids(1, 1));
        assert!(!lookup.forbids(0, 1));
    }

    #[test]
    fn exclusions_apply_both_ways() {
        let exclusions = ExclusionSet::from_pairs([("C", "A")]);
        let lookup = ExclusionLookup::build(&["A", "B", "C"], &exclusions);
        assert!(lookup.forbids(0, 2));
        assert!(lookup.forbids(2, 0));
        assert!(!lookup.forbids(0, 1));
        assert!(!lookup.forbids(1, 2));
    }

    #[test]
    fn absent_identifiers_are_inert() {
        let exclusions = ExclusionSet::from_pairs([("A", "Z"), ("Y", "Z")]);
        let lookup = ExclusionLookup::build(&["A", "B"], &exclusions);
        assert!(!lookup.forbids(0, 1));
        assert!(!lookup.forbids(1, 0));
        assert_eq!(lookup.len(), 2);
    }
}
