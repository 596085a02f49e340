//! Exclusion model: forbidden giver/receiver pairs.
//!
//! An [`Exclusion`] is an unordered pair. It is stored normalized
//! (`a < b`) so `{A, B}` and `{B, A}` are the same value, compare equal and
//! hash equal. Self-pairs cannot be constructed.
//!
//! The types are generic over the identifier so the matcher can be driven
//! with plain strings or integers as well as [`ParticipantId`].

use std::cmp::Ordering;
use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::{ParticipantId, Result, SantaError};

/// Wire shape of an exclusion before normalization.
#[derive(Debug, Clone, Deserialize)]
pub struct ExclusionPair<P> {
    pub a: P,
    pub b: P,
}

/// Unordered pair `{a, b}`: neither may give to the other.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(
    try_from = "ExclusionPair<P>",
    bound(deserialize = "P: Deserialize<'de> + Ord")
)]
pub struct Exclusion<P = ParticipantId> {
    a: P,
    b: P,
}

impl<P: Ord> Exclusion<P> {
    /// Build a normalized exclusion.
    ///
    /// # Errors
    /// Returns [`SantaError::InvalidExclusion`] when both sides are the
    /// same identifier.
    pub fn new(x: P, y: P) -> Result<Self> {
        Self::normalized(x, y).ok_or_else(|| SantaError::InvalidExclusion {
            reason: "a participant cannot be excluded from themselves".into(),
        })
    }

    /// Lower member first; `None` for a self-pair.
    fn normalized(x: P, y: P) -> Option<Self> {
        match x.cmp(&y) {
            Ordering::Less => Some(Self { a: x, b: y }),
            Ordering::Greater => Some(Self { a: y, b: x }),
            Ordering::Equal => None,
        }
    }

    /// Both members, lower first.
    pub fn members(&self) -> (&P, &P) {
        (&self.a, &self.b)
    }
}

impl<P: Ord> TryFrom<ExclusionPair<P>> for Exclusion<P> {
    type Error = SantaError;

    fn try_from(pair: ExclusionPair<P>) -> Result<Self> {
        Self::new(pair.a, pair.b)
    }
}

impl<P: std::fmt::Display> std::fmt::Display for Exclusion<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{{}, {}}}", self.a, self.b)
    }
}

// ---------------------------------------------------------------------------
// ExclusionSet
// ---------------------------------------------------------------------------

/// Ordered set of exclusions with symmetric lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    transparent,
    bound(
        serialize = "P: Serialize",
        deserialize = "P: Deserialize<'de> + Ord"
    )
)]
pub struct ExclusionSet<P = ParticipantId> {
    pairs: BTreeSet<Exclusion<P>>,
}

impl<P: Ord> ExclusionSet<P> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            pairs: BTreeSet::new(),
        }
    }

    /// Add `{x, y}`. Returns `false` if the pair was already present in
    /// either orientation.
    ///
    /// # Errors
    /// Returns [`SantaError::InvalidExclusion`] for a self-pair.
    pub fn insert(&mut self, x: P, y: P) -> Result<bool> {
        Ok(self.pairs.insert(Exclusion::new(x, y)?))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Exclusion<P>> {
        self.pairs.iter()
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

impl<P: Ord + Clone> ExclusionSet<P> {
    /// Whether `x` and `y` may not be matched, in either direction.
    pub fn contains(&self, x: &P, y: &P) -> bool {
        Exclusion::normalized(x.clone(), y.clone())
            .is_some_and(|pair| self.pairs.contains(&pair))
    }
}

impl<P: Ord> Default for ExclusionSet<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: Ord> FromIterator<Exclusion<P>> for ExclusionSet<P> {
    fn from_iter<I: IntoIterator<Item = Exclusion<P>>>(iter: I) -> Self {
        Self {
            pairs: iter.into_iter().collect(),
        }
    }
}

impl<'a, P> IntoIterator for &'a ExclusionSet<P> {
    type Item = &'a Exclusion<P>;
    type IntoIter = std::collections::btree_set::Iter<'a, Exclusion<P>>;

    fn into_iter(self) -> Self::IntoIter {
        self.pairs.iter()
    }
}

/// Test helpers.
#[cfg(any(test, feature = "test-helpers"))]
impl<P: Ord> ExclusionSet<P> {
    /// Build a set from pairs, panicking on a self-pair.
    pub fn from_pairs<I: IntoIterator<Item = (P, P)>>(pairs: I) -> Self {
        let mut set = Self::new();
        for (x, y) in pairs {
            set.insert(x, y).expect("test exclusion must not be a self-pair");
        }
        set
    }
}
