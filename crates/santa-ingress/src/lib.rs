//! # santa-ingress
//!
//! **Roster envelope**: participant registration, exclusion management, and
//! roster sealing.
//!
//! ## Architecture
//!
//! The envelope sits between the caller's application and MatchCore and
//! performs the boundary checks the matcher does not:
//! 1. **Roster**: registers participants, rejects duplicate IDs, keeps
//!    administrators out of the draw
//! 2. **ExclusionRegistry**: rejects self-pairs and duplicate pairs, lists
//!    pairs by name for the organizer
//! 3. **RosterSealer**: freezes both into a hashed [`SealedRoster`]
//!
//! ## Flow
//!
//! ```text
//! Roster.register() + ExclusionRegistry.add()
//!     → RosterSealer.seal() → SealedRoster → DrawLedger / MatchCore
//! ```
//!
//! [`SealedRoster`]: santa_types::SealedRoster

pub mod exclusions;
pub mod roster;
pub mod sealer;

pub use exclusions::{ExclusionDetail, ExclusionRecord, ExclusionRegistry};
pub use roster::Roster;
pub use sealer::RosterSealer;
