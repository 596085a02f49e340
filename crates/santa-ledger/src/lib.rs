//! # santa-ledger
//!
//! **Finality plane**: runs the draw for an event and commits it exactly
//! once.
//!
//! ## Architecture
//!
//! The ledger receives a [`SealedRoster`] from the ingress envelope and:
//! 1. Refuses events whose draw is already committed
//! 2. Runs the MatchCore matcher with the configured seed and step budget
//! 3. Verifies the result against the sealed roster
//! 4. Commits a [`DrawRecord`] stamped with its draw root
//!
//! Committed records back the read-only views: a giver's own receiver, the
//! organizer's overview, and one distribution notice per giver.
//!
//! ## Concurrency
//!
//! All mutation goes through `&mut self`. Callers sharing a ledger across
//! threads wrap it in a `Mutex`; the "already completed" check and the
//! commit then happen under one lock, so an event never ends up with two
//! committed draws.
//!
//! [`SealedRoster`]: santa_types::SealedRoster
//! [`DrawRecord`]: santa_types::DrawRecord

pub mod ledger;
pub mod views;

pub use ledger::DrawLedger;
pub use views::{AssignmentDetail, AssignmentNotice, DrawOverview, ReceiverView};
