//! # santa-types
//!
//! Shared types, errors, and configuration for the **Secret Santa** draw engine.
//!
//! This crate is the leaf dependency of the workspace — every other crate
//! depends on it. It defines:
//!
//! - **Identifiers**: [`ParticipantId`], [`ExclusionId`], [`EventId`]
//! - **Participant model**: [`Participant`], [`Role`]
//! - **Exclusion model**: [`Exclusion`], [`ExclusionSet`]
//! - **Assignment model**: [`Assignment`]
//! - **Draw model**: [`SealedRoster`], [`DrawStatus`], [`DrawRecord`]
//! - **Configuration**: [`DrawConfig`], [`DrawLimits`], [`LedgerConfig`]
//! - **Errors**: [`SantaError`] with `SS_ERR_` prefix codes, and the
//!   matcher's [`Infeasible`] outcome
//! - **Constants**: system-wide limits and defaults

pub mod assignment;
pub mod config;
pub mod constants;
pub mod draw;
pub mod error;
pub mod exclusion;
pub mod ids;
pub mod participant;

// Re-export all primary types at crate root for ergonomic imports:
//   use santa_types::{Assignment, Exclusion, ParticipantId, ...};

pub use assignment::*;
pub use config::*;
pub use draw::*;
pub use error::*;
pub use exclusion::*;
pub use ids::*;
pub use participant::*;

// Constants are accessed via `santa_types::constants::FOO`
// (not re-exported to avoid name collisions).
