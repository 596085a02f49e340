//! # santa-matchcore
//!
//! **Pure randomized matcher for Secret Santa draws.**
//!
//! MatchCore is the compute plane -- it takes the participant identifiers
//! and exclusion pairs of one event and produces a draw: every participant
//! gives exactly once and receives exactly once. It has:
//!
//! - **Zero side effects**: no I/O, no logging, inputs are only borrowed
//! - **No self-assignment**: nobody draws themselves
//! - **Symmetric exclusions**: `{A, B}` forbids both A→B and B→A
//! - **Exhaustive search**: [`Infeasible`](santa_types::Infeasible) is only
//!   reported once every reachable ordering has been tried (or the caller's
//!   step budget ran out)
//! - **Observable randomness**: repeated runs yield different valid draws

pub mod digest;
pub mod lookup;
pub mod matcher;
pub mod verify;

pub use digest::{compute_draw_root, verify_draw_root};
pub use lookup::ExclusionLookup;
pub use matcher::{DrawOutcome, draw, draw_with_config, draw_with_rng};
pub use verify::{is_valid_draw, verify_assignments};
