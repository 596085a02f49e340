//! Randomized backtracking matcher.
//!
//! The core function: takes participant identifiers and exclusion pairs and
//! produces a draw. This is the **only** algorithm MatchCore exposes — no
//! side effects, no I/O, no shared state.
//!
//! ```text
//! draw(participants, exclusions) -> Vec<Assignment> | Infeasible
//! ```
//!
//! ## Search
//!
//! Givers are committed in the order supplied. For each giver the receivers
//! not yet drawn are shuffled, then tried in that order, skipping the giver
//! and anyone excluded with them. A dead end undoes the previous giver's
//! choice and moves on to their next candidate. The first complete draw is
//! returned; if the first giver runs out of candidates no draw exists.
//!
//! The search keeps one frame per giver on an explicit stack instead of
//! recursing, so deep rosters cannot overflow the call stack. A frame is
//! opened (and its candidates shuffled) exactly when a recursive search
//! would enter the next level, so the same random stream yields the same
//! draw either way.

use std::hash::Hash;

use rand::{Rng, SeedableRng, seq::SliceRandom};
use rand_chacha::ChaCha8Rng;
use santa_types::{Assignment, DrawConfig, DrawLimits, ExclusionSet, Infeasible, constants};

use crate::ExclusionLookup;

/// Result of one draw: a full assignment list, or why there is none.
pub type DrawOutcome<P> = std::result::Result<Vec<Assignment<P>>, Infeasible>;

/// Draw with a fresh non-deterministic RNG and no step budget.
///
/// This is the production entry point. Each call is independent, so two
/// calls on the same input will usually return different draws.
pub fn draw<P>(participants: &[P], exclusions: &ExclusionSet<P>) -> DrawOutcome<P>
where
    P: Clone + Eq + Hash + Ord,
{
    draw_with_rng(
        participants,
        exclusions,
        &mut rand::thread_rng(),
        DrawLimits::unbounded(),
    )
}

/// Draw according to `config`: seeded ChaCha8 when `config.seed` is set,
/// the thread RNG otherwise, bounded by `config.max_steps`.
pub fn draw_with_config<P>(
    participants: &[P],
    exclusions: &ExclusionSet<P>,
    config: &DrawConfig,
) -> DrawOutcome<P>
where
    P: Clone + Eq + Hash + Ord,
{
    match config.seed {
        Some(seed) => draw_with_rng(
            participants,
            exclusions,
            &mut ChaCha8Rng::seed_from_u64(seed),
            config.limits(),
        ),
        None => draw_with_rng(
            participants,
            exclusions,
            &mut rand::thread_rng(),
            config.limits(),
        ),
    }
}

/// Draw using the caller's RNG.
///
/// Returns one [`Assignment`] per participant, in the order participants
/// were supplied.
///
/// # Errors
/// - [`Infeasible::InsufficientParticipants`] for fewer than two participants
/// - [`Infeasible::SearchExhausted`] when no valid draw exists
/// - [`Infeasible::StepBudgetExhausted`] when `limits.max_steps` runs out first
pub fn draw_with_rng<P, R>(
    participants: &[P],
    exclusions: &ExclusionSet<P>,
    rng: &mut R,
    limits: DrawLimits,
) -> DrawOutcome<P>
where
    P: Clone + Eq + Hash + Ord,
    R: Rng + ?Sized,
{
    let count = participants.len();
    if count < constants::MIN_PARTICIPANTS {
        return Err(Infeasible::InsufficientParticipants {
            count,
            min: constants::MIN_PARTICIPANTS,
        });
    }

    let lookup = ExclusionLookup::build(participants, exclusions);
    let receivers = search(&lookup, rng, limits)?;

    Ok(participants
        .iter()
        .zip(receivers)
        .map(|(giver, r)| Assignment::new(giver.clone(), participants[r].clone()))
        .collect())
}

/// Candidates for one giver, in shuffled order.
struct Frame {
    candidates: Vec<usize>,
    cursor: usize,
}

impl Frame {
    fn open<R: Rng + ?Sized>(used: &[bool], rng: &mut R) -> Self {
        let mut candidates: Vec<usize> = used
            .iter()
            .enumerate()
            .filter(|(_, taken)| !**taken)
            .map(|(i, _)| i)
            .collect();
        candidates.shuffle(rng);
        Self {
            candidates,
            cursor: 0,
        }
    }

    fn next_candidate(&mut self) -> Option<usize> {
        let next = self.candidates.get(self.cursor).copied();
        if next.is_some() {
            self.cursor += 1;
        }
        next
    }
}

/// Depth-first search over giver indices. Returns the receiver index chosen
/// for each giver.
fn search<R: Rng + ?Sized>(
    lookup: &ExclusionLookup,
    rng: &mut R,
    limits: DrawLimits,
) -> std::result::Result<Vec<usize>, Infeasible> {
    let count = lookup.len();
    let mut used = vec![false; count];
    // Invariant: stack.len() == chosen.len() + 1 while searching.
    let mut chosen: Vec<usize> = Vec::with_capacity(count);
    let mut stack: Vec<Frame> = Vec::with_capacity(count);
    let mut steps: u64 = 0;

    stack.push(Frame::open(&used, rng));

    while let Some(frame) = stack.last_mut() {
        let giver = chosen.len();
        match frame.next_candidate() {
            Some(receiver) => {
                steps += 1;
                if let Some(budget) = limits.max_steps.filter(|&budget| steps > budget) {
                    return Err(Infeasible::StepBudgetExhausted { budget });
                }
                if lookup.forbids(giver, receiver) {
                    continue;
                }

                used[receiver] = true;
                chosen.push(receiver);
                if chosen.len() == count {
                    return Ok(chosen);
                }
                stack.push(Frame::open(&used, rng));
            }
            None => {
                // Giver exhausted: undo the previous giver's choice.
                stack.pop();
                if let Some(receiver) = chosen.pop() {
                    used[receiver] = false;
                }
            }
        }
    }

    Err(Infeasible::SearchExhausted { steps })
}
