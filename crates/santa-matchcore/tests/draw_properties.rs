//! Integration tests: draw guarantees
//!
//! Every successful draw must be a permutation of the participants with no
//! fixed points and no excluded edge; impossible rosters must come back as
//! `Infeasible`, never as a panic or a partial draw.

use std::collections::HashSet;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use santa_matchcore::{draw, draw_with_rng, is_valid_draw, verify_assignments};
use santa_types::*;

fn names(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("P{i}")).collect()
}

#[test]
fn no_exclusions_always_succeeds() {
    for n in 2..=16 {
        let ids = names(n);
        for _ in 0..20 {
            let result = draw(&ids, &ExclusionSet::new())
                .unwrap_or_else(|e| panic!("n={n} should be drawable: {e}"));
            verify_assignments(&ids, &ExclusionSet::new(), &result).unwrap();
        }
    }
}

#[test]
fn every_participant_gives_and_receives_once() {
    let ids = ["A", "B", "C", "D"];
    for _ in 0..50 {
        let result = draw(&ids, &ExclusionSet::new()).unwrap();
        assert_eq!(result.len(), 4);

        let givers: HashSet<&str> = result.iter().map(|a| a.giver).collect();
        let receivers: HashSet<&str> = result.iter().map(|a| a.receiver).collect();
        let expected: HashSet<&str> = ids.into_iter().collect();
        assert_eq!(givers, expected);
        assert_eq!(receivers, expected);
        assert!(result.iter().all(|a| a.giver != a.receiver));
    }
}

#[test]
fn excluded_pairs_never_drawn_in_either_direction() {
    let ids = names(8);
    let exclusions = ExclusionSet::from_pairs([
        (ids[0].clone(), ids[1].clone()),
        (ids[2].clone(), ids[3].clone()),
        (ids[4].clone(), ids[0].clone()),
        (ids[7].clone(), ids[6].clone()),
    ]);

    for seed in 0..200 {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let result = draw_with_rng(&ids, &exclusions, &mut rng, DrawLimits::unbounded()).unwrap();
        for a in &result {
            assert!(
                !exclusions.contains(&a.giver, &a.receiver),
                "seed {seed}: excluded pair {} -> {} drawn",
                a.giver,
                a.receiver
            );
        }
        assert!(is_valid_draw(&ids, &exclusions, &result));
    }
}

#[test]
fn symmetric_exclusion_blocks_both_orientations() {
    let ids = ["A", "B", "C", "D", "E"];
    let exclusions = ExclusionSet::from_pairs([("B", "A")]);
    for _ in 0..100 {
        let result = draw(&ids, &exclusions).unwrap();
        assert!(!result.contains(&Assignment::new("A", "B")));
        assert!(!result.contains(&Assignment::new("B", "A")));
    }
}

#[test]
fn two_excluded_from_each_other_is_infeasible() {
    let exclusions = ExclusionSet::from_pairs([("A", "B")]);
    let outcome = draw(&["A", "B"], &exclusions);
    assert!(matches!(outcome, Err(Infeasible::SearchExhausted { .. })));
}

#[test]
fn participant_excluded_from_everyone_is_infeasible() {
    for n in 2..=7 {
        let ids = names(n);
        let exclusions =
            ExclusionSet::from_pairs(ids[1..].iter().map(|other| (ids[0].clone(), other.clone())));
        let outcome = draw(&ids, &exclusions);
        assert!(
            matches!(outcome, Err(Infeasible::SearchExhausted { .. })),
            "n={n}: got {outcome:?}"
        );
    }
}

#[test]
fn saturated_late_participant_is_infeasible() {
    // The isolated participant is last in giver order, so the search has to
    // backtrack through every earlier giver before giving up.
    let ids = names(6);
    let last = ids[5].clone();
    let exclusions =
        ExclusionSet::from_pairs(ids[..5].iter().map(|other| (last.clone(), other.clone())));
    let outcome = draw(&ids, &exclusions);
    assert!(matches!(outcome, Err(Infeasible::SearchExhausted { .. })));
}

#[test]
fn pigeonhole_saturation_is_infeasible() {
    // A, B and C may only give to D (and each other is excluded), but D can
    // only receive once.
    let exclusions = ExclusionSet::from_pairs([("A", "B"), ("A", "C"), ("B", "C")]);
    let outcome = draw(&["A", "B", "C", "D"], &exclusions);
    assert!(matches!(outcome, Err(Infeasible::SearchExhausted { .. })));
}

#[test]
fn three_with_two_exclusions_on_one_is_infeasible() {
    let exclusions = ExclusionSet::from_pairs([("A", "B"), ("A", "C")]);
    let outcome = draw(&["A", "B", "C"], &exclusions);
    assert!(matches!(outcome, Err(Infeasible::SearchExhausted { .. })));
}

#[test]
fn three_with_one_exclusion_has_unique_draw() {
    let exclusions = ExclusionSet::from_pairs([("A", "B")]);
    let expected = vec![
        Assignment::new("A", "C"),
        Assignment::new("B", "A"),
        Assignment::new("C", "B"),
    ];
    for _ in 0..50 {
        assert_eq!(draw(&["A", "B", "C"], &exclusions).unwrap(), expected);
    }
}

#[test]
fn repeated_draws_differ() {
    let ids = ["A", "B", "C", "D", "E", "F"];
    let distinct: HashSet<Vec<Assignment<&str>>> = (0..200)
        .map(|_| draw(&ids, &ExclusionSet::new()).unwrap())
        .collect();
    assert!(
        distinct.len() > 1,
        "200 draws produced a single outcome; randomness is not observable"
    );
}

#[test]
fn different_seeds_reach_different_draws() {
    let ids: Vec<u64> = (0..6).collect();
    let distinct: HashSet<Vec<Assignment<u64>>> = (0..64)
        .map(|seed| {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            draw_with_rng(&ids, &ExclusionSet::new(), &mut rng, DrawLimits::unbounded()).unwrap()
        })
        .collect();
    assert!(distinct.len() > 1);
}

#[test]
fn exclusions_on_absent_identifiers_are_inert() {
    let exclusions = ExclusionSet::from_pairs([("A", "X"), ("X", "Y")]);
    let result = draw(&["A", "B"], &exclusions).unwrap();
    assert_eq!(
        result,
        vec![Assignment::new("A", "B"), Assignment::new("B", "A")]
    );
}

#[test]
fn inputs_are_not_mutated() {
    let ids = vec!["A", "B", "C", "D"];
    let exclusions = ExclusionSet::from_pairs([("A", "C")]);
    let ids_before = ids.clone();
    let exclusions_before = exclusions.clone();
    let _ = draw(&ids, &exclusions).unwrap();
    assert_eq!(ids, ids_before);
    assert_eq!(exclusions, exclusions_before);
}

#[test]
fn participant_ids_draw_end_to_end() {
    let ids: Vec<ParticipantId> = (0..10).map(|_| ParticipantId::new()).collect();
    let mut exclusions = ExclusionSet::new();
    exclusions.insert(ids[0], ids[1]).unwrap();
    exclusions.insert(ids[2], ids[3]).unwrap();

    let result = draw(&ids, &exclusions).unwrap();
    verify_assignments(&ids, &exclusions, &result).unwrap();
}

#[test]
fn concurrent_draws_are_independent() {
    let ids: Vec<u32> = (0..10).collect();
    let exclusions = ExclusionSet::from_pairs([(0, 1), (1, 2), (2, 3)]);

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|_| scope.spawn(|| draw(&ids, &exclusions)))
            .collect();
        for handle in handles {
            let result = handle.join().unwrap().unwrap();
            assert!(is_valid_draw(&ids, &exclusions, &result));
        }
    });
}
