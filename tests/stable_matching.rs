//! Integration tests for stable matching
//!
//! Tests verify:
//! - The known 4×4 instance
//! - Stability and perfection on random instances
//! - Determinism and the N² proposal bound
//! - Rejection of malformed preference lists before matching

mod common;

use algo::algorithm::{
    GaleShapley, Match, PreferenceTable, StableMatching, blocking_pairs, gale_shapley,
    is_perfect, is_stable, stable_match,
};
use algo::error::{Error, Side};
use common::{random_rows, random_tables, seeded_rng};

// ============================================================================
// Known Instances
// ============================================================================

#[test]
fn test_four_by_four_instance() {
    let matches = stable_match(
        vec![
            vec![4, 1, 2, 3],
            vec![2, 3, 1, 4],
            vec![2, 4, 3, 1],
            vec![3, 1, 4, 2],
        ],
        vec![
            vec![4, 1, 3, 2],
            vec![1, 3, 2, 4],
            vec![1, 2, 3, 4],
            vec![4, 1, 3, 2],
        ],
    )
    .unwrap();

    let expected: Vec<Match> = [(1, 4), (2, 3), (3, 2), (4, 1)]
        .into_iter()
        .map(Match::from)
        .collect();
    assert_eq!(matches, expected);
}

#[test]
fn test_identical_preferences_follow_receiver_order() {
    // Everyone agrees: receivers all rank proposers 1..n, proposers all rank receivers 1..n
    let n = 5;
    let rows: Vec<Vec<usize>> = (0..n).map(|_| (1..=n).collect()).collect();
    let proposers = PreferenceTable::proposers(rows.clone()).unwrap();
    let receivers = PreferenceTable::receivers(rows).unwrap();

    let result = gale_shapley(&proposers, &receivers).unwrap();

    for p in 1..=n {
        assert_eq!(result.receiver_of(p), Some(p));
    }
}

#[test]
fn test_worst_case_proposal_count() {
    // Proposer i ranks receivers starting at i and wrapping; receivers rank
    // proposers so that every first proposal is displaced later
    let n = 4;
    let proposers = PreferenceTable::proposers(
        (0..n)
            .map(|i| (0..n).map(|k| (i + k) % n + 1).collect())
            .collect(),
    )
    .unwrap();
    let receivers = PreferenceTable::receivers(
        (0..n)
            .map(|j| (0..n).map(|k| (j + k + 1) % n + 1).collect())
            .collect(),
    )
    .unwrap();

    let result = gale_shapley(&proposers, &receivers).unwrap();

    assert!(is_perfect(n, result.matches()));
    assert!(is_stable(&proposers, &receivers, result.matches()).unwrap());
    assert!(result.proposals() <= n * n);
}

// ============================================================================
// Properties on Random Instances
// ============================================================================

#[test]
fn test_random_instances_are_stable_and_perfect() {
    let mut rng = seeded_rng(0x5eed);

    for n in [1usize, 2, 3, 5, 8, 13, 32] {
        for _ in 0..20 {
            let (proposers, receivers) = random_tables(&mut rng, n);
            let result = gale_shapley(&proposers, &receivers).unwrap();

            assert!(is_perfect(n, result.matches()), "n={n}: not perfect");
            let blocking = blocking_pairs(&proposers, &receivers, result.matches()).unwrap();
            assert!(blocking.is_empty(), "n={n}: blocking pairs {blocking:?}");
            assert!(result.proposals() >= n);
            assert!(result.proposals() <= n * n);
        }
    }
}

#[test]
fn test_matching_is_deterministic() {
    let mut rng = seeded_rng(42);
    let (proposers, receivers) = random_tables(&mut rng, 16);

    let first = gale_shapley(&proposers, &receivers).unwrap();
    for _ in 0..5 {
        assert_eq!(gale_shapley(&proposers, &receivers).unwrap(), first);
    }
}

#[test]
fn test_proposer_optimal_against_receiver_optimal() {
    // Every proposer does at least as well proposing as when receivers propose
    let mut rng = seeded_rng(7);

    for _ in 0..20 {
        let (proposers, receivers) = random_tables(&mut rng, 10);
        let proposing = gale_shapley(&proposers, &receivers).unwrap();
        let receiving = gale_shapley(&receivers, &proposers).unwrap();

        for p in 1..=10 {
            let own = proposing.receiver_of(p).unwrap();
            // In the swapped run, proposer p is on the receiving side
            let other = receiving.proposer_of(p).unwrap();
            assert!(proposers.rank_of(p, own) <= proposers.rank_of(p, other));
        }
    }
}

#[test]
fn test_trait_matches_free_function() {
    let mut rng = seeded_rng(99);
    let (proposers, receivers) = random_tables(&mut rng, 12);

    assert_eq!(
        GaleShapley.stable_match(&proposers, &receivers).unwrap(),
        gale_shapley(&proposers, &receivers).unwrap()
    );
}

#[cfg(feature = "rayon")]
#[test]
fn test_parallel_batch_matches_sequential() {
    use algo::algorithm::par_stable_match_many;

    let mut rng = seeded_rng(2024);
    let instances: Vec<_> = (1..=24).map(|n| random_tables(&mut rng, n)).collect();

    let parallel = par_stable_match_many(&instances).unwrap();

    assert_eq!(parallel.len(), instances.len());
    for ((p, r), result) in instances.iter().zip(&parallel) {
        assert_eq!(&gale_shapley(p, r).unwrap(), result);
    }
}

// ============================================================================
// Validation
// ============================================================================

#[test]
fn test_mismatched_sizes_rejected() {
    let mut rng = seeded_rng(1);
    let err = stable_match(random_rows(&mut rng, 3), random_rows(&mut rng, 4)).unwrap_err();

    assert!(matches!(
        err,
        Error::InvalidPreferenceList {
            side: Side::Receiver,
            participant: None,
            ..
        }
    ));
}

#[test]
fn test_malformed_rows_rejected() {
    let good = vec![vec![1, 2, 3], vec![3, 2, 1], vec![2, 1, 3]];
    let cases: Vec<(Vec<Vec<usize>>, usize)> = vec![
        (vec![vec![1, 2, 3], vec![3, 3, 1], vec![2, 1, 3]], 2),
        (vec![vec![1, 2, 3], vec![3, 2, 1], vec![2, 1, 4]], 3),
        (vec![vec![0, 2, 3], vec![3, 2, 1], vec![2, 1, 3]], 1),
        (vec![vec![1, 2, 3], vec![3, 2], vec![2, 1, 3]], 2),
        (vec![vec![1, 2, 3, 1], vec![3, 2, 1], vec![2, 1, 3]], 1),
    ];

    for (rows, bad_participant) in cases {
        let err = stable_match(good.clone(), rows.clone()).unwrap_err();
        match err {
            Error::InvalidPreferenceList {
                side, participant, ..
            } => {
                assert_eq!(side, Side::Receiver, "{rows:?}");
                assert_eq!(participant, Some(bad_participant), "{rows:?}");
            }
            other => panic!("unexpected error for {rows:?}: {other}"),
        }
    }
}

#[test]
fn test_empty_sides_match_trivially() {
    let matches = stable_match(vec![], vec![]).unwrap();
    assert!(matches.is_empty());
}

#[test]
fn test_audit_rejects_mismatched_tables() {
    let mut rng = seeded_rng(3);
    let (proposers, _) = random_tables(&mut rng, 3);
    let (_, receivers) = random_tables(&mut rng, 2);

    let err = blocking_pairs(&proposers, &receivers, &[]).unwrap_err();
    assert!(matches!(
        err,
        Error::InvalidPreferenceList {
            side: Side::Receiver,
            participant: None,
            ..
        }
    ));
}

#[test]
fn test_audit_rejects_non_matching() {
    let mut rng = seeded_rng(4);
    let (proposers, receivers) = random_tables(&mut rng, 4);
    let result = gale_shapley(&proposers, &receivers).unwrap();

    let mut doubled = result.matches().to_vec();
    doubled.push(result.matches()[0]);

    assert!(matches!(
        is_stable(&proposers, &receivers, &doubled),
        Err(Error::InvalidMatching { .. })
    ));
}
