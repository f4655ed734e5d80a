//! Common test utilities
#![allow(dead_code)]

use algo::algorithm::PreferenceTable;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Seeded RNG so failures reproduce
pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// N random permutations of `1..=n`
pub fn random_rows(rng: &mut StdRng, n: usize) -> Vec<Vec<usize>> {
    (0..n)
        .map(|_| {
            let mut row: Vec<usize> = (1..=n).collect();
            row.shuffle(rng);
            row
        })
        .collect()
}

/// Random proposer and receiver tables of size `n`
pub fn random_tables(rng: &mut StdRng, n: usize) -> (PreferenceTable, PreferenceTable) {
    let proposers = PreferenceTable::proposers(random_rows(rng, n)).unwrap();
    let receivers = PreferenceTable::receivers(random_rows(rng, n)).unwrap();
    (proposers, receivers)
}

/// Random integer sequence with values in `lo..hi`
pub fn random_sequence(rng: &mut StdRng, len: usize, lo: i64, hi: i64) -> Vec<i64> {
    (0..len).map(|_| rng.random_range(lo..hi)).collect()
}

/// O(n²) reference: length of the longest strictly increasing subsequence
pub fn lis_length_quadratic(seq: &[i64]) -> usize {
    let mut best_ending_at = vec![1usize; seq.len()];
    for i in 0..seq.len() {
        for j in 0..i {
            if seq[j] < seq[i] && best_ending_at[j] + 1 > best_ending_at[i] {
                best_ending_at[i] = best_ending_at[j] + 1;
            }
        }
    }
    best_ending_at.into_iter().max().unwrap_or(0)
}

/// O(n²) reference: maximum sum over all contiguous, possibly empty, subarrays
pub fn max_subarray_brute_force(seq: &[i64]) -> i64 {
    let mut best = 0i64;
    for start in 0..seq.len() {
        let mut sum = 0i64;
        for &x in &seq[start..] {
            sum += x;
            best = best.max(sum);
        }
    }
    best
}

/// Assert `sub` is a subsequence of `seq` taken at strictly increasing `indices`
pub fn assert_subsequence_at(seq: &[i64], indices: &[usize], sub: &[i64], msg: &str) {
    assert_eq!(indices.len(), sub.len(), "{}: length mismatch", msg);
    assert!(
        indices.windows(2).all(|w| w[0] < w[1]),
        "{}: indices not increasing: {:?}",
        msg,
        indices
    );
    for (&i, &v) in indices.iter().zip(sub) {
        assert_eq!(seq[i], v, "{}: element at index {} differs", msg, i);
    }
}

/// Path to a file under tests/data
pub fn data_path(name: &str) -> std::path::PathBuf {
    std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("data")
        .join(name)
}
