//! Algorithm contracts and implementations
//!
//! Each component is defined as a trait first, with the algorithm behind it
//! exposed as free functions:
//!
//! - [`StableMatching`] - Two-sided stable matching ([`GaleShapley`])
//! - [`SequenceAlgorithms`] - Longest increasing subsequence and maximum
//!   subarray, as methods on slices
//!
//! The two components share nothing beyond the crate's error and element
//! types. Both are pure: they borrow their input, allocate their own working
//! arrays, and return owned results.

pub mod matching;
pub mod sequence;

pub use matching::{
    GaleShapley, Match, MatchingResult, PreferenceTable, StableMatching, blocking_pairs,
    gale_shapley, is_perfect, is_stable, stable_match,
};

pub use sequence::{
    MaxSubarray, SequenceAlgorithms, longest_increasing_subsequence,
    longest_increasing_subsequence_indices, longest_increasing_subsequence_length, max_subarray,
    max_subarray_sum,
};

#[cfg(feature = "rayon")]
pub use matching::par_stable_match_many;

#[cfg(feature = "rayon")]
pub use sequence::{par_longest_increasing_subsequences, par_max_subarray_sums};
