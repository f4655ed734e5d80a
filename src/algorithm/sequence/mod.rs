//! Array algorithms over ordered sequences.
//!
//! # Algorithms
//!
//! - **Patience sorting**: O(n log n) longest strictly increasing subsequence
//! - **Kadane**: O(n) maximum-sum contiguous subarray, floored at zero
//!
//! All routines are generic over [`Element`](crate::element::Element) and
//! take a borrowed slice; working arrays live only for the duration of a call.

pub mod lis;
pub mod max_subarray;
pub mod traits;

#[cfg(feature = "rayon")]
pub use lis::par_longest_increasing_subsequences;
pub use lis::{
    longest_increasing_subsequence, longest_increasing_subsequence_indices,
    longest_increasing_subsequence_length,
};
#[cfg(feature = "rayon")]
pub use max_subarray::par_max_subarray_sums;
pub use max_subarray::{MaxSubarray, max_subarray, max_subarray_sum};
pub use traits::SequenceAlgorithms;
