//! Slice extension trait for sequence algorithms.

use super::lis::{
    longest_increasing_subsequence, longest_increasing_subsequence_indices,
    longest_increasing_subsequence_length,
};
use super::max_subarray::{MaxSubarray, max_subarray, max_subarray_sum};
use crate::element::Element;

/// Sequence algorithms available as methods on slices.
///
/// Every method is a pure function of the slice; repeated calls on the same
/// data return the same result.
///
/// ```
/// use algo::prelude::*;
///
/// let data = [-1, 3, -2, 5, 4];
/// assert_eq!(data.longest_increasing_subsequence(), vec![-1, 3, 4]);
/// assert_eq!(data.max_subarray_sum(), 10);
/// ```
pub trait SequenceAlgorithms<T: Element> {
    /// A longest strictly increasing subsequence.
    fn longest_increasing_subsequence(&self) -> Vec<T>;

    /// Indices of a longest strictly increasing subsequence.
    fn longest_increasing_subsequence_indices(&self) -> Vec<usize>;

    /// Length of a longest strictly increasing subsequence.
    fn longest_increasing_subsequence_length(&self) -> usize;

    /// Maximum sum over contiguous, possibly empty, subarrays.
    fn max_subarray_sum(&self) -> T;

    /// Maximum-sum subarray with its index range.
    fn max_subarray(&self) -> MaxSubarray<T>;
}

impl<T: Element> SequenceAlgorithms<T> for [T] {
    fn longest_increasing_subsequence(&self) -> Vec<T> {
        longest_increasing_subsequence(self)
    }

    fn longest_increasing_subsequence_indices(&self) -> Vec<usize> {
        longest_increasing_subsequence_indices(self)
    }

    fn longest_increasing_subsequence_length(&self) -> usize {
        longest_increasing_subsequence_length(self)
    }

    fn max_subarray_sum(&self) -> T {
        max_subarray_sum(self)
    }

    fn max_subarray(&self) -> MaxSubarray<T> {
        max_subarray(self)
    }
}
