//! Maximum-sum contiguous subarray via Kadane's scan, floored at zero.
//!
//! The empty subarray is always a candidate, so the result is never negative:
//! an all-negative sequence yields 0 rather than its largest element. This
//! differs from the textbook variant that requires at least one element.
//!
//! # Algorithm Overview
//!
//! For each element `x`, in order:
//!
//! ```text
//! current = max(0, current + x)
//! best    = max(best, current)
//! ```
//!
//! # Complexity
//!
//! - Time: O(n)
//! - Space: O(1)

use std::ops::Range;

use crate::element::Element;

/// A maximum-sum subarray: its sum and its half-open index range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MaxSubarray<T> {
    /// Sum of `seq[start..end]`; zero for the empty subarray.
    pub sum: T,
    /// First index of the subarray.
    pub start: usize,
    /// One past the last index of the subarray.
    pub end: usize,
}

impl<T> MaxSubarray<T> {
    /// Index range of the subarray.
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// Number of elements in the subarray.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// True when the best subarray is the empty one.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Maximum sum over all contiguous, possibly empty, subarrays of `seq`.
///
/// Returns zero for empty and all-negative inputs.
///
/// # Panics
///
/// Sums use the element type's own addition. For integer types a running sum
/// that overflows panics in debug builds and wraps in release builds.
///
/// # Example
///
/// ```
/// use algo::algorithm::max_subarray_sum;
///
/// assert_eq!(max_subarray_sum(&[-2, 1, -3, 4, -1, 2, 1, -5, 4]), 6);
/// assert_eq!(max_subarray_sum(&[-3, -1, -2]), 0);
/// ```
pub fn max_subarray_sum<T: Element>(seq: &[T]) -> T {
    let mut current = T::zero();
    let mut best = T::zero();

    for &x in seq {
        current = (current + x).floor_at_zero();
        if current > best {
            best = current;
        }
    }

    best
}

/// Maximum-sum subarray of `seq` together with where it lies.
///
/// The range is the earliest-ending one achieving the sum, starting right
/// after the last position where the running sum fell to zero. When no
/// non-empty subarray has a positive sum the result is the empty range `0..0`.
///
/// # Panics
///
/// Overflows the same way as [`max_subarray_sum`].
pub fn max_subarray<T: Element>(seq: &[T]) -> MaxSubarray<T> {
    let mut best = MaxSubarray {
        sum: T::zero(),
        start: 0,
        end: 0,
    };
    let mut current = T::zero();
    let mut start = 0usize;

    for (i, &x) in seq.iter().enumerate() {
        let extended = current + x;
        if extended > T::zero() {
            current = extended;
        } else {
            current = T::zero();
            start = i + 1;
        }

        if current > best.sum {
            best = MaxSubarray {
                sum: current,
                start,
                end: i + 1,
            };
        }
    }

    best
}

/// Maximum subarray sum of many independent sequences, in parallel.
///
/// Results are in input order.
#[cfg(feature = "rayon")]
pub fn par_max_subarray_sums<T, S>(sequences: &[S]) -> Vec<T>
where
    T: Element,
    S: AsRef<[T]> + Sync,
{
    use rayon::prelude::*;

    sequences
        .par_iter()
        .map(|seq| max_subarray_sum(seq.as_ref()))
        .collect()
}
