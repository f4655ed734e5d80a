//! Longest strictly increasing subsequence via patience sorting.
//!
//! # Algorithm Overview
//!
//! Scan the sequence once, maintaining `tails[k]`: the index of the smallest
//! value that ends any increasing subsequence of length `k + 1` seen so far.
//! Tail values are strictly increasing in `k`, so the slot for each new
//! element is found by binary search:
//!
//! 1. `len` = number of lengths whose tail value is `< seq[i]`.
//! 2. `seq[i]` extends the best chain of length `len`, so its predecessor is
//!    `tails[len - 1]`.
//! 3. `seq[i]` becomes the new tail for length `len + 1`, appending when it
//!    extends the longest chain.
//!
//! The answer is recovered by walking `predecessor` back from the last tail.
//!
//! # Complexity
//!
//! - Time: O(n log n)
//! - Space: O(n) for `tails` and `predecessor`

use crate::element::Element;

/// Indices of a longest strictly increasing subsequence of `seq`.
///
/// Equal values do not extend a chain. Among subsequences of maximal length,
/// the one returned ends at the latest possible tail and prefers later, smaller
/// elements at each step.
///
/// Incomparable values (NaN) are outside the contract: the result is still a
/// subsequence but need not be increasing.
pub fn longest_increasing_subsequence_indices<T: Element>(seq: &[T]) -> Vec<usize> {
    if seq.is_empty() {
        return Vec::new();
    }

    let mut tails: Vec<usize> = Vec::new();
    let mut predecessor: Vec<Option<usize>> = vec![None; seq.len()];

    for (i, &value) in seq.iter().enumerate() {
        let len = tails.partition_point(|&t| seq[t] < value);

        predecessor[i] = len.checked_sub(1).map(|k| tails[k]);
        if len == tails.len() {
            tails.push(i);
        } else {
            tails[len] = i;
        }
    }

    let mut indices = Vec::with_capacity(tails.len());
    let mut cursor = tails.last().copied();
    while let Some(i) = cursor {
        indices.push(i);
        cursor = predecessor[i];
    }
    indices.reverse();

    indices
}

/// A longest strictly increasing subsequence of `seq`.
///
/// Empty input gives an empty result; a single element gives that element.
///
/// # Example
///
/// ```
/// use algo::algorithm::longest_increasing_subsequence;
///
/// let lis = longest_increasing_subsequence(&[3, 1, 4, 1, 5, 9, 2, 6]);
/// assert_eq!(lis, vec![1, 4, 5, 6]);
/// ```
pub fn longest_increasing_subsequence<T: Element>(seq: &[T]) -> Vec<T> {
    longest_increasing_subsequence_indices(seq)
        .into_iter()
        .map(|i| seq[i])
        .collect()
}

/// Length of a longest strictly increasing subsequence, without reconstruction.
pub fn longest_increasing_subsequence_length<T: Element>(seq: &[T]) -> usize {
    // Tail values only; no predecessor bookkeeping
    let mut tails: Vec<T> = Vec::new();

    for &value in seq {
        let len = tails.partition_point(|&t| t < value);
        if len == tails.len() {
            tails.push(value);
        } else {
            tails[len] = value;
        }
    }

    tails.len()
}

/// Longest increasing subsequence of many independent sequences, in parallel.
///
/// Results are in input order.
#[cfg(feature = "rayon")]
pub fn par_longest_increasing_subsequences<T, S>(sequences: &[S]) -> Vec<Vec<T>>
where
    T: Element,
    S: AsRef<[T]> + Sync,
{
    use rayon::prelude::*;

    sequences
        .par_iter()
        .map(|seq| longest_increasing_subsequence(seq.as_ref()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lis_empty() {
        let empty: [i32; 0] = [];
        assert!(longest_increasing_subsequence(&empty).is_empty());
        assert!(longest_increasing_subsequence_indices(&empty).is_empty());
        assert_eq!(longest_increasing_subsequence_length(&empty), 0);
    }

    #[test]
    fn test_lis_single() {
        assert_eq!(longest_increasing_subsequence(&[42]), vec![42]);
        assert_eq!(longest_increasing_subsequence_indices(&[42]), vec![0]);
    }

    #[test]
    fn test_lis_two_runs() {
        let seq = [1, 2, 3, 4, 5, 6, 5, 1, 2, 3, 4, 5, 6, 7, 8, 1];

        assert_eq!(
            longest_increasing_subsequence(&seq),
            vec![1, 2, 3, 4, 5, 6, 7, 8]
        );
        // The second run wins: it is the only one reaching 7 and 8
        assert_eq!(
            longest_increasing_subsequence_indices(&seq),
            vec![7, 8, 9, 10, 11, 12, 13, 14]
        );
        assert_eq!(longest_increasing_subsequence_length(&seq), 8);
    }

    #[test]
    fn test_lis_equal_values_break_chain() {
        assert_eq!(longest_increasing_subsequence(&[2, 2, 2, 2]), vec![2]);
        assert_eq!(longest_increasing_subsequence(&[1, 2, 2, 3]), vec![1, 2, 3]);
    }

    #[test]
    fn test_lis_decreasing() {
        let lis = longest_increasing_subsequence(&[5, 4, 3, 2, 1]);
        assert_eq!(lis, vec![1]);
    }

    #[test]
    fn test_lis_interleaved() {
        let seq = [0, 8, 4, 12, 2, 10, 6, 14, 1, 9, 5, 13, 3, 11, 7, 15];
        let lis = longest_increasing_subsequence(&seq);

        assert_eq!(lis.len(), 6);
        assert!(lis.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(longest_increasing_subsequence_length(&seq), 6);
    }

    #[test]
    fn test_lis_floats_exact() {
        let seq = [0.5f64, 0.25, 0.75, 0.75, 1.0, -3.0];
        assert_eq!(longest_increasing_subsequence(&seq), vec![0.25, 0.75, 1.0]);
    }

    #[test]
    fn test_lis_nan_does_not_panic() {
        let seq = [1.0f64, f64::NAN, 2.0, f64::NAN, 3.0];
        let indices = longest_increasing_subsequence_indices(&seq);

        assert!(!indices.is_empty());
        assert!(indices.windows(2).all(|w| w[0] < w[1]));
    }

    #[cfg(feature = "rayon")]
    #[test]
    fn test_par_lis() {
        let sequences = vec![vec![3, 1, 2], vec![], vec![9, 8, 10]];
        let results = par_longest_increasing_subsequences(&sequences);

        assert_eq!(results, vec![vec![1, 2], vec![], vec![8, 10]]);
    }
}
