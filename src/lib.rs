//! # algo
//!
//! **Classical algorithms with validated inputs and typed errors.**
//!
//! algo provides two independent components:
//!
//! - **Stable matching**: Gale-Shapley proposer-optimal matching between two
//!   equal-size sets with mutual rankings
//! - **Sequence analysis**: longest strictly increasing subsequence (patience
//!   sorting) and maximum contiguous subarray sum (Kadane, floored at zero)
//!
//! ## Quick Start
//!
//! ```rust
//! use algo::prelude::*;
//!
//! let proposers = PreferenceTable::proposers(vec![
//!     vec![4, 1, 2, 3],
//!     vec![2, 3, 1, 4],
//!     vec![2, 4, 3, 1],
//!     vec![3, 1, 4, 2],
//! ])?;
//! let receivers = PreferenceTable::receivers(vec![
//!     vec![4, 1, 3, 2],
//!     vec![1, 3, 2, 4],
//!     vec![1, 2, 3, 4],
//!     vec![4, 1, 3, 2],
//! ])?;
//!
//! let result = gale_shapley(&proposers, &receivers)?;
//! assert_eq!(result.receiver_of(1), Some(4));
//!
//! let seq = [1, 2, 3, 4, 5, 6, 5, 1, 2, 3, 4, 5, 6, 7, 8, 1];
//! assert_eq!(seq.longest_increasing_subsequence().len(), 8);
//! assert_eq!([-5, 5, 5, 5, -5].max_subarray_sum(), 15);
//! # Ok::<(), algo::error::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `rayon` (default): parallel batch entry points over independent inputs

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_inception)]

pub mod algorithm;
pub mod element;
pub mod error;
pub mod io;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::algorithm::{
        GaleShapley, Match, MatchingResult, MaxSubarray, PreferenceTable, SequenceAlgorithms,
        StableMatching, gale_shapley, longest_increasing_subsequence, max_subarray,
        max_subarray_sum, stable_match,
    };
    pub use crate::element::Element;
    pub use crate::error::{Error, Result, Side};
}
