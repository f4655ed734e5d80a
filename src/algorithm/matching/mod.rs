//! Two-sided stable matching.
//!
//! Pairs N proposers with N receivers from mutual rankings so that no
//! proposer and receiver would both rather be with each other.
//!
//! # Algorithms
//!
//! - **Gale-Shapley**: O(N²) proposer-optimal stable matching
//!
//! # Input
//!
//! Rankings are held in a [`PreferenceTable`], which validates that every row
//! is a permutation of `1..=N` before any matching starts.

pub mod gale_shapley;
pub mod preferences;
pub mod traits;
pub mod types;
pub mod verify;

#[cfg(feature = "rayon")]
pub use gale_shapley::par_stable_match_many;
pub use gale_shapley::{gale_shapley, stable_match};
pub use preferences::PreferenceTable;
pub use traits::StableMatching;
pub use types::{Match, MatchingResult};
pub use verify::{blocking_pairs, is_perfect, is_stable};

/// Proposer-optimal Gale-Shapley matcher.
#[derive(Debug, Clone, Copy, Default)]
pub struct GaleShapley;

impl StableMatching for GaleShapley {
    fn stable_match(
        &self,
        proposers: &PreferenceTable,
        receivers: &PreferenceTable,
    ) -> crate::error::Result<MatchingResult> {
        gale_shapley(proposers, receivers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trait_object_dispatch() {
        let matcher: &dyn StableMatching = &GaleShapley;
        let proposers = PreferenceTable::proposers(vec![vec![2, 1], vec![1, 2]]).unwrap();
        let receivers = PreferenceTable::receivers(vec![vec![1, 2], vec![2, 1]]).unwrap();

        let result = matcher.stable_match(&proposers, &receivers).unwrap();

        assert_eq!(result.matches(), &[Match::new(1, 2), Match::new(2, 1)]);
        assert!(is_stable(&proposers, &receivers, result.matches()).unwrap());
    }
}
