//! Traits for stable matching algorithms.

use super::preferences::PreferenceTable;
use super::types::MatchingResult;
use crate::error::Result;

/// Trait for two-sided stable matching algorithms.
///
/// Implementations pair every proposer with exactly one receiver such that no
/// proposer and receiver both prefer each other over their assigned partners.
pub trait StableMatching {
    /// Compute a stable, perfect matching.
    ///
    /// # Arguments
    ///
    /// * `proposers` - Ranking of receivers for each proposer
    /// * `receivers` - Ranking of proposers for each receiver
    ///
    /// # Returns
    ///
    /// One match per proposer, in proposer order. Fails with
    /// [`Error::InvalidPreferenceList`](crate::error::Error::InvalidPreferenceList)
    /// if the two sides differ in size.
    fn stable_match(
        &self,
        proposers: &PreferenceTable,
        receivers: &PreferenceTable,
    ) -> Result<MatchingResult>;
}
