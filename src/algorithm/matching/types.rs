//! Result types for stable matching.

use std::fmt;

/// A proposer paired with a receiver. Both ids are 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Match {
    /// 1-based proposer id
    pub proposer: usize,
    /// 1-based receiver id
    pub receiver: usize,
}

impl Match {
    /// Pair `proposer` with `receiver` (both 1-based).
    pub const fn new(proposer: usize, receiver: usize) -> Self {
        Self { proposer, receiver }
    }
}

impl From<(usize, usize)> for Match {
    fn from((proposer, receiver): (usize, usize)) -> Self {
        Self::new(proposer, receiver)
    }
}

/// Same text form as the preference files: `proposer receiver`.
impl fmt::Display for Match {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.proposer, self.receiver)
    }
}

/// Result of a stable matching computation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchingResult {
    /// One match per proposer, ordered by proposer id.
    pub(crate) matches: Vec<Match>,
    /// Number of proposals made before every proposer was engaged (at most N²).
    pub(crate) proposals: usize,
}

impl MatchingResult {
    /// Matches ordered by proposer id.
    pub fn matches(&self) -> &[Match] {
        &self.matches
    }

    /// Number of proposals made before termination.
    pub fn proposals(&self) -> usize {
        self.proposals
    }

    /// Number of matched pairs (N).
    pub fn len(&self) -> usize {
        self.matches.len()
    }

    /// True for the matching of two empty sides.
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    /// Receiver assigned to 1-based `proposer`, or `None` if out of range.
    pub fn receiver_of(&self, proposer: usize) -> Option<usize> {
        proposer
            .checked_sub(1)
            .and_then(|i| self.matches.get(i))
            .map(|m| m.receiver)
    }

    /// Proposer assigned to 1-based `receiver`, or `None` if out of range.
    pub fn proposer_of(&self, receiver: usize) -> Option<usize> {
        self.matches
            .iter()
            .find(|m| m.receiver == receiver)
            .map(|m| m.proposer)
    }

    /// Iterate over matches in proposer order.
    pub fn iter(&self) -> std::slice::Iter<'_, Match> {
        self.matches.iter()
    }

    /// Consume the result, keeping only the matches.
    pub fn into_matches(self) -> Vec<Match> {
        self.matches
    }
}

impl<'a> IntoIterator for &'a MatchingResult {
    type Item = &'a Match;
    type IntoIter = std::slice::Iter<'a, Match>;

    fn into_iter(self) -> Self::IntoIter {
        self.matches.iter()
    }
}
