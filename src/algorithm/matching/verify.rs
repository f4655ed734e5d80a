//! Checks for matching stability and perfection.
//!
//! These operate on any list of matches, not only ones produced by
//! [`gale_shapley`](super::gale_shapley), so hand-built or externally computed
//! matchings can be audited against the same preference tables.

use super::preferences::PreferenceTable;
use super::types::Match;
use crate::error::{Error, Result};

/// Find every blocking pair of `matches`.
///
/// A blocking pair is a proposer and receiver, not matched to each other, who
/// both strictly prefer each other over their assigned partners. An unmatched
/// participant prefers anyone over being alone, so partial matchings are
/// accepted.
///
/// # Errors
///
/// - [`Error::InvalidPreferenceList`] if the two tables differ in size
/// - [`Error::InvalidMatching`] if a match names an id outside `1..=N`, or a
///   proposer or receiver appears in more than one match
///
/// # Returns
///
/// The blocking pairs in (proposer, receiver) order; empty iff the matching is stable.
pub fn blocking_pairs(
    proposers: &PreferenceTable,
    receivers: &PreferenceTable,
    matches: &[Match],
) -> Result<Vec<Match>> {
    let n = proposers.len();
    if receivers.len() != n {
        return Err(Error::invalid_table(
            receivers.side(),
            format!(
                "{} participants cannot be checked against {} on the {} side",
                receivers.len(),
                n,
                proposers.side()
            ),
        ));
    }

    let mut proposer_partner: Vec<Option<usize>> = vec![None; n];
    let mut receiver_partner: Vec<Option<usize>> = vec![None; n];

    for m in matches {
        if !(1..=n).contains(&m.proposer) || !(1..=n).contains(&m.receiver) {
            return Err(Error::InvalidMatching {
                reason: format!("pair ({}) out of range 1..={}", m, n),
            });
        }
        if proposer_partner[m.proposer - 1].is_some() {
            return Err(Error::InvalidMatching {
                reason: format!("proposer {} matched more than once", m.proposer),
            });
        }
        if receiver_partner[m.receiver - 1].is_some() {
            return Err(Error::InvalidMatching {
                reason: format!("receiver {} matched more than once", m.receiver),
            });
        }
        proposer_partner[m.proposer - 1] = Some(m.receiver - 1);
        receiver_partner[m.receiver - 1] = Some(m.proposer - 1);
    }

    let mut blocking = Vec::new();
    for p in 0..n {
        for position in 0..n {
            let r = proposers.choice(p, position);
            // Everything past p's own partner is worse for p
            if proposer_partner[p] == Some(r) {
                break;
            }
            let r_prefers_p = match receiver_partner[r] {
                None => true,
                Some(current) => receivers.prefers_index(r, p, current),
            };
            if r_prefers_p {
                blocking.push(Match::new(p + 1, r + 1));
            }
        }
    }

    Ok(blocking)
}

/// True if `matches` is stable with respect to both tables.
///
/// Fails under the same conditions as [`blocking_pairs`].
pub fn is_stable(
    proposers: &PreferenceTable,
    receivers: &PreferenceTable,
    matches: &[Match],
) -> Result<bool> {
    Ok(blocking_pairs(proposers, receivers, matches)?.is_empty())
}

/// True if `matches` pairs every id `1..=n` on each side exactly once.
pub fn is_perfect(n: usize, matches: &[Match]) -> bool {
    if matches.len() != n {
        return false;
    }

    let mut seen_proposer = vec![false; n];
    let mut seen_receiver = vec![false; n];

    for m in matches {
        if !(1..=n).contains(&m.proposer) || !(1..=n).contains(&m.receiver) {
            return false;
        }
        if seen_proposer[m.proposer - 1] || seen_receiver[m.receiver - 1] {
            return false;
        }
        seen_proposer[m.proposer - 1] = true;
        seen_receiver[m.receiver - 1] = true;
    }

    true
}
