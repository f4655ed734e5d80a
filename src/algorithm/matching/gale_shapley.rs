//! Gale-Shapley algorithm for stable matching.
//!
//! Pairs N proposers with N receivers so that no proposer and receiver both
//! prefer each other over the partners they were assigned. The result is the
//! proposer-optimal stable matching: every proposer gets the best receiver it
//! can have in any stable matching.
//!
//! # Algorithm Overview
//!
//! While some proposer is unengaged:
//!
//! 1. Take the unengaged proposer with the lowest id.
//! 2. It proposes to the most preferred receiver it has not yet proposed to.
//! 3. An unengaged receiver accepts. An engaged receiver trades up only if it
//!    ranks the new proposer above its current partner, who becomes unengaged.
//!
//! # Complexity
//!
//! - Time: O(N²) proposals, each O(log N) for the unengaged set
//! - Space: O(N²) for the inverse rank tables, O(N) for engagement state
//!
//! # References
//!
//! Gale, D., & Shapley, L. S. (1962). "College admissions and the stability
//! of marriage." The American Mathematical Monthly, 69(1), 9-15.

use std::collections::BTreeSet;

use super::preferences::PreferenceTable;
use super::types::{Match, MatchingResult};
use crate::error::{Error, Result};

/// Compute the proposer-optimal stable matching.
///
/// Both tables are validated on construction; the only check left here is
/// that both sides have the same N. That check runs before any engagement
/// state is created.
///
/// # Arguments
///
/// * `proposers` - Ranking of receivers for each proposer
/// * `receivers` - Ranking of proposers for each receiver
///
/// # Returns
///
/// MatchingResult with one match per proposer, in proposer order.
pub fn gale_shapley(
    proposers: &PreferenceTable,
    receivers: &PreferenceTable,
) -> Result<MatchingResult> {
    let n = proposers.len();
    if receivers.len() != n {
        return Err(Error::invalid_table(
            receivers.side(),
            format!(
                "{} participants cannot be matched against {} on the {} side",
                receivers.len(),
                n,
                proposers.side()
            ),
        ));
    }

    log::debug!("gale_shapley: matching {} proposers", n);

    // next_choice[p] = position in p's ranking of the next receiver to propose to
    let mut next_choice = vec![0usize; n];
    let mut proposer_partner: Vec<Option<usize>> = vec![None; n];
    let mut receiver_partner: Vec<Option<usize>> = vec![None; n];

    // Ordered so the lowest unengaged id is always proposed for first
    let mut unengaged: BTreeSet<usize> = (0..n).collect();
    let mut proposals = 0usize;

    while let Some(p) = unengaged.pop_first() {
        // A valid table guarantees p is accepted somewhere before its ranking runs out
        let r = proposers.choice(p, next_choice[p]);
        next_choice[p] += 1;
        proposals += 1;

        match receiver_partner[r] {
            None => {
                log::trace!("proposer {} engaged to receiver {}", p + 1, r + 1);
                receiver_partner[r] = Some(p);
                proposer_partner[p] = Some(r);
            }
            Some(current) if receivers.prefers_index(r, p, current) => {
                log::trace!(
                    "receiver {} leaves proposer {} for proposer {}",
                    r + 1,
                    current + 1,
                    p + 1
                );
                receiver_partner[r] = Some(p);
                proposer_partner[p] = Some(r);
                proposer_partner[current] = None;
                unengaged.insert(current);
            }
            Some(_) => {
                log::trace!("receiver {} rejects proposer {}", r + 1, p + 1);
                unengaged.insert(p);
            }
        }
    }

    let matches: Vec<Match> = proposer_partner
        .iter()
        .enumerate()
        .filter_map(|(p, r)| r.map(|r| Match::new(p + 1, r + 1)))
        .collect();

    debug_assert_eq!(matches.len(), n, "every proposer must end engaged");
    log::debug!("gale_shapley: done after {} proposals", proposals);

    Ok(MatchingResult { matches, proposals })
}

/// Validate raw rankings and compute the stable matching.
///
/// Convenience wrapper around [`gale_shapley`] for callers holding plain
/// nested vectors of 1-based ids.
///
/// # Returns
///
/// One match per proposer, in proposer order.
pub fn stable_match(
    proposer_prefs: Vec<Vec<usize>>,
    receiver_prefs: Vec<Vec<usize>>,
) -> Result<Vec<Match>> {
    let proposers = PreferenceTable::proposers(proposer_prefs)?;
    let receivers = PreferenceTable::receivers(receiver_prefs)?;

    Ok(gale_shapley(&proposers, &receivers)?.into_matches())
}

/// Match many independent instances across the rayon thread pool.
///
/// Results are in input order and identical to calling [`gale_shapley`] on
/// each pair. The first failing instance's error is returned.
#[cfg(feature = "rayon")]
pub fn par_stable_match_many(
    instances: &[(PreferenceTable, PreferenceTable)],
) -> Result<Vec<MatchingResult>> {
    use rayon::prelude::*;

    instances
        .par_iter()
        .map(|(proposers, receivers)| gale_shapley(proposers, receivers))
        .collect()
}
