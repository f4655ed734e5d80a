//! Validated preference tables for two-sided matching.
//!
//! A table holds one ranking per participant. Each ranking is a permutation of
//! the ids `1..=N` of the other side, most preferred first. Tables are
//! validated on construction so the matching loop can index without checks.

use crate::error::{Error, Result, Side};

/// N rankings of N participants, each a permutation of `1..=N`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreferenceTable {
    side: Side,
    /// Rankings as given, 1-based ids, most preferred first.
    rows: Vec<Vec<usize>>,
    /// `ranks[p][q]` = position of 0-based id `q` in participant `p`'s ranking.
    ranks: Vec<Vec<usize>>,
}

impl PreferenceTable {
    /// Validate `rows` as the rankings of `side`.
    ///
    /// Fails with [`Error::InvalidPreferenceList`] if any row has the wrong
    /// length, contains an id outside `1..=N`, or repeats an id.
    pub fn new(side: Side, rows: Vec<Vec<usize>>) -> Result<Self> {
        let n = rows.len();
        let mut ranks = Vec::with_capacity(n);

        for (p, row) in rows.iter().enumerate() {
            if row.len() != n {
                return Err(Error::invalid_ranking(
                    side,
                    p + 1,
                    format!("expected {} ids, got {}", n, row.len()),
                ));
            }

            let mut rank = vec![usize::MAX; n];
            for (position, &id) in row.iter().enumerate() {
                if id == 0 || id > n {
                    return Err(Error::invalid_ranking(
                        side,
                        p + 1,
                        format!("id {} out of range 1..={}", id, n),
                    ));
                }
                if rank[id - 1] != usize::MAX {
                    return Err(Error::invalid_ranking(
                        side,
                        p + 1,
                        format!("duplicate id {}", id),
                    ));
                }
                rank[id - 1] = position;
            }
            ranks.push(rank);
        }

        Ok(Self { side, rows, ranks })
    }

    /// Validate proposer-side rankings.
    pub fn proposers(rows: Vec<Vec<usize>>) -> Result<Self> {
        Self::new(Side::Proposer, rows)
    }

    /// Validate receiver-side rankings.
    pub fn receivers(rows: Vec<Vec<usize>>) -> Result<Self> {
        Self::new(Side::Receiver, rows)
    }

    /// Side this table was validated as.
    pub fn side(&self) -> Side {
        self.side
    }

    /// Number of participants (N).
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// True when the table has no participants.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Ranking of 1-based `participant`, most preferred first.
    ///
    /// # Panics
    ///
    /// Panics if `participant` is not in `1..=N`.
    pub fn ranking(&self, participant: usize) -> &[usize] {
        &self.rows[participant - 1]
    }

    /// Position of `id` in `participant`'s ranking; 0 is most preferred.
    ///
    /// # Panics
    ///
    /// Panics if either id is not in `1..=N`.
    pub fn rank_of(&self, participant: usize, id: usize) -> usize {
        self.ranks[participant - 1][id - 1]
    }

    /// True if `participant` strictly prefers `a` over `b`.
    ///
    /// # Panics
    ///
    /// Panics if any id is not in `1..=N`.
    pub fn prefers(&self, participant: usize, a: usize, b: usize) -> bool {
        self.rank_of(participant, a) < self.rank_of(participant, b)
    }

    /// All rankings, 1-based.
    pub fn rows(&self) -> &[Vec<usize>] {
        &self.rows
    }

    /// Consume the table, returning the rankings as given.
    pub fn into_rows(self) -> Vec<Vec<usize>> {
        self.rows
    }

    /// 0-based id at `position` in 0-based `participant`'s ranking.
    #[inline]
    pub(crate) fn choice(&self, participant: usize, position: usize) -> usize {
        self.rows[participant][position] - 1
    }

    /// 0-based variant of [`prefers`](Self::prefers).
    #[inline]
    pub(crate) fn prefers_index(&self, participant: usize, a: usize, b: usize) -> bool {
        let rank = &self.ranks[participant];
        rank[a] < rank[b]
    }
}
