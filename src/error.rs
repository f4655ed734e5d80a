//! Error types for algo

use std::fmt;

use thiserror::Error;

/// Result type alias using algo's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Which side of a two-sided matching a preference table belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// The side that makes proposals
    Proposer,
    /// The side that accepts or rejects proposals
    Receiver,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Proposer => f.write_str("proposer"),
            Side::Receiver => f.write_str("receiver"),
        }
    }
}

/// Errors that can occur in algo operations
#[derive(Error, Debug)]
pub enum Error {
    /// A preference table is not a set of permutations of `1..=N`, or the two
    /// sides of a matching disagree on N
    #[error("Invalid {side} preference list{}: {reason}", participant_suffix(.participant))]
    InvalidPreferenceList {
        /// Side the offending table belongs to
        side: Side,
        /// 1-based participant whose ranking is malformed, if the problem is row-local
        participant: Option<usize>,
        /// Reason for invalidity
        reason: String,
    },

    /// A list of matches pairs some participant twice or names an id outside `1..=N`
    #[error("Invalid matching: {reason}")]
    InvalidMatching {
        /// Reason for invalidity
        reason: String,
    },

    /// A token in preference-list text is not a participant id
    #[error("Parse error on line {line}: expected a participant id, got '{token}'")]
    Parse {
        /// 1-based line number
        line: usize,
        /// The offending token
        token: String,
    },

    /// Reading preference-list input failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

fn participant_suffix(participant: &Option<usize>) -> String {
    match participant {
        Some(p) => format!(" for participant {p}"),
        None => String::new(),
    }
}

impl Error {
    /// Create an error for a malformed ranking row
    pub fn invalid_ranking(side: Side, participant: usize, reason: impl Into<String>) -> Self {
        Self::InvalidPreferenceList {
            side,
            participant: Some(participant),
            reason: reason.into(),
        }
    }

    /// Create an error for a table-level problem (size, shape)
    pub fn invalid_table(side: Side, reason: impl Into<String>) -> Self {
        Self::InvalidPreferenceList {
            side,
            participant: None,
            reason: reason.into(),
        }
    }
}
