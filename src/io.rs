//! Text format for preference lists and matchings.
//!
//! A preference file holds one participant's ranking per line as
//! whitespace-separated 1-based ids, most preferred first. Blank lines and
//! lines starting with `#` are skipped.
//!
//! ```text
//! # proposers
//! 4 1 2 3
//! 2 3 1 4
//! 2 4 3 1
//! 3 1 4 2
//! ```
//!
//! Matchings are written one `proposer receiver` pair per line.

use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

use crate::algorithm::matching::{Match, PreferenceTable};
use crate::error::{Error, Result, Side};

/// Parse preference-list text into a validated table for `side`.
pub fn parse_preferences(side: Side, text: &str) -> Result<PreferenceTable> {
    let mut rows = Vec::new();
    for (index, line) in text.lines().enumerate() {
        if let Some(row) = parse_line(index + 1, line)? {
            rows.push(row);
        }
    }

    PreferenceTable::new(side, rows)
}

/// Read preference-list text from `reader` into a validated table for `side`.
pub fn read_preferences<R: BufRead>(side: Side, reader: R) -> Result<PreferenceTable> {
    let mut rows = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        if let Some(row) = parse_line(index + 1, &line)? {
            rows.push(row);
        }
    }

    log::debug!("read {} {} rankings", rows.len(), side);
    PreferenceTable::new(side, rows)
}

/// Read a preference file into a validated table for `side`.
pub fn read_preferences_file<P: AsRef<Path>>(side: Side, path: P) -> Result<PreferenceTable> {
    let path = path.as_ref();
    log::debug!("reading {} preferences from {}", side, path.display());

    let file = File::open(path)?;
    read_preferences(side, BufReader::new(file))
}

/// Write `matches` one `proposer receiver` pair per line.
pub fn write_matches<W: Write>(mut writer: W, matches: &[Match]) -> Result<()> {
    for m in matches {
        writeln!(writer, "{}", m)?;
    }
    writer.flush()?;
    Ok(())
}

/// Parse one line; `None` for blank and comment lines.
fn parse_line(line_number: usize, line: &str) -> Result<Option<Vec<usize>>> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(None);
    }

    trimmed
        .split_whitespace()
        .map(|token| {
            token.parse::<usize>().map_err(|_| Error::Parse {
                line: line_number,
                token: token.to_string(),
            })
        })
        .collect::<Result<Vec<_>>>()
        .map(Some)
}
