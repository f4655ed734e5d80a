//! Stable Matching
//!
//! Reads proposer and receiver preference files and prints the
//! proposer-optimal stable matching, one `proposer receiver` pair per line.
//! Without arguments it runs on a built-in 4×4 instance.
//!
//! Run with:
//! ```sh
//! cargo run --example stable_match
//! cargo run --example stable_match -- --proposers men.txt --receivers women.txt
//! RUST_LOG=trace cargo run --example stable_match
//! ```

use std::io;
use std::path::PathBuf;

use algo::algorithm::matching::{GaleShapley, PreferenceTable, StableMatching, is_stable};
use algo::error::Side;
use algo::io::{read_preferences_file, write_matches};
use anyhow::{Context, Result};
use clap::Parser;

#[derive(Parser)]
#[command(
    name = "stable_match",
    about = "Gale-Shapley stable matching over preference files",
    version
)]
struct Cli {
    /// Proposer rankings: one line per proposer, whitespace-separated ids
    #[arg(long, requires = "receivers")]
    proposers: Option<PathBuf>,

    /// Receiver rankings: one line per receiver, whitespace-separated ids
    #[arg(long, requires = "proposers")]
    receivers: Option<PathBuf>,

    /// Print the number of proposals made
    #[arg(long)]
    stats: bool,
}

fn sample_tables() -> Result<(PreferenceTable, PreferenceTable)> {
    let proposers = PreferenceTable::proposers(vec![
        vec![4, 1, 2, 3],
        vec![2, 3, 1, 4],
        vec![2, 4, 3, 1],
        vec![3, 1, 4, 2],
    ])?;
    let receivers = PreferenceTable::receivers(vec![
        vec![4, 1, 3, 2],
        vec![1, 3, 2, 4],
        vec![1, 2, 3, 4],
        vec![4, 1, 3, 2],
    ])?;
    Ok((proposers, receivers))
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let (proposers, receivers) = match (&cli.proposers, &cli.receivers) {
        (Some(p), Some(r)) => (
            read_preferences_file(Side::Proposer, p)
                .with_context(|| format!("Failed to load proposers from {}", p.display()))?,
            read_preferences_file(Side::Receiver, r)
                .with_context(|| format!("Failed to load receivers from {}", r.display()))?,
        ),
        _ => sample_tables()?,
    };

    let result = GaleShapley
        .stable_match(&proposers, &receivers)
        .context("Failed to compute matching")?;
    if !is_stable(&proposers, &receivers, result.matches())? {
        anyhow::bail!("Computed matching is not stable");
    }

    write_matches(io::stdout().lock(), result.matches())?;
    if cli.stats {
        eprintln!(
            "{} pairs after {} proposals",
            result.len(),
            result.proposals()
        );
    }

    Ok(())
}
