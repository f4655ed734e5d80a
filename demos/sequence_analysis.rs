//! Sequence Analysis
//!
//! Runs the longest increasing subsequence and maximum subarray routines on
//! the integers given on the command line, or on a few built-in samples.
//!
//! Run with:
//! ```sh
//! cargo run --example sequence_analysis
//! cargo run --example sequence_analysis -- 3 -1 4 -1 5 -9 2 6
//! ```

use algo::algorithm::SequenceAlgorithms;
use anyhow::Result;
use clap::Parser;

#[derive(Parser)]
#[command(
    name = "sequence_analysis",
    about = "Longest increasing subsequence and maximum subarray sum",
    version
)]
struct Cli {
    /// Sequence to analyze; built-in samples are used when empty
    #[arg(allow_negative_numbers = true)]
    values: Vec<i64>,
}

fn report(label: &str, seq: &[i64]) {
    let lis = seq.longest_increasing_subsequence();
    let best = seq.max_subarray();

    println!("{label}: {seq:?}");
    println!("  longest increasing ({}): {:?}", lis.len(), lis);
    println!(
        "  max subarray sum: {} over {:?} = {:?}",
        best.sum,
        best.range(),
        &seq[best.range()]
    );
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    if !cli.values.is_empty() {
        report("input", &cli.values);
        return Ok(());
    }

    report("two runs", &[1, 2, 3, 4, 5, 6, 5, 1, 2, 3, 4, 5, 6, 7, 8, 1]);
    report("plateaus", &[-5, 5, 5, 5, -5, -5, -5, 5, 5, 5, 5, -5]);
    // The empty subarray wins when every element is negative
    report("all negative", &[-3, -1, -4]);
    report("empty", &[]);

    Ok(())
}
