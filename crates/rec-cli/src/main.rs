//! rec - Rating prediction evaluation CLI
//!
//! Usage:
//!   rec eval ratings.csv                    # Evaluate 10 sampled items
//!   rec eval ratings.csv --items 25         # Larger sample
//!   rec eval ratings.csv --seed 42 --json   # Reproducible, machine-readable
//!   rec stats ratings.csv                   # Dataset summary
//!   rec stats ratings.csv --min-raters 20   # Candidate pool at a threshold

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

mod commands;
mod error;
mod output;

use commands::{eval, stats};

/// rec - Rating prediction evaluation tool
///
/// Loads a ratings CSV, withholds sampled items one at a time, and measures
/// how well the remaining items predict the withheld scores.
#[derive(Parser)]
#[command(name = "rec")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Quiet mode (aggregates only)
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Sample popular items and evaluate prediction error against them
    Eval {
        /// Path to the ratings CSV file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Number of items to sample (with replacement)
        #[arg(long, default_value = "10")]
        items: usize,

        /// Keep only items with more than this many raters
        #[arg(long, default_value = "10")]
        min_raters: usize,

        /// Seed for reproducible sampling
        #[arg(long)]
        seed: Option<u64>,

        /// Name of the user id column
        #[arg(long, default_value = "UserId")]
        user_column: String,

        /// Name of the item id column
        #[arg(long, default_value = "ProductId")]
        item_column: String,

        /// Name of the score column
        #[arg(long, default_value = "Score")]
        score_column: String,
    },

    /// Summarize a ratings dataset
    Stats {
        /// Path to the ratings CSV file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Popularity threshold to report the candidate pool for
        #[arg(long, default_value = "10")]
        min_raters: usize,

        /// How many of the most-rated items to list
        #[arg(long, default_value = "10")]
        top: usize,

        /// Name of the user id column
        #[arg(long, default_value = "UserId")]
        user_column: String,

        /// Name of the item id column
        #[arg(long, default_value = "ProductId")]
        item_column: String,

        /// Name of the score column
        #[arg(long, default_value = "Score")]
        score_column: String,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Eval {
            file,
            items,
            min_raters,
            seed,
            user_column,
            item_column,
            score_column,
        } => eval::run(&eval::EvalArgs {
            file,
            items,
            min_raters,
            seed,
            user_column,
            item_column,
            score_column,
            json: cli.json,
            verbose: cli.verbose,
            quiet: cli.quiet,
        }),

        Commands::Stats {
            file,
            min_raters,
            top,
            user_column,
            item_column,
            score_column,
        } => stats::run(&stats::StatsArgs {
            file,
            min_raters,
            top,
            user_column,
            item_column,
            score_column,
            json: cli.json,
        }),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            e.exit_code()
        }
    }
}
