//! Eval command implementation
//!
//! Loads a ratings CSV, draws a popularity-filtered sample, runs the
//! leave-one-item-out pass, and reports per-item and aggregate error.

use crate::commands::validate_path;
use crate::error::Result;
use crate::output;
use colored::Colorize;
use recomendar::data::CsvLoader;
use recomendar::eval::{evaluate, EvaluationReport};
use recomendar::ratings::RatingStore;
use recomendar::sample::PopularitySampler;
use std::path::PathBuf;

/// Everything the eval subcommand needs, flags included.
pub(crate) struct EvalArgs {
    pub file: PathBuf,
    pub items: usize,
    pub min_raters: usize,
    pub seed: Option<u64>,
    pub user_column: String,
    pub item_column: String,
    pub score_column: String,
    pub json: bool,
    pub verbose: bool,
    pub quiet: bool,
}

/// Run the eval command
pub(crate) fn run(args: &EvalArgs) -> Result<()> {
    validate_path(&args.file)?;

    let loader = CsvLoader::new()
        .with_user_column(&args.user_column)
        .with_item_column(&args.item_column)
        .with_score_column(&args.score_column);
    let records = loader.load(&args.file)?;
    let mut store = RatingStore::from_records(records);

    if !args.quiet && !args.json {
        output::info(&format!(
            "loaded {} ratings ({} items, {} users) from {}",
            store.n_ratings(),
            store.n_items(),
            store.n_users(),
            args.file.display()
        ));
    }

    let mut sampler = PopularitySampler::new(args.min_raters);
    if let Some(seed) = args.seed {
        sampler = sampler.with_random_state(seed);
    }
    let sample = sampler.sample(&store, args.items)?;

    let report = evaluate(&mut store, &sample)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    if args.quiet {
        println!("rmse {:.6}", report.rmse);
        println!("mae {:.6}", report.mae);
        return Ok(());
    }

    print_report(&report, args.verbose);
    Ok(())
}

fn print_report(report: &EvaluationReport, verbose: bool) {
    output::section("Sampled Items");
    for item in &report.items {
        match (item.rmse, item.mae) {
            (Some(item_rmse), Some(item_mae)) => {
                println!(
                    "  {} {:<24} rmse {:.4}  mae {:.4}  ({}/{} users scored)",
                    "[OK]".green().bold(),
                    item.item_id,
                    item_rmse,
                    item_mae,
                    item.outcomes.len(),
                    item.n_withheld
                );
            }
            _ => {
                println!(
                    "  {} {:<24} no usable predictions ({} users withheld)",
                    "[--]".yellow(),
                    item.item_id,
                    item.n_withheld
                );
            }
        }

        if verbose {
            for outcome in &item.outcomes {
                println!(
                    "        {:<16} actual {:.1}  predicted {:.3}",
                    outcome.user_id, outcome.actual, outcome.predicted
                );
            }
        }
    }

    output::section("Aggregates");
    output::kv("sampled items", report.sample_size);
    output::kv("scored items", report.n_scored_items());
    output::kv("predictions", report.n_predictions());
    output::kv("average RMSE", format!("{:.6}", report.rmse));
    output::kv("average MAE", format!("{:.6}", report.mae));
}
