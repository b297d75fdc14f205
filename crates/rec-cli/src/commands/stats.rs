//! Stats command implementation
//!
//! Summarizes a ratings dataset: totals, score spread, the candidate pool at
//! a popularity threshold, and the most-rated items.

use crate::commands::validate_path;
use crate::error::Result;
use crate::output;
use recomendar::data::CsvLoader;
use recomendar::ratings::RatingStore;
use recomendar::sample::PopularitySampler;
use serde::Serialize;
use std::path::PathBuf;

/// Everything the stats subcommand needs.
pub(crate) struct StatsArgs {
    pub file: PathBuf,
    pub min_raters: usize,
    pub top: usize,
    pub user_column: String,
    pub item_column: String,
    pub score_column: String,
    pub json: bool,
}

#[derive(Serialize)]
struct DatasetStats {
    n_ratings: usize,
    n_items: usize,
    n_users: usize,
    score_min: f32,
    score_max: f32,
    score_mean: f32,
    min_raters: usize,
    n_candidates: usize,
    top_items: Vec<TopItem>,
}

#[derive(Serialize)]
struct TopItem {
    item_id: String,
    n_raters: usize,
}

/// Run the stats command
pub(crate) fn run(args: &StatsArgs) -> Result<()> {
    validate_path(&args.file)?;

    let loader = CsvLoader::new()
        .with_user_column(&args.user_column)
        .with_item_column(&args.item_column)
        .with_score_column(&args.score_column);
    let records = loader.load(&args.file)?;
    let store = RatingStore::from_records(records);

    let stats = collect_stats(&store, args.min_raters, args.top);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
        return Ok(());
    }

    output::section("Dataset");
    output::kv("ratings", stats.n_ratings);
    output::kv("items", stats.n_items);
    output::kv("users", stats.n_users);
    output::kv(
        "score range",
        format!(
            "{:.1} to {:.1} (mean {:.3})",
            stats.score_min, stats.score_max, stats.score_mean
        ),
    );

    output::section("Sampling Pool");
    output::kv(
        &format!("items with more than {} raters", stats.min_raters),
        stats.n_candidates,
    );

    output::section(&format!("Top {} Items by Raters", stats.top_items.len()));
    for item in &stats.top_items {
        println!("  {:<24} {} raters", item.item_id, item.n_raters);
    }

    Ok(())
}

fn collect_stats(store: &RatingStore, min_raters: usize, top: usize) -> DatasetStats {
    let mut score_min = f32::INFINITY;
    let mut score_max = f32::NEG_INFINITY;
    let mut score_sum = 0.0_f32;
    for (_, ratings) in store.items() {
        for &score in ratings.values() {
            score_min = score_min.min(score);
            score_max = score_max.max(score);
            score_sum += score;
        }
    }
    if store.n_ratings() == 0 {
        score_min = 0.0;
        score_max = 0.0;
    }
    let score_mean = if store.n_ratings() == 0 {
        0.0
    } else {
        score_sum / store.n_ratings() as f32
    };

    // candidates() already sorts most-rated first.
    let pool = PopularitySampler::new(min_raters).candidates(store);
    let ranked = PopularitySampler::new(0).candidates(store);
    let top_items = ranked
        .into_iter()
        .take(top)
        .map(|item_id| {
            let n_raters = store.item(&item_id).map_or(0, |ratings| ratings.len());
            TopItem { item_id, n_raters }
        })
        .collect();

    DatasetStats {
        n_ratings: store.n_ratings(),
        n_items: store.n_items(),
        n_users: store.n_users(),
        score_min,
        score_max,
        score_mean,
        min_raters,
        n_candidates: pool.len(),
        top_items,
    }
}
