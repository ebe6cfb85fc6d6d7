//! Aggregator Binary - Crew Rest Submission Snapshot
//!
//! Reads every CSV file in the submissions directory, folds valid rows
//! into totals, category tallies and a per-day trend series, and writes
//! one JSON snapshot for the dashboard.
//!
//! ## Usage
//!
//! ```bash
//! cargo run --release --bin aggregator
//! ```
//!
//! ## Environment Variables
//!
//! - RESTWATCH_SUBMISSIONS_PATH - Input directory (default: submissions)
//! - RESTWATCH_OUTPUT_PATH - Snapshot path (default: data/data.json)
//! - RUST_LOG - Logging level (optional, default: info)

use chrono::Utc;
use restwatch::aggregator_core::{build_snapshot, AggregationEngine, SnapshotWriter};
use restwatch::config::AggregatorConfig;
use std::fs;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Stderr)
        .init();

    dotenv::dotenv().ok();

    let config = AggregatorConfig::from_env();

    log::info!("🚀 Starting submission aggregation");
    log::info!("   Submissions: {}", config.submissions_path.display());
    log::info!("   Output: {}", config.output_path.display());

    // Bootstrap both directories so a fresh deployment works out of the box
    fs::create_dir_all(&config.submissions_path)?;
    if let Some(parent) = config.output_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let engine = AggregationEngine::new();
    let outcome = engine.run(&config.submissions_path)?;

    log::info!(
        "✅ Read {} file(s), skipped {}, discarded {} row(s)",
        outcome.stats.files_read,
        outcome.stats.files_skipped,
        outcome.stats.rows_discarded
    );

    let snapshot = build_snapshot(&outcome.accumulator, Utc::now());
    let writer = SnapshotWriter::new(&config.output_path);
    writer.write(&snapshot)?;

    println!(
        "Aggregated {} submissions into {}",
        snapshot.totals.submissions,
        writer.path().display()
    );

    Ok(())
}
