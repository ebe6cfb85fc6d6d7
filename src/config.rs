//! Aggregator configuration from environment variables

use std::env;
use std::path::PathBuf;

/// Runtime configuration for the aggregator binary.
///
/// Loaded from environment variables with sensible defaults.
///
/// Environment variables:
/// - `RESTWATCH_SUBMISSIONS_PATH` (default: submissions)
/// - `RESTWATCH_OUTPUT_PATH` (default: data/data.json)
#[derive(Debug, Clone)]
pub struct AggregatorConfig {
    /// Directory holding incoming CSV submission files
    pub submissions_path: PathBuf,

    /// Path of the JSON snapshot consumed by the dashboard
    pub output_path: PathBuf,
}

impl AggregatorConfig {
    pub fn from_env() -> Self {
        Self {
            submissions_path: env::var("RESTWATCH_SUBMISSIONS_PATH")
                .unwrap_or_else(|_| "submissions".to_string())
                .into(),
            output_path: env::var("RESTWATCH_OUTPUT_PATH")
                .unwrap_or_else(|_| "data/data.json".to_string())
                .into(),
        }
    }
}
