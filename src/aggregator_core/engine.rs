//! Run orchestration: enumerate sources, fold rows, report stats
//!
//! One engine run is a pure batch: fresh accumulator in, final state and
//! per-run counters out. Persistence happens elsewhere.

use super::accumulator::SubmissionAccumulator;
use super::datestamp::date_from_name;
use super::reader::SubmissionReader;
use super::source::enumerate_sources;
use std::io;
use std::path::Path;

/// Per-run counters surfaced to the operator log.
///
/// `rows_discarded` counts rows rejected by the sanity check (missing
/// ship type or region); they are never surfaced in the snapshot itself.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunStats {
    pub files_read: usize,
    pub files_skipped: usize,
    pub rows_discarded: usize,
}

#[derive(Debug)]
pub struct AggregationOutcome {
    pub accumulator: SubmissionAccumulator,
    pub stats: RunStats,
}

/// Sequential fold over every submission file in a directory.
///
/// Files are processed one at a time with one open handle; a file that
/// fails to open or decode is skipped with a warning and the run
/// continues with the rest.
pub struct AggregationEngine;

impl AggregationEngine {
    pub fn new() -> Self {
        Self
    }

    pub fn run(&self, dir: &Path) -> io::Result<AggregationOutcome> {
        let sources = enumerate_sources(dir)?;
        log::info!(
            "📂 Found {} submission file(s) in {}",
            sources.len(),
            dir.display()
        );

        let mut accumulator = SubmissionAccumulator::new();
        let mut stats = RunStats::default();

        for source in &sources {
            let day = date_from_name(&source.name);
            if day.is_none() {
                log::debug!("No date prefix on {}, excluded from trends", source.name);
            }

            let reader = match SubmissionReader::open(source) {
                Ok(reader) => reader,
                Err(e) => {
                    log::warn!("Skipping {}: {}", source.name, e);
                    stats.files_skipped += 1;
                    continue;
                }
            };

            for row in reader {
                if !accumulator.absorb(&row, day) {
                    stats.rows_discarded += 1;
                }
            }
            stats.files_read += 1;
        }

        if stats.rows_discarded > 0 {
            log::warn!(
                "Discarded {} row(s) missing ship type or region",
                stats.rows_discarded
            );
        }

        Ok(AggregationOutcome { accumulator, stats })
    }
}

impl Default for AggregationEngine {
    fn default() -> Self {
        Self::new()
    }
}
