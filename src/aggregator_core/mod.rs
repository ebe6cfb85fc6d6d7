//! Aggregator Core - Crew Rest Submission Engine
//!
//! This module provides the single-pass aggregation pipeline that folds
//! every valid submission row into running totals, category tallies and
//! per-day partial sums, then publishes one JSON snapshot per run.
//!
//! # Architecture
//!
//! ```text
//! Submissions Directory → enumerate_sources (sorted)
//!     ↓ per file
//! date_from_name + SubmissionReader (streaming CSV rows)
//!     ↓
//! SubmissionAccumulator::absorb (totals, tallies, daily partials)
//!     ↓
//! build_snapshot (averages, trend series, timestamp)
//!     ↓
//! SnapshotWriter (temp file + rename)
//! ```
//!
//! Memory stays bounded by the number of distinct ship types, regions and
//! dates, never by the number of rows.

pub mod accumulator;
pub mod datestamp;
pub mod engine;
pub mod finalizer;
pub mod reader;
pub mod record;
pub mod snapshot;
pub mod source;
pub mod writer;

pub use accumulator::{DailyPartial, SubmissionAccumulator};
pub use datestamp::date_from_name;
pub use engine::{AggregationEngine, AggregationOutcome, RunStats};
pub use finalizer::build_snapshot;
pub use reader::SubmissionReader;
pub use record::{ColumnMap, Submission};
pub use snapshot::{Averages, Snapshot, Totals, TrendPoint};
pub use source::{enumerate_sources, SourceFile};
pub use writer::{SnapshotWriteError, SnapshotWriter};
