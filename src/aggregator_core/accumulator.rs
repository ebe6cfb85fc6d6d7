//! Single-pass fold state for submission aggregation

use super::record::Submission;
use chrono::NaiveDate;
use std::collections::HashMap;

/// Running count and sums for one calendar date.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DailyPartial {
    pub submissions: u64,
    pub sleep_sum: f64,
    pub rest_sum: f64,
}

/// Mutable fold state for one aggregation run.
///
/// Created all-zero, fed one row at a time, discarded after the snapshot
/// is built. Never touches storage or performs I/O.
#[derive(Debug, Default)]
pub struct SubmissionAccumulator {
    pub submissions: u64,
    pub sleep_sum: f64,
    pub rest_sum: f64,
    pub by_ship: HashMap<String, u64>,
    pub by_region: HashMap<String, u64>,
    pub daily: HashMap<NaiveDate, DailyPartial>,
}

impl SubmissionAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one row into the running state.
    ///
    /// Rows missing a ship type or region after trimming are discarded
    /// silently (data-quality filter, not an error). Returns whether the
    /// row was counted so the engine can tally discards for the run log.
    ///
    /// `day` is the calendar date derived from the source file's name;
    /// `None` means the row contributes to totals and tallies only.
    pub fn absorb(&mut self, row: &Submission, day: Option<NaiveDate>) -> bool {
        let ship = row.ship_type.trim();
        let region = row.region.trim();
        if ship.is_empty() || region.is_empty() {
            return false;
        }

        self.submissions += 1;
        self.sleep_sum += row.sleep_hours;
        self.rest_sum += row.rest_violations;
        *self.by_ship.entry(ship.to_string()).or_insert(0) += 1;
        *self.by_region.entry(region.to_string()).or_insert(0) += 1;

        if let Some(day) = day {
            let partial = self.daily.entry(day).or_default();
            partial.submissions += 1;
            partial.sleep_sum += row.sleep_hours;
            partial.rest_sum += row.rest_violations;
        }

        true
    }
}
