//! Snapshot construction from final fold state

use super::accumulator::SubmissionAccumulator;
use super::snapshot::{Averages, Snapshot, Totals, TrendPoint};
use chrono::{DateTime, SecondsFormat, Utc};

/// Convert the final accumulator state into a snapshot.
///
/// Pure transformation, no error conditions: an all-zero accumulator
/// yields the zero snapshot with empty tallies and trends.
///
/// `generated_at` is injected so tests can pin the instant; the binary
/// captures `Utc::now()` once per run, never per record.
pub fn build_snapshot(acc: &SubmissionAccumulator, generated_at: DateTime<Utc>) -> Snapshot {
    let mut trends: Vec<TrendPoint> = acc
        .daily
        .iter()
        .map(|(day, partial)| TrendPoint {
            date: day.format("%Y-%m-%d").to_string(),
            submissions: partial.submissions,
            avg_sleep: round2(ratio(partial.sleep_sum, partial.submissions)),
            avg_rest_violations: round2(ratio(partial.rest_sum, partial.submissions)),
        })
        .collect();
    // Lexicographic on YYYY-MM-DD is chronological
    trends.sort_by(|a, b| a.date.cmp(&b.date));

    Snapshot {
        totals: Totals {
            submissions: acc.submissions,
        },
        averages: Averages {
            sleep_hours: round2(ratio(acc.sleep_sum, acc.submissions)),
            rest_violations: round2(ratio(acc.rest_sum, acc.submissions)),
        },
        by_ship: acc.by_ship.iter().map(|(k, v)| (k.clone(), *v)).collect(),
        by_region: acc.by_region.iter().map(|(k, v)| (k.clone(), *v)).collect(),
        trends,
        updated_at: generated_at.to_rfc3339_opts(SecondsFormat::Micros, false),
    }
}

/// Guarded average: 0 when the count is 0, never a division fault.
fn ratio(sum: f64, count: u64) -> f64 {
    if count == 0 {
        0.0
    } else {
        sum / count as f64
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
