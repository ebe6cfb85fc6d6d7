//! Calendar date derivation from submission file names
//!
//! Upload batches are named `YYYYMMDD_HHMMSS_<suffix>.csv`; only the date
//! portion matters for the trend series.

use chrono::NaiveDate;

/// Parse the `YYYYMMDD_` prefix of a file name into a calendar date.
///
/// Returns `None` when the name carries no such prefix or the digits do
/// not form a real date. No date is a normal outcome, not a failure:
/// undated files still count toward totals and tallies, they just
/// produce no trend entry.
pub fn date_from_name(name: &str) -> Option<NaiveDate> {
    let bytes = name.as_bytes();
    if bytes.len() < 9 || bytes[8] != b'_' {
        return None;
    }
    if !bytes[..8].iter().all(|b| b.is_ascii_digit()) {
        return None;
    }

    NaiveDate::parse_from_str(&name[..8], "%Y%m%d").ok()
}
