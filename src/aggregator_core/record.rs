//! Row decoding from CSV records to Submission values

use csv::StringRecord;

/// Column positions resolved once from a file's header row.
///
/// The header row is authoritative for field names regardless of column
/// order. Columns the schema does not know (`called_during_rest`,
/// `port_intensity`) are accepted and never looked up.
#[derive(Debug, Clone, Default)]
pub struct ColumnMap {
    ship_type: Option<usize>,
    region: Option<usize>,
    sleep_hours: Option<usize>,
    rest_violations: Option<usize>,
}

impl ColumnMap {
    pub fn from_headers(headers: &StringRecord) -> Self {
        let mut columns = Self::default();
        for (idx, name) in headers.iter().enumerate() {
            match name.trim() {
                "ship_type" => columns.ship_type = Some(idx),
                "region" => columns.region = Some(idx),
                "sleep_hours" => columns.sleep_hours = Some(idx),
                "rest_violations" => columns.rest_violations = Some(idx),
                _ => {}
            }
        }
        columns
    }
}

/// One decoded submission row.
///
/// Category fields may still be empty here; the accumulator applies the
/// sanity check at absorb time. Numeric fields are already coerced: a
/// missing or unparsable cell becomes 0.0 so one bad measurement never
/// drops an otherwise valid row.
#[derive(Debug, Clone, PartialEq)]
pub struct Submission {
    pub ship_type: String,
    pub region: String,
    pub sleep_hours: f64,
    pub rest_violations: f64,
}

impl Submission {
    pub fn from_record(columns: &ColumnMap, row: &StringRecord) -> Self {
        Self {
            ship_type: cell(row, columns.ship_type).to_string(),
            region: cell(row, columns.region).to_string(),
            sleep_hours: numeric(cell(row, columns.sleep_hours)),
            rest_violations: numeric(cell(row, columns.rest_violations)),
        }
    }
}

fn cell<'a>(row: &'a StringRecord, idx: Option<usize>) -> &'a str {
    idx.and_then(|i| row.get(i)).unwrap_or("")
}

fn numeric(raw: &str) -> f64 {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    trimmed.parse().unwrap_or(0.0)
}
