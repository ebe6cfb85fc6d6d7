//! Snapshot value consumed by the dashboard

use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Serialize)]
pub struct Totals {
    pub submissions: u64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Averages {
    pub sleep_hours: f64,
    pub rest_violations: f64,
}

/// One point of the time-ordered trend series.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendPoint {
    pub date: String,
    pub submissions: u64,
    pub avg_sleep: f64,
    pub avg_rest_violations: f64,
}

/// Complete aggregated result of one run.
///
/// Immutable once built; it has no lifecycle beyond being serialized.
/// Tallies are `BTreeMap`s so the serialized key order is stable and two
/// runs over unchanged input differ only in `updatedAt`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub totals: Totals,
    pub averages: Averages,
    pub by_ship: BTreeMap<String, u64>,
    pub by_region: BTreeMap<String, u64>,
    pub trends: Vec<TrendPoint>,
    pub updated_at: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialized_field_names() {
        let snapshot = Snapshot {
            totals: Totals { submissions: 1 },
            averages: Averages {
                sleep_hours: 6.5,
                rest_violations: 0.0,
            },
            by_ship: BTreeMap::from([("tankerA".to_string(), 1)]),
            by_region: BTreeMap::from([("EU".to_string(), 1)]),
            trends: vec![TrendPoint {
                date: "2024-01-15".to_string(),
                submissions: 1,
                avg_sleep: 6.5,
                avg_rest_violations: 0.0,
            }],
            updated_at: "2024-01-15T09:00:00+00:00".to_string(),
        };

        let value = serde_json::to_value(&snapshot).unwrap();

        assert_eq!(value["totals"]["submissions"], 1);
        assert_eq!(value["averages"]["sleepHours"], 6.5);
        assert_eq!(value["averages"]["restViolations"], 0.0);
        assert_eq!(value["byShip"]["tankerA"], 1);
        assert_eq!(value["byRegion"]["EU"], 1);
        assert_eq!(value["trends"][0]["date"], "2024-01-15");
        assert_eq!(value["trends"][0]["avgSleep"], 6.5);
        assert_eq!(value["trends"][0]["avgRestViolations"], 0.0);
        assert_eq!(value["updatedAt"], "2024-01-15T09:00:00+00:00");
    }
}
