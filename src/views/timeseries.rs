//! Yearly time series

use super::ScoreTotals;
use crate::record::{is_known, Record};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Mean scores and record count for one end year
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimePoint {
    pub year: String,
    pub intensity: f64,
    pub likelihood: f64,
    pub relevance: f64,
    pub count: u64,
}

/// Group records by `end_year` and emit one point per year, ascending.
///
/// Years are compared as strings, which for four-digit years is the same
/// as numeric order. Records without a known year are skipped.
pub fn bucket_by_year(records: &[Record]) -> Vec<TimePoint> {
    let mut years: BTreeMap<&str, ScoreTotals> = BTreeMap::new();

    for record in records.iter().filter(|r| is_known(&r.end_year)) {
        years.entry(record.end_year.as_str()).or_default().add(record);
    }

    years
        .into_iter()
        .map(|(year, totals)| {
            let (intensity, likelihood, relevance) = totals.averages();
            TimePoint {
                year: year.to_string(),
                intensity,
                likelihood,
                relevance,
                count: totals.count,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::UNKNOWN;

    fn in_year(year: &str, intensity: f64) -> Record {
        Record {
            end_year: year.to_string(),
            intensity,
            ..Record::default()
        }
    }

    #[test]
    fn test_empty_input() {
        assert!(bucket_by_year(&[]).is_empty());
    }

    #[test]
    fn test_sorted_and_grouped() {
        let records = vec![
            in_year("2030", 1.0),
            in_year("2018", 2.0),
            in_year("2030", 4.0),
            in_year("2025", 3.0),
        ];

        let series = bucket_by_year(&records);
        let years: Vec<&str> = series.iter().map(|p| p.year.as_str()).collect();
        assert_eq!(years, vec!["2018", "2025", "2030"]);

        let last = &series[2];
        assert_eq!(last.count, 2);
        assert_eq!(last.intensity, 2.5);
    }

    #[test]
    fn test_unknown_years_excluded() {
        let records = vec![in_year(UNKNOWN, 9.0), in_year("", 9.0), in_year("2020", 1.0)];
        let series = bucket_by_year(&records);

        assert_eq!(series.len(), 1);
        assert!(series.iter().all(|p| p.year != UNKNOWN));
        let total: u64 = series.iter().map(|p| p.count).sum();
        assert!(total < records.len() as u64);
    }

    #[test]
    fn test_counts_sum_to_input_when_all_known() {
        let records = vec![in_year("2020", 1.0), in_year("2021", 1.0), in_year("2020", 1.0)];
        let total: u64 = bucket_by_year(&records).iter().map(|p| p.count).sum();
        assert_eq!(total, records.len() as u64);
    }
}
