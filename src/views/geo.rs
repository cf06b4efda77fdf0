//! Per-country aggregates

use super::ScoreTotals;
use crate::record::{is_known, Record};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Mean scores and record count for one country
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub country: String,
    pub intensity: f64,
    pub likelihood: f64,
    pub relevance: f64,
    pub count: u64,
}

/// Group records by country in first-seen order. Records without a known
/// country are left out. No geocoding happens here.
pub fn aggregate_by_country(records: &[Record]) -> Vec<GeoPoint> {
    let mut countries: IndexMap<&str, ScoreTotals> = IndexMap::new();

    for record in records.iter().filter(|r| is_known(&r.country)) {
        countries.entry(record.country.as_str()).or_default().add(record);
    }

    countries
        .into_iter()
        .map(|(country, totals)| {
            let (intensity, likelihood, relevance) = totals.averages();
            GeoPoint {
                country: country.to_string(),
                intensity,
                likelihood,
                relevance,
                count: totals.count,
            }
        })
        .collect()
}
