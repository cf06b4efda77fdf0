//! Derived dashboard views
//!
//! Each builder takes an already filtered record slice and returns a freshly
//! constructed value. Builders are pure: no I/O, no shared state, no errors.
//! Empty input always yields a well-defined zero or empty view.

pub mod geo;
pub mod hierarchy;
pub mod metrics;
pub mod network;
pub mod options;
pub mod timeseries;

pub use geo::{aggregate_by_country, GeoPoint};
pub use hierarchy::{build_hierarchy, HierarchyNode, HIERARCHY_ROOT};
pub use metrics::{compute_metrics, compute_metrics_with_baseline_total, BaseMetrics};
pub use network::{build_graph, Dimension, GraphEdge, GraphNode, NetworkGraph};
pub use options::{collect_filter_options, FilterOptions};
pub use timeseries::{bucket_by_year, TimePoint};

use crate::record::{NumericField, Record};

/// Round to two decimal places, half away from zero.
///
/// The tie is decided on `value * 100`, so only ties that are exact in
/// binary (`0.125`, `0.375`, ...) round up; `2.675` is stored below the
/// tie and yields `2.67`. Applying it twice changes nothing.
pub fn round2(value: f64) -> f64 {
    if !value.is_finite() {
        return 0.0;
    }
    (value * 100.0).round() / 100.0
}

/// Running sums of the three scores plus a record count
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub(crate) struct ScoreTotals {
    pub intensity: f64,
    pub likelihood: f64,
    pub relevance: f64,
    pub count: u64,
}

impl ScoreTotals {
    pub fn add(&mut self, record: &Record) {
        self.intensity += record.score(NumericField::Intensity);
        self.likelihood += record.score(NumericField::Likelihood);
        self.relevance += record.score(NumericField::Relevance);
        self.count += 1;
    }

    pub fn from_records(records: &[Record]) -> Self {
        let mut totals = ScoreTotals::default();
        for record in records {
            totals.add(record);
        }
        totals
    }

    /// Rounded means as (intensity, likelihood, relevance); zeros when empty
    pub fn averages(&self) -> (f64, f64, f64) {
        if self.count == 0 {
            return (0.0, 0.0, 0.0);
        }
        let n = self.count as f64;
        (
            round2(self.intensity / n),
            round2(self.likelihood / n),
            round2(self.relevance / n),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round2_ties_away_from_zero() {
        assert_eq!(round2(0.125), 0.13);
        assert_eq!(round2(0.375), 0.38);
        assert_eq!(round2(-0.125), -0.13);
        assert_eq!(round2(2.675), 2.67);
        assert_eq!(round2(5.0), 5.0);
        assert_eq!(round2(1.0 / 3.0), 0.33);
    }

    #[test]
    fn test_round2_is_idempotent() {
        for value in [0.125, 2.675, 1.0 / 3.0, 7.999, 12.345678, -3.14159, 0.0, 100.005] {
            let once = round2(value);
            assert_eq!(round2(once), once);
        }
    }

    #[test]
    fn test_round2_non_finite() {
        assert_eq!(round2(f64::NAN), 0.0);
        assert_eq!(round2(f64::INFINITY), 0.0);
    }

    #[test]
    fn test_score_totals_empty() {
        let totals = ScoreTotals::from_records(&[]);
        assert_eq!(totals.count, 0);
        assert_eq!(totals.averages(), (0.0, 0.0, 0.0));
    }
}
