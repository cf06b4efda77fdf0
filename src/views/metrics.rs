//! Scalar metrics: record count and mean scores

use super::ScoreTotals;
use crate::record::Record;
use serde::{Deserialize, Serialize};

/// Record count plus the mean of each score, rounded to two decimals
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BaseMetrics {
    pub total_records: u64,
    pub avg_intensity: f64,
    pub avg_likelihood: f64,
    pub avg_relevance: f64,
}

impl BaseMetrics {
    /// All-zero metrics
    pub fn empty() -> Self {
        BaseMetrics {
            total_records: 0,
            avg_intensity: 0.0,
            avg_likelihood: 0.0,
            avg_relevance: 0.0,
        }
    }
}

impl Default for BaseMetrics {
    fn default() -> Self {
        Self::empty()
    }
}

/// Count and average the scores of `records`
pub fn compute_metrics(records: &[Record]) -> BaseMetrics {
    compute_metrics_with_baseline_total(records, records.len() as u64)
}

/// Average the scores of `records` but report `baseline_total` as the
/// record count, so a filtered view still shows the size of the corpus.
pub fn compute_metrics_with_baseline_total(records: &[Record], baseline_total: u64) -> BaseMetrics {
    let (avg_intensity, avg_likelihood, avg_relevance) = ScoreTotals::from_records(records).averages();
    BaseMetrics {
        total_records: baseline_total,
        avg_intensity,
        avg_likelihood,
        avg_relevance,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scored(intensity: f64, likelihood: f64, relevance: f64) -> Record {
        Record {
            intensity,
            likelihood,
            relevance,
            ..Record::default()
        }
    }

    #[test]
    fn test_empty_metrics_are_zero() {
        let metrics = compute_metrics(&[]);
        assert_eq!(metrics, BaseMetrics::empty());
        assert!(!metrics.avg_intensity.is_nan());
    }

    #[test]
    fn test_means() {
        let records = vec![scored(4.0, 2.0, 3.0), scored(6.0, 4.0, 5.0)];
        let metrics = compute_metrics(&records);
        assert_eq!(metrics.total_records, 2);
        assert_eq!(metrics.avg_intensity, 5.0);
        assert_eq!(metrics.avg_likelihood, 3.0);
        assert_eq!(metrics.avg_relevance, 4.0);
    }

    #[test]
    fn test_means_are_rounded() {
        let records = vec![scored(1.0, 0.0, 0.0), scored(1.0, 0.0, 0.0), scored(2.0, 1.0, 0.0)];
        let metrics = compute_metrics(&records);
        assert_eq!(metrics.avg_intensity, 1.33);
        assert_eq!(metrics.avg_likelihood, 0.33);
    }

    #[test]
    fn test_tie_rounds_away_from_zero() {
        // mean intensity 0.125
        let records = vec![scored(0.25, 0.0, 0.0), scored(0.0, 0.0, 0.0)];
        assert_eq!(compute_metrics(&records).avg_intensity, 0.13);
    }

    #[test]
    fn test_non_finite_scores_count_as_zero() {
        let records = vec![scored(f64::NAN, 2.0, 2.0), scored(4.0, 2.0, 2.0)];
        let metrics = compute_metrics(&records);
        assert_eq!(metrics.avg_intensity, 2.0);
    }

    #[test]
    fn test_baseline_total_overrides_count() {
        let records = vec![scored(3.0, 3.0, 3.0)];
        let metrics = compute_metrics_with_baseline_total(&records, 1000);
        assert_eq!(metrics.total_records, 1000);
        assert_eq!(metrics.avg_intensity, 3.0);

        let none = compute_metrics_with_baseline_total(&[], 1000);
        assert_eq!(none.total_records, 1000);
        assert_eq!(none.avg_relevance, 0.0);
    }
}
