//! Core record type for the analytics dataset

use serde::{Deserialize, Serialize};

/// Placeholder stored for any categorical field that was absent or empty
/// in the source document.
pub const UNKNOWN: &str = "Unknown";

/// True when a categorical value carries information, i.e. it is neither
/// blank nor the [`UNKNOWN`] sentinel.
pub fn is_known(value: &str) -> bool {
    let value = value.trim();
    !value.is_empty() && value != UNKNOWN
}

/// Coerce a raw JSON value into a score.
///
/// Numbers pass through when finite; numeric strings are parsed after
/// trimming. Everything else (empty strings, `"null"`, booleans, objects,
/// NaN/Inf) becomes `0.0`.
pub fn safe_float(value: &serde_json::Value) -> f64 {
    match value {
        serde_json::Value::Number(n) => n.as_f64().map(finite_or_zero).unwrap_or(0.0),
        serde_json::Value::String(s) => {
            let s = s.trim();
            if s.is_empty() || s.eq_ignore_ascii_case("null") {
                return 0.0;
            }
            s.parse::<f64>().map(finite_or_zero).unwrap_or(0.0)
        }
        _ => 0.0,
    }
}

/// Replace NaN and infinities with zero.
pub fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

/// The three numeric scores carried by every record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericField {
    Intensity,
    Likelihood,
    Relevance,
}

/// One analytical data point.
///
/// Every field is mandatory; ingestion fills absent categoricals with
/// [`UNKNOWN`], absent scores with `0.0` and absent descriptive text with
/// an empty string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Record {
    pub end_year: String,
    pub topic: String,
    pub sector: String,
    pub region: String,
    pub country: String,
    pub city: String,
    pub pestle: String,
    pub source: String,
    pub intensity: f64,
    pub likelihood: f64,
    pub relevance: f64,

    pub title: String,
    pub insight: String,
    pub url: String,
    pub start_year: String,
    pub impact: String,
    pub added: String,
    pub published: String,
}

impl Default for Record {
    fn default() -> Self {
        Record {
            end_year: UNKNOWN.to_string(),
            topic: UNKNOWN.to_string(),
            sector: UNKNOWN.to_string(),
            region: UNKNOWN.to_string(),
            country: UNKNOWN.to_string(),
            city: UNKNOWN.to_string(),
            pestle: UNKNOWN.to_string(),
            source: UNKNOWN.to_string(),
            intensity: 0.0,
            likelihood: 0.0,
            relevance: 0.0,
            title: String::new(),
            insight: String::new(),
            url: String::new(),
            start_year: String::new(),
            impact: String::new(),
            added: String::new(),
            published: String::new(),
        }
    }
}

impl Record {
    /// Score for the given field, with non-finite values read as zero
    pub fn score(&self, field: NumericField) -> f64 {
        let raw = match field {
            NumericField::Intensity => self.intensity,
            NumericField::Likelihood => self.likelihood,
            NumericField::Relevance => self.relevance,
        };
        finite_or_zero(raw)
    }
}
