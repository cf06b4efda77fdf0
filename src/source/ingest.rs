//! Dataset loading and cleaning
//!
//! The dataset is a JSON array of loosely typed documents. Cleaning happens
//! once here so the view builders only ever see fully populated records.

use super::{SourceError, SourceResult};
use crate::record::{safe_float, Record, UNKNOWN};
use serde_json::{Map, Value};
use std::path::Path;
use tracing::{info, warn};

/// Read and clean the dataset file at `path`
pub fn load_records(path: impl AsRef<Path>) -> SourceResult<Vec<Record>> {
    let path = path.as_ref();
    info!("Loading dataset from {:?}", path);

    let raw = std::fs::read_to_string(path)?;
    let value: Value = serde_json::from_str(&raw)?;
    let records = parse_records(value)?;

    info!("Loaded {} records", records.len());
    Ok(records)
}

/// Clean every document of a top-level JSON array.
/// Elements that are not objects are skipped.
pub fn parse_records(value: Value) -> SourceResult<Vec<Record>> {
    let documents = match value {
        Value::Array(documents) => documents,
        other => {
            return Err(SourceError::InvalidDataset(format!(
                "expected a JSON array of records, found {}",
                kind(&other)
            )))
        }
    };

    let mut records = Vec::with_capacity(documents.len());
    for (position, document) in documents.into_iter().enumerate() {
        match document {
            Value::Object(map) => records.push(clean_document(&map)),
            other => warn!("Skipping dataset entry {}: expected object, found {}", position, kind(&other)),
        }
    }
    Ok(records)
}

/// Build a record from one raw document, defaulting every missing field
pub fn clean_document(document: &Map<String, Value>) -> Record {
    let category = |key: &str| text(document.get(key)).unwrap_or_else(|| UNKNOWN.to_string());
    let detail = |key: &str| text(document.get(key)).unwrap_or_default();
    let score = |key: &str| document.get(key).map(safe_float).unwrap_or(0.0);

    Record {
        end_year: category("end_year"),
        topic: category("topic"),
        sector: category("sector"),
        region: category("region"),
        country: category("country"),
        city: category("city"),
        pestle: category("pestle"),
        source: category("source"),
        intensity: score("intensity"),
        likelihood: score("likelihood"),
        relevance: score("relevance"),
        title: detail("title"),
        insight: detail("insight"),
        url: detail("url"),
        start_year: detail("start_year"),
        impact: detail("impact"),
        added: detail("added"),
        published: detail("published"),
    }
}

/// Non-blank string content of a value. Numbers are rendered in decimal,
/// with integral floats printed without a fraction.
fn text(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(s) => {
            let s = s.trim();
            (!s.is_empty()).then(|| s.to_string())
        }
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Some(i.to_string())
            } else if let Some(u) = n.as_u64() {
                Some(u.to_string())
            } else {
                n.as_f64().filter(|f| f.is_finite()).map(|f| {
                    if f.fract() == 0.0 && f.abs() < 1e15 {
                        format!("{}", f as i64)
                    } else {
                        f.to_string()
                    }
                })
            }
        }
        _ => None,
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;

    #[test]
    fn test_clean_document_defaults() {
        let doc = json!({
            "end_year": "",
            "topic": "oil",
            "sector": null,
            "region": "   ",
            "intensity": "",
            "likelihood": "abc",
            "relevance": 3,
            "title": null,
        });

        let record = clean_document(doc.as_object().unwrap());
        assert_eq!(record.end_year, UNKNOWN);
        assert_eq!(record.topic, "oil");
        assert_eq!(record.sector, UNKNOWN);
        assert_eq!(record.region, UNKNOWN);
        assert_eq!(record.country, UNKNOWN);
        assert_eq!(record.intensity, 0.0);
        assert_eq!(record.likelihood, 0.0);
        assert_eq!(record.relevance, 3.0);
        assert_eq!(record.title, "");
    }

    #[test]
    fn test_numeric_years_become_strings() {
        let doc = json!({"end_year": 2027, "start_year": 2016.0});
        let record = clean_document(doc.as_object().unwrap());
        assert_eq!(record.end_year, "2027");
        assert_eq!(record.start_year, "2016");
    }

    #[test]
    fn test_parse_records_skips_non_objects() {
        let records = parse_records(json!([{"topic": "gas"}, 42, "x", {"topic": "oil"}])).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].topic, "oil");
    }

    #[test]
    fn test_parse_records_rejects_non_array() {
        let err = parse_records(json!({"topic": "gas"})).unwrap_err();
        assert!(matches!(err, SourceError::InvalidDataset(_)));
    }

    #[test]
    fn test_load_records_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"[{{"topic": "gas", "intensity": 6, "country": "India"}}]"#).unwrap();

        let records = load_records(file.path()).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].intensity, 6.0);
        assert_eq!(records[0].country, "India");
    }

    #[test]
    fn test_load_records_missing_file() {
        let err = load_records("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, SourceError::Io(_)));
    }
}
