//! Equality filters over records
//!
//! Request parameters arrive as loosely typed strings. [`normalize_filters`]
//! turns them into a [`FilterMap`]: only present, non-empty, non-`"null"`
//! values survive, and every surviving entry is an AND-ed equality predicate.

use super::types::Record;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use tracing::debug;

/// Fields a request may filter on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterField {
    EndYear,
    Topic,
    Sector,
    Region,
    Pestle,
    Source,
    Country,
    City,
}

impl FilterField {
    pub const ALL: [FilterField; 8] = [
        FilterField::EndYear,
        FilterField::Topic,
        FilterField::Sector,
        FilterField::Region,
        FilterField::Pestle,
        FilterField::Source,
        FilterField::Country,
        FilterField::City,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FilterField::EndYear => "end_year",
            FilterField::Topic => "topic",
            FilterField::Sector => "sector",
            FilterField::Region => "region",
            FilterField::Pestle => "pestle",
            FilterField::Source => "source",
            FilterField::Country => "country",
            FilterField::City => "city",
        }
    }

    /// Resolve a query-string key. `pest` is accepted for `pestle`.
    pub fn parse(key: &str) -> Option<Self> {
        Self::parse_key(key).map(|(field, _)| field)
    }

    /// Like [`FilterField::parse`], also reporting whether `key` was an alias
    fn parse_key(key: &str) -> Option<(Self, bool)> {
        if key == "pest" {
            return Some((FilterField::Pestle, true));
        }
        Self::parse_canonical(key).map(|field| (field, false))
    }

    fn parse_canonical(key: &str) -> Option<Self> {
        match key {
            "end_year" => Some(FilterField::EndYear),
            "topic" => Some(FilterField::Topic),
            "sector" => Some(FilterField::Sector),
            "region" => Some(FilterField::Region),
            "pestle" => Some(FilterField::Pestle),
            "source" => Some(FilterField::Source),
            "country" => Some(FilterField::Country),
            "city" => Some(FilterField::City),
            _ => None,
        }
    }

    /// The record's value for this field
    pub fn value_of<'a>(&self, record: &'a Record) -> &'a str {
        match self {
            FilterField::EndYear => &record.end_year,
            FilterField::Topic => &record.topic,
            FilterField::Sector => &record.sector,
            FilterField::Region => &record.region,
            FilterField::Pestle => &record.pestle,
            FilterField::Source => &record.source,
            FilterField::Country => &record.country,
            FilterField::City => &record.city,
        }
    }
}

impl fmt::Display for FilterField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Raw, optional filter parameters as a caller supplies them
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterParams {
    pub end_year: Option<String>,
    pub topic: Option<String>,
    pub sector: Option<String>,
    pub region: Option<String>,
    #[serde(alias = "pest")]
    pub pestle: Option<String>,
    pub source: Option<String>,
    pub country: Option<String>,
    pub city: Option<String>,
}

impl FilterParams {
    fn get(&self, field: FilterField) -> Option<&str> {
        let value = match field {
            FilterField::EndYear => &self.end_year,
            FilterField::Topic => &self.topic,
            FilterField::Sector => &self.sector,
            FilterField::Region => &self.region,
            FilterField::Pestle => &self.pestle,
            FilterField::Source => &self.source,
            FilterField::Country => &self.country,
            FilterField::City => &self.city,
        };
        value.as_deref()
    }
}

/// Normalized equality filter. An empty map matches every record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterMap(BTreeMap<FilterField, String>);

impl FilterMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from arbitrary key/value pairs such as a parsed query string.
    /// Unrecognized keys and empty values are dropped. A canonical key
    /// takes precedence over its alias regardless of pair order.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut map = FilterMap::new();
        for (key, value) in pairs {
            let key = key.as_ref();
            match FilterField::parse_key(key) {
                Some((field, true)) if map.0.contains_key(&field) => {
                    debug!("Ignoring '{}', canonical '{}' already set", key, field)
                }
                Some((field, _)) => map.insert(field, value.as_ref()),
                None => debug!("Ignoring unrecognized filter parameter '{}'", key),
            }
        }
        map
    }

    /// Add a predicate. Empty and `"null"` values are ignored.
    pub fn insert(&mut self, field: FilterField, value: &str) {
        if let Some(value) = clean_value(Some(value)) {
            self.0.insert(field, value);
        }
    }

    pub fn get(&self, field: FilterField) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// True when the record satisfies every predicate
    pub fn matches(&self, record: &Record) -> bool {
        self.0
            .iter()
            .all(|(field, value)| field.value_of(record) == value)
    }

    /// Query-string pairs, keyed by canonical field name
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        self.0
            .iter()
            .map(|(field, value)| (field.as_str(), value.clone()))
            .collect()
    }
}

fn clean_value(value: Option<&str>) -> Option<String> {
    let value = value?;
    if value.is_empty() || value == "null" {
        None
    } else {
        Some(value.to_string())
    }
}

/// Drop absent, empty and `"null"` parameters, keeping the rest verbatim.
/// Value contents are not validated.
pub fn normalize_filters(params: &FilterParams) -> FilterMap {
    let mut map = FilterMap::new();
    for field in FilterField::ALL {
        if let Some(value) = clean_value(params.get(field)) {
            map.0.insert(field, value);
        }
    }
    map
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_drops_blank_and_null() {
        let params = FilterParams {
            topic: Some("oil".to_string()),
            sector: Some("".to_string()),
            region: Some("null".to_string()),
            city: None,
            ..FilterParams::default()
        };

        let filters = normalize_filters(&params);
        assert_eq!(filters.len(), 1);
        assert_eq!(filters.get(FilterField::Topic), Some("oil"));
        assert_eq!(filters.get(FilterField::Sector), None);
        assert_eq!(filters.get(FilterField::Region), None);
    }

    #[test]
    fn test_normalize_passes_unknown_values_through() {
        let params = FilterParams {
            topic: Some("no-such-topic".to_string()),
            ..FilterParams::default()
        };
        let filters = normalize_filters(&params);
        assert_eq!(filters.get(FilterField::Topic), Some("no-such-topic"));
    }

    #[test]
    fn test_normalize_keeps_whitespace_verbatim() {
        let params = FilterParams {
            topic: Some(" ".to_string()),
            country: Some(" oil".to_string()),
            ..FilterParams::default()
        };
        let filters = normalize_filters(&params);
        assert_eq!(filters.len(), 2);
        assert_eq!(filters.get(FilterField::Topic), Some(" "));
        assert_eq!(filters.get(FilterField::Country), Some(" oil"));

        let record = Record {
            topic: "oil".to_string(),
            ..Record::default()
        };
        assert!(!FilterMap::from_pairs([("topic", " ")]).matches(&record));
        assert!(!FilterMap::from_pairs([("topic", " oil")]).matches(&record));
    }

    #[test]
    fn test_normalize_empty_params() {
        assert!(normalize_filters(&FilterParams::default()).is_empty());
    }

    #[test]
    fn test_from_pairs() {
        let filters = FilterMap::from_pairs(vec![
            ("pest", "Economic"),
            ("end_year", "2020"),
            ("page", "3"),
            ("country", ""),
        ]);
        assert_eq!(filters.len(), 2);
        assert_eq!(filters.get(FilterField::Pestle), Some("Economic"));
        assert_eq!(filters.get(FilterField::EndYear), Some("2020"));
    }

    #[test]
    fn test_canonical_key_beats_alias_in_any_order() {
        let alias_first = FilterMap::from_pairs([("pest", "Economic"), ("pestle", "Political")]);
        let canonical_first = FilterMap::from_pairs([("pestle", "Political"), ("pest", "Economic")]);
        assert_eq!(alias_first.get(FilterField::Pestle), Some("Political"));
        assert_eq!(canonical_first.get(FilterField::Pestle), Some("Political"));

        for _ in 0..50 {
            let params: std::collections::HashMap<String, String> = [
                ("pest".to_string(), "Economic".to_string()),
                ("pestle".to_string(), "Political".to_string()),
            ]
            .into_iter()
            .collect();
            assert_eq!(FilterMap::from_pairs(params).get(FilterField::Pestle), Some("Political"));
        }
    }

    #[test]
    fn test_alias_used_when_canonical_is_empty() {
        let filters = FilterMap::from_pairs([("pestle", ""), ("pest", "Economic")]);
        assert_eq!(filters.get(FilterField::Pestle), Some("Economic"));
        let filters = FilterMap::from_pairs([("pest", "Economic"), ("pestle", "")]);
        assert_eq!(filters.get(FilterField::Pestle), Some("Economic"));
    }

    #[test]
    fn test_params_accept_pest_alias() {
        let params: FilterParams = serde_json::from_str(r#"{"pest": "Industries"}"#).unwrap();
        assert_eq!(params.pestle.as_deref(), Some("Industries"));
    }

    #[test]
    fn test_matches_ands_predicates() {
        let record = Record {
            topic: "gas".to_string(),
            sector: "Energy".to_string(),
            end_year: "2020".to_string(),
            ..Record::default()
        };

        let mut filters = FilterMap::new();
        assert!(filters.matches(&record));

        filters.insert(FilterField::Topic, "gas");
        assert!(filters.matches(&record));

        filters.insert(FilterField::EndYear, "2021");
        assert!(!filters.matches(&record));
    }

    #[test]
    fn test_query_pairs_use_canonical_names() {
        let filters = FilterMap::from_pairs(vec![("pest", "Social")]);
        assert_eq!(filters.to_query_pairs(), vec![("pestle", "Social".to_string())]);
    }
}
