//! In-memory record source backed by the loaded dataset

use super::{ingest, RecordSource, SourceResult};
use crate::record::{FilterMap, Record};
use async_trait::async_trait;
use std::path::Path;
use std::sync::Arc;
use tracing::debug;

/// Immutable, shared record set filtered by linear scan
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    records: Arc<Vec<Record>>,
}

impl InMemorySource {
    pub fn new(records: Vec<Record>) -> Self {
        Self {
            records: Arc::new(records),
        }
    }

    /// Load and clean a JSON dataset file
    pub fn from_json_file(path: impl AsRef<Path>) -> SourceResult<Self> {
        Ok(Self::new(ingest::load_records(path)?))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }
}

#[async_trait]
impl RecordSource for InMemorySource {
    async fn fetch(&self, filters: &FilterMap) -> SourceResult<Vec<Record>> {
        if filters.is_empty() {
            return Ok(self.records.as_ref().clone());
        }

        let matched: Vec<Record> = self
            .records
            .iter()
            .filter(|r| filters.matches(r))
            .cloned()
            .collect();
        debug!("Filter {:?} matched {} of {} records", filters, matched.len(), self.records.len());
        Ok(matched)
    }

    async fn count(&self) -> SourceResult<u64> {
        Ok(self.records.len() as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::FilterField;

    fn sample() -> InMemorySource {
        InMemorySource::new(vec![
            Record {
                topic: "oil".to_string(),
                country: "India".to_string(),
                ..Record::default()
            },
            Record {
                topic: "gas".to_string(),
                country: "India".to_string(),
                ..Record::default()
            },
        ])
    }

    #[tokio::test]
    async fn test_fetch_unfiltered() {
        let source = sample();
        assert_eq!(source.fetch(&FilterMap::new()).await.unwrap().len(), 2);
        assert_eq!(source.count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_fetch_filtered() {
        let source = sample();
        let mut filters = FilterMap::new();
        filters.insert(FilterField::Topic, "gas");
        let records = source.fetch(&filters).await.unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].topic, "gas");

        filters.insert(FilterField::Country, "Iran");
        assert!(source.fetch(&filters).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_no_baseline_by_default() {
        assert!(sample().fetch_baseline_metrics().await.unwrap().is_none());
    }
}
