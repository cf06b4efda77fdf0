//! Record sources
//!
//! The view engine only needs two capabilities from storage: fetch every
//! record matching a [`FilterMap`] (all records for an empty map), and
//! optionally hand back precomputed baseline metrics. Storage failures are
//! reported as [`SourceError`] and must never be turned into an empty
//! result along the way.

pub mod ingest;
pub mod memory;

pub use ingest::{clean_document, load_records, parse_records};
pub use memory::InMemorySource;

use crate::record::{FilterMap, Record};
use crate::views::BaseMetrics;
use async_trait::async_trait;
use thiserror::Error;

/// Errors raised while retrieving records
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("Record source unavailable: {0}")]
    Unavailable(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed dataset JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid dataset: {0}")]
    InvalidDataset(String),
}

pub type SourceResult<T> = Result<T, SourceError>;

/// Retrieval contract consumed by the dashboard engine
#[async_trait]
pub trait RecordSource: Send + Sync {
    /// Records matching every entry of `filters`, in no particular order
    async fn fetch(&self, filters: &FilterMap) -> SourceResult<Vec<Record>>;

    /// Precomputed metrics over the unfiltered corpus, when the store keeps them
    async fn fetch_baseline_metrics(&self) -> SourceResult<Option<BaseMetrics>> {
        Ok(None)
    }

    /// Number of records in the unfiltered corpus
    async fn count(&self) -> SourceResult<u64> {
        Ok(self.fetch(&FilterMap::new()).await?.len() as u64)
    }
}
