//! EmbeddedClient — in-process dashboard client
//!
//! Calls the DashboardEngine directly, no network needed.

use async_trait::async_trait;
use std::sync::Arc;

use vizdash::{
    BaseMetrics, DashboardEngine, DashboardStatus, FilterMap, FilterOptions, GeoPoint, HierarchyNode,
    InMemorySource, NetworkGraph, Record, RecordSource, TimePoint,
};

use crate::client::DashboardClient;
use crate::error::DashboardResult;

/// In-process client that wraps a DashboardEngine directly.
///
/// No network overhead — views are computed in the same process.
pub struct EmbeddedClient {
    engine: DashboardEngine,
}

impl EmbeddedClient {
    /// Create an EmbeddedClient over an in-memory record set
    pub fn new(records: Vec<Record>) -> Self {
        Self::with_source(Arc::new(InMemorySource::new(records)))
    }

    /// Create an EmbeddedClient over any record source
    pub fn with_source(source: Arc<dyn RecordSource>) -> Self {
        Self {
            engine: DashboardEngine::new(source),
        }
    }

    /// Create an EmbeddedClient wrapping an existing engine
    pub fn with_engine(engine: DashboardEngine) -> Self {
        Self { engine }
    }

    /// Get a reference to the underlying engine
    pub fn engine(&self) -> &DashboardEngine {
        &self.engine
    }
}

impl Default for EmbeddedClient {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

#[async_trait]
impl DashboardClient for EmbeddedClient {
    async fn records(&self, filters: &FilterMap) -> DashboardResult<Vec<Record>> {
        Ok(self.engine.records(filters).await?)
    }

    async fn filter_options(&self) -> DashboardResult<FilterOptions> {
        Ok(self.engine.filter_options().await?)
    }

    async fn metrics(&self, filters: &FilterMap) -> DashboardResult<BaseMetrics> {
        Ok(self.engine.metrics(filters).await?)
    }

    async fn time_series(&self, filters: &FilterMap) -> DashboardResult<Vec<TimePoint>> {
        Ok(self.engine.time_series(filters).await?)
    }

    async fn network(&self, filters: &FilterMap) -> DashboardResult<NetworkGraph> {
        Ok(self.engine.network(filters).await?)
    }

    async fn hierarchy(&self, filters: &FilterMap) -> DashboardResult<HierarchyNode> {
        Ok(self.engine.hierarchy(filters).await?)
    }

    async fn geo(&self, filters: &FilterMap) -> DashboardResult<Vec<GeoPoint>> {
        Ok(self.engine.geo(filters).await?)
    }

    async fn status(&self) -> DashboardResult<DashboardStatus> {
        Ok(self.engine.status().await?)
    }

    async fn ping(&self) -> DashboardResult<String> {
        Ok("PONG".to_string())
    }
}
