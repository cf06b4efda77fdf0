//! Dashboard engine
//!
//! Connects a [`RecordSource`] to the view builders. Each call fetches the
//! filtered record set once and hands it to exactly one builder. Source
//! errors are returned unchanged, so "nothing matched" (an empty but valid
//! view) stays distinguishable from "the store is down".

pub mod baseline;

pub use baseline::BaselineCache;

use crate::record::{FilterMap, Record};
use crate::source::{RecordSource, SourceResult};
use crate::views::{
    aggregate_by_country, bucket_by_year, build_graph, build_hierarchy, collect_filter_options,
    compute_metrics, compute_metrics_with_baseline_total, BaseMetrics, FilterOptions, GeoPoint,
    HierarchyNode, NetworkGraph, TimePoint,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, info};

/// Health summary reported by the status endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardStatus {
    pub status: String,
    pub version: String,
    pub records: u64,
}

/// Entry point for every dashboard view
#[derive(Clone)]
pub struct DashboardEngine {
    source: Arc<dyn RecordSource>,
    baseline: Arc<BaselineCache>,
}

impl DashboardEngine {
    /// Create an engine with an empty baseline cache
    pub fn new(source: Arc<dyn RecordSource>) -> Self {
        Self::with_baseline(source, Arc::new(BaselineCache::new()))
    }

    /// Create an engine sharing an existing baseline cache
    pub fn with_baseline(source: Arc<dyn RecordSource>, baseline: Arc<BaselineCache>) -> Self {
        Self { source, baseline }
    }

    pub fn baseline_cache(&self) -> &Arc<BaselineCache> {
        &self.baseline
    }

    /// Compute and cache baseline metrics ahead of the first request
    pub async fn warm_baseline(&self) -> SourceResult<BaseMetrics> {
        let metrics = self.baseline().await?;
        info!(
            "Baseline metrics ready: {} records, avg intensity {}",
            metrics.total_records, metrics.avg_intensity
        );
        Ok(metrics)
    }

    /// Corpus-wide metrics: cached value, then the source's own, then a
    /// live computation over every record. Whatever is found is cached.
    pub async fn baseline(&self) -> SourceResult<BaseMetrics> {
        if let Some(metrics) = self.baseline.get() {
            return Ok(metrics);
        }

        let metrics = match self.source.fetch_baseline_metrics().await? {
            Some(metrics) => metrics,
            None => {
                debug!("Computing baseline metrics from the full record set");
                compute_metrics(&self.source.fetch(&FilterMap::new()).await?)
            }
        };
        Ok(self.baseline.store(metrics))
    }

    /// Raw records matching `filters`
    pub async fn records(&self, filters: &FilterMap) -> SourceResult<Vec<Record>> {
        self.source.fetch(filters).await
    }

    /// Distinct filter values over the unfiltered corpus
    pub async fn filter_options(&self) -> SourceResult<FilterOptions> {
        let records = self.source.fetch(&FilterMap::new()).await?;
        Ok(collect_filter_options(&records))
    }

    /// Record count and mean scores. Filtered requests average the matching
    /// records but report the corpus size as `total_records`.
    pub async fn metrics(&self, filters: &FilterMap) -> SourceResult<BaseMetrics> {
        if filters.is_empty() {
            return self.baseline().await;
        }

        let records = self.source.fetch(filters).await?;
        let baseline = self.baseline().await?;
        Ok(compute_metrics_with_baseline_total(&records, baseline.total_records))
    }

    pub async fn time_series(&self, filters: &FilterMap) -> SourceResult<Vec<TimePoint>> {
        let records = self.source.fetch(filters).await?;
        Ok(bucket_by_year(&records))
    }

    pub async fn network(&self, filters: &FilterMap) -> SourceResult<NetworkGraph> {
        let records = self.source.fetch(filters).await?;
        Ok(build_graph(&records))
    }

    pub async fn hierarchy(&self, filters: &FilterMap) -> SourceResult<HierarchyNode> {
        let records = self.source.fetch(filters).await?;
        Ok(build_hierarchy(&records))
    }

    pub async fn geo(&self, filters: &FilterMap) -> SourceResult<Vec<GeoPoint>> {
        let records = self.source.fetch(filters).await?;
        Ok(aggregate_by_country(&records))
    }

    pub async fn status(&self) -> SourceResult<DashboardStatus> {
        Ok(DashboardStatus {
            status: "healthy".to_string(),
            version: crate::VERSION.to_string(),
            records: self.source.count().await?,
        })
    }
}
