//! DashboardClient trait — the unified interface for embedded and remote modes

use async_trait::async_trait;
use vizdash::{
    BaseMetrics, DashboardStatus, FilterMap, FilterOptions, GeoPoint, HierarchyNode, NetworkGraph,
    Record, TimePoint,
};

use crate::error::DashboardResult;

/// Unified client interface for the Vizdash views.
///
/// Implemented by:
/// - `EmbeddedClient` — in-process, no network (for tests and embedded use)
/// - `RemoteClient` — connects to a running Vizdash server via HTTP
#[async_trait]
pub trait DashboardClient: Send + Sync {
    /// Raw records matching the filters
    async fn records(&self, filters: &FilterMap) -> DashboardResult<Vec<Record>>;

    /// Selectable values for each filter
    async fn filter_options(&self) -> DashboardResult<FilterOptions>;

    /// Record count and mean scores
    async fn metrics(&self, filters: &FilterMap) -> DashboardResult<BaseMetrics>;

    /// Yearly time series, ascending by year
    async fn time_series(&self, filters: &FilterMap) -> DashboardResult<Vec<TimePoint>>;

    /// Topic/sector/region co-occurrence network
    async fn network(&self, filters: &FilterMap) -> DashboardResult<NetworkGraph>;

    /// Sector → topic → pestle count tree
    async fn hierarchy(&self, filters: &FilterMap) -> DashboardResult<HierarchyNode>;

    /// Per-country aggregates
    async fn geo(&self, filters: &FilterMap) -> DashboardResult<Vec<GeoPoint>>;

    /// Get server status
    async fn status(&self) -> DashboardResult<DashboardStatus>;

    /// Ping the server
    async fn ping(&self) -> DashboardResult<String>;
}
