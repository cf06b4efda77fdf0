//! RemoteClient — network client for a running Vizdash server
//!
//! Connects via HTTP to the Vizdash API.

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;

use vizdash::http::{GeoFeatureCollection, TimeSeriesResponse};
use vizdash::{
    BaseMetrics, DashboardStatus, FilterMap, FilterOptions, GeoPoint, HierarchyNode, NetworkGraph,
    Record, TimePoint,
};

use crate::client::DashboardClient;
use crate::error::{DashboardError, DashboardResult};

/// Network client that connects to a running Vizdash server.
pub struct RemoteClient {
    http_base_url: String,
    http_client: Client,
}

impl RemoteClient {
    /// Create a new RemoteClient connecting to the given HTTP base URL.
    ///
    /// # Example
    /// ```no_run
    /// # use vizdash_sdk::RemoteClient;
    /// let client = RemoteClient::new("http://localhost:8080");
    /// ```
    pub fn new(http_base_url: &str) -> Self {
        Self {
            http_base_url: http_base_url.trim_end_matches('/').to_string(),
            http_client: Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.http_base_url
    }

    /// Execute a GET request against an `/api/...` route
    async fn get_json<T: DeserializeOwned>(&self, route: &str, filters: &FilterMap) -> DashboardResult<T> {
        let url = format!("{}/api/{}", self.http_base_url, route);

        let response = self.http_client.get(&url)
            .query(&filters.to_query_pairs())
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            Ok(response.json().await?)
        } else {
            let error_body: serde_json::Value = response.json().await
                .unwrap_or_else(|_| serde_json::json!({"error": "Unknown error"}));
            let message = error_body.get("error")
                .and_then(|v| v.as_str())
                .unwrap_or("Unknown error")
                .to_string();
            Err(DashboardError::ApiError {
                status: status.as_u16(),
                message,
            })
        }
    }
}

#[async_trait]
impl DashboardClient for RemoteClient {
    async fn records(&self, filters: &FilterMap) -> DashboardResult<Vec<Record>> {
        self.get_json("data", filters).await
    }

    async fn filter_options(&self) -> DashboardResult<FilterOptions> {
        self.get_json("filters", &FilterMap::new()).await
    }

    async fn metrics(&self, filters: &FilterMap) -> DashboardResult<BaseMetrics> {
        self.get_json("metrics", filters).await
    }

    async fn time_series(&self, filters: &FilterMap) -> DashboardResult<Vec<TimePoint>> {
        let response: TimeSeriesResponse = self.get_json("timeseries", filters).await?;
        Ok(response.points)
    }

    async fn network(&self, filters: &FilterMap) -> DashboardResult<NetworkGraph> {
        self.get_json("network", filters).await
    }

    async fn hierarchy(&self, filters: &FilterMap) -> DashboardResult<HierarchyNode> {
        self.get_json("topics", filters).await
    }

    async fn geo(&self, filters: &FilterMap) -> DashboardResult<Vec<GeoPoint>> {
        let collection: GeoFeatureCollection = self.get_json("geo", filters).await?;
        Ok(collection.into_points())
    }

    async fn status(&self) -> DashboardResult<DashboardStatus> {
        self.get_json("status", &FilterMap::new()).await
    }

    async fn ping(&self) -> DashboardResult<String> {
        let status = self.status().await?;
        if status.status == "healthy" {
            Ok("PONG".to_string())
        } else {
            Err(DashboardError::ConnectionError(
                format!("Server unhealthy: {}", status.status)
            ))
        }
    }
}
