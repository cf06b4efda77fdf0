//! HTTP server implementation for the dashboard API

use super::handler::{
    data_handler, filters_handler, geo_handler, metrics_handler, network_handler, status_handler,
    timeseries_handler, topics_handler,
};
use crate::config::ServerConfig;
use crate::engine::DashboardEngine;
use axum::{routing::get, Router};
use tower_http::cors::CorsLayer;
use tracing::info;

/// Build the API router over `engine`
pub fn router(engine: DashboardEngine) -> Router {
    Router::new()
        .route("/api/data", get(data_handler))
        .route("/api/filters", get(filters_handler))
        .route("/api/metrics", get(metrics_handler))
        .route("/api/timeseries", get(timeseries_handler))
        .route("/api/network", get(network_handler))
        .route("/api/topics", get(topics_handler))
        .route("/api/geo", get(geo_handler))
        .route("/api/status", get(status_handler))
        .layer(CorsLayer::permissive())
        .with_state(engine)
}

/// HTTP server exposing the dashboard views
pub struct HttpServer {
    config: ServerConfig,
    engine: DashboardEngine,
}

impl HttpServer {
    /// Create a new HTTP server
    pub fn new(config: ServerConfig, engine: DashboardEngine) -> Self {
        Self { config, engine }
    }

    /// Start the HTTP server
    pub async fn start(&self) -> Result<(), Box<dyn std::error::Error>> {
        let app = router(self.engine.clone());

        let addr = self.config.bind_address();
        let listener = tokio::net::TcpListener::bind(&addr).await?;

        info!("Dashboard API available at http://{}", addr);

        axum::serve(listener, app).await?;

        Ok(())
    }
}
