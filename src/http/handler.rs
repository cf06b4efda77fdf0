//! HTTP handlers for the dashboard API

use super::payload::{GeoFeatureCollection, TimeSeriesResponse};
use crate::engine::{DashboardEngine, DashboardStatus};
use crate::record::{FilterMap, Record};
use crate::source::SourceError;
use crate::views::{BaseMetrics, FilterOptions, HierarchyNode, NetworkGraph};
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde_json::json;
use std::collections::HashMap;
use thiserror::Error;
use tracing::error;

/// Failure of a request, rendered as `{"error": ...}`
#[derive(Error, Debug)]
pub enum ApiError {
    #[error(transparent)]
    Source(#[from] SourceError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::Source(SourceError::Unavailable(_)) | ApiError::Source(SourceError::Io(_)) => {
                StatusCode::SERVICE_UNAVAILABLE
            }
            ApiError::Source(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        error!("Request failed: {}", self);
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

pub type ApiResult<T> = Result<Json<T>, ApiError>;

/// Query-string parameters become a normalized filter map
type RawParams = Query<HashMap<String, String>>;

fn filters(Query(params): RawParams) -> FilterMap {
    FilterMap::from_pairs(params)
}

pub async fn data_handler(State(engine): State<DashboardEngine>, params: RawParams) -> ApiResult<Vec<Record>> {
    Ok(Json(engine.records(&filters(params)).await?))
}

pub async fn filters_handler(State(engine): State<DashboardEngine>) -> ApiResult<FilterOptions> {
    Ok(Json(engine.filter_options().await?))
}

pub async fn metrics_handler(State(engine): State<DashboardEngine>, params: RawParams) -> ApiResult<BaseMetrics> {
    Ok(Json(engine.metrics(&filters(params)).await?))
}

pub async fn timeseries_handler(
    State(engine): State<DashboardEngine>,
    params: RawParams,
) -> ApiResult<TimeSeriesResponse> {
    let points = engine.time_series(&filters(params)).await?;
    Ok(Json(points.into()))
}

pub async fn network_handler(State(engine): State<DashboardEngine>, params: RawParams) -> ApiResult<NetworkGraph> {
    Ok(Json(engine.network(&filters(params)).await?))
}

pub async fn topics_handler(State(engine): State<DashboardEngine>, params: RawParams) -> ApiResult<HierarchyNode> {
    Ok(Json(engine.hierarchy(&filters(params)).await?))
}

pub async fn geo_handler(
    State(engine): State<DashboardEngine>,
    params: RawParams,
) -> ApiResult<GeoFeatureCollection> {
    let points = engine.geo(&filters(params)).await?;
    Ok(Json(points.into()))
}

pub async fn status_handler(State(engine): State<DashboardEngine>) -> ApiResult<DashboardStatus> {
    Ok(Json(engine.status().await?))
}
