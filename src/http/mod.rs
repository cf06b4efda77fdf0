//! HTTP API
//!
//! Every route is a `GET` whose query string is normalized into a filter
//! map before reaching the engine.

pub mod handler;
pub mod payload;
pub mod server;

pub use handler::{ApiError, ApiResult};
pub use payload::{GeoFeatureCollection, TimeSeriesResponse, TIME_SERIES_LABEL};
pub use server::{router, HttpServer};
