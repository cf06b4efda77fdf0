//! Vizdash
//!
//! A filterable analytics dataset service. Records carry a topic, sector,
//! region, country, pestle category, end year and three scores (intensity,
//! likelihood, relevance). From any filtered subset the engine derives:
//!
//! - scalar metrics (record count and mean scores)
//! - a yearly time series
//! - a topic/sector/region co-occurrence network
//! - a sector → topic → pestle count hierarchy
//! - per-country aggregates
//!
//! ## Example Usage
//!
//! ```rust
//! use vizdash::record::Record;
//! use vizdash::views::{build_graph, compute_metrics};
//!
//! let records = vec![
//!     Record {
//!         topic: "Coal".to_string(),
//!         sector: "Energy".to_string(),
//!         region: "Asia".to_string(),
//!         intensity: 4.0,
//!         ..Record::default()
//!     },
//! ];
//!
//! let metrics = compute_metrics(&records);
//! assert_eq!(metrics.total_records, 1);
//!
//! let graph = build_graph(&records);
//! assert_eq!(graph.node_count(), 3);
//! ```

#![warn(clippy::all)]

pub mod config;
pub mod engine;
pub mod http;
pub mod record;
pub mod source;
pub mod views;

// Re-export main types for convenience
pub use config::{ServerArgs, ServerConfig};
pub use engine::{BaselineCache, DashboardEngine, DashboardStatus};
pub use http::{ApiError, HttpServer};
pub use record::{normalize_filters, FilterField, FilterMap, FilterParams, Record};
pub use source::{InMemorySource, RecordSource, SourceError, SourceResult};
pub use views::{
    BaseMetrics, FilterOptions, GeoPoint, GraphEdge, GraphNode, HierarchyNode, NetworkGraph, TimePoint,
};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get version string
pub fn version() -> &'static str {
    VERSION
}
