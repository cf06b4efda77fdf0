//! Vizdash SDK — Client library for the Vizdash analytics API
//!
//! Provides two client implementations:
//!
//! - **`EmbeddedClient`** — In-process, no network. Uses `DashboardEngine`
//!   directly. Ideal for tests and embedded applications.
//!
//! - **`RemoteClient`** — Connects to a running Vizdash server via HTTP.
//!
//! Both implement the `DashboardClient` trait for a unified API.
//!
//! # Quick Start
//!
//! ```rust
//! use vizdash_sdk::{DashboardClient, EmbeddedClient, FilterMap, Record};
//!
//! #[tokio::main]
//! async fn main() {
//!     let client = EmbeddedClient::new(vec![Record {
//!         topic: "oil".to_string(),
//!         intensity: 6.0,
//!         ..Record::default()
//!     }]);
//!
//!     let metrics = client.metrics(&FilterMap::new()).await.unwrap();
//!     println!("{} records, avg intensity {}", metrics.total_records, metrics.avg_intensity);
//! }
//! ```

pub mod client;
pub mod embedded;
pub mod error;
pub mod remote;

// ============================================================
// Core SDK types
// ============================================================

pub use client::DashboardClient;
pub use embedded::EmbeddedClient;
pub use error::{DashboardError, DashboardResult};
pub use remote::RemoteClient;

// ============================================================
// View and record types (re-exported from vizdash core)
// ============================================================

pub use vizdash::{
    BaseMetrics, DashboardStatus, FilterField, FilterMap, FilterOptions, FilterParams, GeoPoint,
    GraphEdge, GraphNode, HierarchyNode, NetworkGraph, Record, TimePoint,
};
pub use vizdash::normalize_filters;

// ============================================================
// Version
// ============================================================

pub use vizdash::VERSION;
