//! Analytics record model
//!
//! This module defines the typed record the view engine works on and the
//! equality filters requests apply to it.

pub mod filter;
pub mod types;

// Re-export main types
pub use filter::{normalize_filters, FilterField, FilterMap, FilterParams};
pub use types::{finite_or_zero, is_known, safe_float, NumericField, Record, UNKNOWN};
