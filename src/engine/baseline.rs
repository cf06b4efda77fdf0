//! Write-once holder for corpus-wide baseline metrics

use crate::views::BaseMetrics;
use std::sync::OnceLock;
use tracing::debug;

/// Baseline metrics of the unfiltered dataset.
///
/// Filled at most once, at startup or on the first miss, and read-only
/// afterwards. When two callers race to fill it the first write is kept;
/// both computed the same value from the same static dataset.
#[derive(Debug, Default)]
pub struct BaselineCache {
    value: OnceLock<BaseMetrics>,
}

impl BaselineCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// A cache that is already filled
    pub fn with_value(metrics: BaseMetrics) -> Self {
        let cache = Self::new();
        cache.store(metrics);
        cache
    }

    pub fn get(&self) -> Option<BaseMetrics> {
        self.value.get().copied()
    }

    pub fn is_set(&self) -> bool {
        self.value.get().is_some()
    }

    /// Store `metrics` unless a value is already present; returns the
    /// value the cache holds afterwards.
    pub fn store(&self, metrics: BaseMetrics) -> BaseMetrics {
        if self.value.set(metrics).is_err() {
            debug!("Baseline metrics already cached, keeping first value");
        }
        *self.value.get_or_init(|| metrics)
    }
}
