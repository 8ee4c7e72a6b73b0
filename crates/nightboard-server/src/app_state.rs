//! Shared application state.

use std::sync::Arc;

use nightboard_core::stats::StatsProvider;

use crate::config::AppConfig;
use crate::obs::metrics::ServerMetrics;

/// Immutable configuration plus the two process-wide collaborators: the stats
/// provider and the request counters. Cheap to clone into every handler.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    cfg: AppConfig,
    provider: Arc<dyn StatsProvider>,
    metrics: ServerMetrics,
}

impl AppState {
    pub fn new(cfg: AppConfig, provider: Arc<dyn StatsProvider>) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                cfg,
                provider,
                metrics: ServerMetrics::default(),
            }),
        }
    }

    pub fn cfg(&self) -> &AppConfig {
        &self.inner.cfg
    }

    pub fn provider(&self) -> &dyn StatsProvider {
        self.inner.provider.as_ref()
    }

    pub fn metrics(&self) -> &ServerMetrics {
        &self.inner.metrics
    }
}
