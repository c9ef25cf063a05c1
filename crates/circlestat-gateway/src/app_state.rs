//! Shared application state for the circlestat gateway.
//!
//! Holds the circle source handle. Handlers reach the node collection only
//! through this state; there is no process-global collection.

use std::sync::Arc;

use crate::config::GatewayConfig;
use crate::source::{self, CircleSource};

#[derive(Clone)]
pub struct AppState {
    source: Arc<dyn CircleSource>,
}

impl AppState {
    /// Build application state with the source described by `cfg.circles`.
    /// `cfg` is expected to come out of `config::load*`, already validated.
    pub fn new(cfg: &GatewayConfig) -> Self {
        Self::with_source(source::from_config(&cfg.circles))
    }

    /// Explicit source, bypassing config.
    pub fn with_source(source: Arc<dyn CircleSource>) -> Self {
        tracing::debug!(source = source.kind(), "circle source attached");
        Self { source }
    }

    pub fn source(&self) -> Arc<dyn CircleSource> {
        Arc::clone(&self.source)
    }
}
