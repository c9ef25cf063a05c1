use axum::{extract::State, Json};

use circlestat_core::{compute_metrics, TreeMetrics};

use crate::app_state::AppState;
use crate::error::ApiError;

/// Fetch a fresh snapshot from the configured source and summarize it.
pub async fn tree_metrics(State(state): State<AppState>) -> Result<Json<TreeMetrics>, ApiError> {
    let source = state.source();
    let nodes = source.fetch().await?;
    tracing::debug!(source = source.kind(), nodes = nodes.len(), "circles fetched");

    let metrics = compute_metrics(&nodes)?;
    Ok(Json(metrics))
}
