//! Axum router wiring.
//!
//! The whole HTTP surface in one table. A known path hit with the wrong
//! method falls through to the same `not_found` as an unknown path.

use axum::{
    middleware,
    routing::{get, post},
    Router,
};

use crate::error::ApiError;
use crate::transport::{access_log, cors};
use crate::{api, app_state::AppState, ops};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(ops::health).fallback(not_found))
        .route("/time", get(ops::time).fallback(not_found))
        .route("/metrics", get(api::metrics::tree_metrics).fallback(not_found))
        .route("/echo", post(api::echo::echo).fallback(not_found))
        .fallback(not_found)
        .layer(middleware::from_fn(cors::cors))
        .layer(middleware::from_fn(access_log::access_log))
        .with_state(state)
}

async fn not_found() -> ApiError {
    ApiError::not_found()
}
