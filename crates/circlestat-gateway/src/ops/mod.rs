//! Operational HTTP endpoints.
//!
//! - `/health` : liveness
//! - `/time`   : wall clock as float seconds since the Unix epoch

use std::time::{SystemTime, UNIX_EPOCH};

use axum::Json;
use serde_json::{json, Value};

pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

pub async fn time() -> Json<Value> {
    let epoch = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs_f64();
    Json(json!({ "epoch": epoch }))
}
