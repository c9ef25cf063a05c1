use axum::Json;
use bytes::Bytes;
use serde_json::{json, Value};

/// Echo the request body back. Bodies that are not JSON come back as
/// `{"_raw": text}` instead of failing the request.
pub async fn echo(body: Bytes) -> Json<Value> {
    Json(json!({ "ok": true, "received": parse_body(&body) }))
}

/// Empty body reads as `{}`.
pub fn parse_body(body: &[u8]) -> Value {
    if body.is_empty() {
        return json!({});
    }
    match serde_json::from_slice::<Value>(body) {
        Ok(v) => v,
        Err(_) => json!({ "_raw": valid_utf8(body) }),
    }
}

/// Keep the valid UTF-8 runs of `body`, dropping invalid bytes outright.
fn valid_utf8(body: &[u8]) -> String {
    body.utf8_chunks().map(|chunk| chunk.valid()).collect()
}
