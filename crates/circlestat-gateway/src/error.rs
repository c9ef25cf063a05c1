//! HTTP error envelope.
//!
//! Every failure leaves the gateway as `{"error": "<code>"}`. The internal
//! message is logged, never sent.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use circlestat_core::error::{ClientCode, CircleStatError};

#[derive(Debug)]
pub struct ApiError(pub CircleStatError);

impl ApiError {
    pub fn not_found() -> Self {
        Self(CircleStatError::NotFound)
    }

    pub fn status(&self) -> StatusCode {
        match self.0.client_code() {
            ClientCode::NotFound => StatusCode::NOT_FOUND,
            ClientCode::MetricsFailed
            | ClientCode::CyclicInput
            | ClientCode::DuplicateId
            | ClientCode::BadConfig => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<CircleStatError> for ApiError {
    fn from(e: CircleStatError) -> Self {
        Self(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::warn!(error = %self.0, code = self.0.client_code().as_str(), "request failed");
        }
        let body = Json(json!({ "error": self.0.client_code().as_str() }));
        (status, body).into_response()
    }
}
