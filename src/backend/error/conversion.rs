/**
 * Error Conversion
 *
 * `IntoResponse` for `ApiError`, plus the extractor rejections that are
 * folded into it so that malformed requests still get a JSON body.
 *
 * # Response Format
 *
 * ```json
 * { "status": "error", "message": "invalid_credentials" }
 * ```
 */

use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::backend::error::types::ApiError;

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        match &self {
            ApiError::Internal(detail) => tracing::error!("Request failed: {}", detail),
            other => tracing::debug!("Request rejected with {}: {}", status, other),
        }

        let body = json!({
            "status": "error",
            "message": self.code(),
        });
        (status, Json(body)).into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::InvalidBody(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self::InvalidBody(rejection.body_text())
    }
}
