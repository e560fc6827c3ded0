/**
 * Request Extractors
 *
 * Thin wrappers over axum's `Json` and `Query` whose rejection is
 * `ApiError`, so a body or query string that fails to decode is answered
 * with the usual JSON error instead of axum's plain-text rejection.
 */

use axum::extract::{FromRequest, FromRequestParts};

use crate::backend::error::ApiError;

/// JSON body extractor rejecting with `ApiError::InvalidBody`
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);

/// Query-string extractor rejecting with `ApiError::InvalidBody`
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(ApiError))]
pub struct ApiQuery<T>(pub T);
