use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use std::fmt;

#[derive(Debug)]
pub enum ApiError {
    /// The weather provider could not answer. Cause-free on purpose: the
    /// client sees one envelope no matter what went wrong upstream.
    LookupFailed,

    InternalError(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::LookupFailed => write!(f, "Weather lookup failed"),
            ApiError::InternalError(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            // The legacy front-end contract: HTTP 200, failure signalled by
            // the `error` key alone.
            ApiError::LookupFailed => (
                StatusCode::OK,
                Json(json!({"error": "City not found or API error."})),
            )
                .into_response(),
            ApiError::InternalError(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({"error": "An internal error occurred"})),
                )
                    .into_response()
            }
        }
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        ApiError::InternalError(err.to_string())
    }
}

impl From<crate::services::SearchError> for ApiError {
    fn from(err: crate::services::SearchError) -> Self {
        match err {
            crate::services::SearchError::LookupFailed => ApiError::LookupFailed,
        }
    }
}
