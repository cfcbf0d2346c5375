use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::any::Any;

use crate::utils::CoachError;

/// Error returned by HTTP handlers, rendered as `{"detail": ...}`
#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    NotFound(String),
    Internal(String),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn detail(&self) -> &str {
        match self {
            ApiError::BadRequest(d) | ApiError::NotFound(d) | ApiError::Internal(d) => d,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(json!({ "detail": self.detail() }))).into_response()
    }
}

impl From<CoachError> for ApiError {
    fn from(err: CoachError) -> Self {
        match err {
            CoachError::ValidationError(_) | CoachError::Conflict(_) | CoachError::ConfigError(_) => {
                ApiError::BadRequest(err.to_string())
            }
            CoachError::NotFound(_) => ApiError::NotFound(err.to_string()),
        }
    }
}

/// Fallback for handlers that panic: a 500 with details only in debug mode
pub fn panic_response(debug: bool) -> impl Fn(Box<dyn Any + Send + 'static>) -> Response + Clone {
    move |panic| {
        let message = panic
            .downcast_ref::<String>()
            .cloned()
            .or_else(|| panic.downcast_ref::<&str>().map(|s| s.to_string()))
            .unwrap_or_else(|| "unknown panic".to_string());

        tracing::error!("❌ Exception: {}", message);

        let detail = if debug {
            message
        } else {
            "An unexpected error occurred".to_string()
        };

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": "Internal server error", "detail": detail })),
        )
            .into_response()
    }
}
