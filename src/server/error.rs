use axum::{
    extract::rejection::BytesRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use std::any::Any;
use thiserror::Error;
use tracing::error;

use super::types::ErrorBody;

/// Errors returned to HTTP callers
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    InvalidInput(&'static str),

    /// Body could not be read, e.g. over the size limit
    #[error("{message}")]
    Rejected { status: StatusCode, message: String },

    #[error("{0}")]
    Unexpected(String),
}

impl From<BytesRejection> for ApiError {
    fn from(rejection: BytesRejection) -> Self {
        ApiError::Rejected {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            ApiError::Rejected { status, .. } => *status,
            ApiError::Unexpected(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::Unexpected(ref message) = self {
            error!(event = "request_failed", error = %message, "Unexpected failure");
        }

        let body = ErrorBody {
            error: self.to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}

/// Render a handler panic as a JSON 500 carrying the panic message
pub fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let message = if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = panic.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "Internal server error".to_string()
    };

    ApiError::Unexpected(message).into_response()
}
