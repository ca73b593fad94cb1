//! Error responses for the HTTP handlers.
//!
//! # Design
//! Every failure a handler can report is a variant here, and each maps to one
//! status code with a short `text/plain` body. `NotFound` is produced when
//! the store reports that a remove target does not exist; the store itself
//! treats that as a normal outcome, not an error.

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// The request body is not a JSON todo object.
    #[error("Invalid body")]
    InvalidBody,

    /// The path segment is not a non-negative integer.
    #[error("Invalid id {0}")]
    InvalidId(String),

    #[error("Could not find any todo with the id {0}")]
    NotFound(u64),

    /// Anything the client cannot fix, e.g. the landing page is unreadable.
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidBody | ApiError::InvalidId(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        } else {
            tracing::debug!(%status, error = %self, "request rejected");
        }
        (
            status,
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            self.to_string(),
        )
            .into_response()
    }
}
