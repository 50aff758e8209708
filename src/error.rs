// src/error.rs
//! API error taxonomy. Every failure path serializes to the same
//! `{"error": "..."}` JSON shape with the matching HTTP status, so callers
//! never see a bare framework error page.

use axum::{
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

#[derive(Debug)]
pub enum ApiError {
    /// The enrich endpoint only speaks POST; carries the method we got.
    MethodNotAllowed(Method),
    /// Request body did not parse as JSON.
    InvalidPayload,
    /// Body parsed, but `url` was absent or empty.
    MissingField,
    /// Anything unexpected, downgraded at the handler boundary.
    Internal(anyhow::Error),
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::InvalidPayload | ApiError::MissingField => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn message(&self) -> String {
        match self {
            ApiError::MethodNotAllowed(m) => format!("Only POST method is allowed, got {m}"),
            ApiError::InvalidPayload => "Invalid JSON".to_string(),
            ApiError::MissingField => "URL is required".to_string(),
            ApiError::Internal(e) => e.to_string(),
        }
    }

    /// Stable label for metrics/log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            ApiError::MethodNotAllowed(_) => "method_not_allowed",
            ApiError::InvalidPayload => "invalid_payload",
            ApiError::MissingField => "missing_field",
            ApiError::Internal(_) => "internal",
        }
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(e: anyhow::Error) -> Self {
        ApiError::Internal(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorBody {
            error: self.message(),
        };
        (status, Json(body)).into_response()
    }
}
