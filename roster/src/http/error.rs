//! API error type and its HTTP mapping
//!
//! The response body is `{"error": <code>, "message": <text>}`. Internal
//! details are logged but never returned for 5xx responses.
//!
//! # Example
//!
//! ```rust
//! use roster::http::{ApiError, ApiErrorKind};
//!
//! let error = ApiError::validation_failed("Name is mandatory");
//! assert_eq!(error.kind.error_code(), "VALIDATION_ERROR");
//! assert_eq!(error.kind.status_code().as_u16(), 400);
//! ```

use std::fmt;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::store::StoreErrorKind;

/// Endpoint that produced the error
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApiOperation {
    Search,
    Get,
    Create,
}

impl fmt::Display for ApiOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Search => write!(f, "search"),
            Self::Get => write!(f, "get"),
            Self::Create => write!(f, "create"),
        }
    }
}

/// Category of API error
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApiErrorKind {
    /// Request parameters or body rejected
    ValidationFailed,
    /// No visible user with the requested id
    NotFound,
    /// Backing store unreachable
    ServiceUnavailable,
    /// Anything else
    InternalError,
}

impl fmt::Display for ApiErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ValidationFailed => write!(f, "validation_failed"),
            Self::NotFound => write!(f, "not_found"),
            Self::ServiceUnavailable => write!(f, "service_unavailable"),
            Self::InternalError => write!(f, "internal_error"),
        }
    }
}

impl ApiErrorKind {
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::ValidationFailed => StatusCode::BAD_REQUEST,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::ServiceUnavailable => StatusCode::SERVICE_UNAVAILABLE,
            Self::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Value of the `error` field in the response body
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::ValidationFailed => "VALIDATION_ERROR",
            Self::NotFound => "NOT_FOUND_ERROR",
            Self::ServiceUnavailable => "SERVICE_UNAVAILABLE",
            Self::InternalError => "UNKNOWN_ERROR",
        }
    }
}

/// Structured API error with operation context
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    pub operation: ApiOperation,
    pub kind: ApiErrorKind,
    /// Message returned to the client
    pub message: String,
    /// Cause kept for the log only
    pub detail: Option<String>,
}

impl ApiError {
    pub fn new(operation: ApiOperation, kind: ApiErrorKind, message: impl Into<String>) -> Self {
        Self {
            operation,
            kind,
            message: message.into(),
            detail: None,
        }
    }

    pub fn validation_failed(message: impl Into<String>) -> Self {
        Self::new(ApiOperation::Search, ApiErrorKind::ValidationFailed, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ApiOperation::Get, ApiErrorKind::NotFound, message)
    }

    pub fn service_unavailable(detail: impl Into<String>) -> Self {
        Self::new(
            ApiOperation::Search,
            ApiErrorKind::ServiceUnavailable,
            "Service temporarily unavailable",
        )
        .with_detail(detail)
    }

    pub fn internal(detail: impl Into<String>) -> Self {
        Self::new(
            ApiOperation::Search,
            ApiErrorKind::InternalError,
            "An internal error occurred",
        )
        .with_detail(detail)
    }

    #[must_use]
    pub fn with_operation(mut self, operation: ApiOperation) -> Self {
        self.operation = operation;
        self
    }

    #[must_use]
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    pub fn is_retriable(&self) -> bool {
        matches!(self.kind, ApiErrorKind::ServiceUnavailable)
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "API {} error during {}: {}",
            self.kind, self.operation, self.message
        )
    }
}

impl std::error::Error for ApiError {}

/// Response body for API errors
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiErrorBody {
    pub error: String,
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.kind.status_code();

        if status.is_server_error() {
            tracing::error!(
                operation = %self.operation,
                kind = %self.kind,
                detail = ?self.detail,
                retriable = self.is_retriable(),
                "API error: {}", self.message
            );
        } else {
            tracing::debug!(
                operation = %self.operation,
                kind = %self.kind,
                "API error: {}", self.message
            );
        }

        let body = ApiErrorBody {
            error: self.kind.error_code().to_string(),
            message: self.message,
        };

        (status, Json(body)).into_response()
    }
}

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        match err {
            Error::Validation(message) => Self::validation_failed(message),
            err @ Error::InvalidPageRequest(_) => Self::validation_failed(err.to_string()),
            err @ Error::NotFound(_) => Self::not_found(err.to_string()),
            Error::Store(store) => match store.kind {
                StoreErrorKind::StoreUnavailable => Self::service_unavailable(store.to_string()),
                StoreErrorKind::QueryExecutionFailed => Self::internal(store.to_string()),
            },
            err @ (Error::Config(_) | Error::Io(_)) => Self::internal(err.to_string()),
        }
    }
}
