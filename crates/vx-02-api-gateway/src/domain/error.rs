//! API Gateway error types and their HTTP mapping.
//!
//! Decode and lookup failures surface as "verification code not
//! recognized"; raw parser messages stay in the logs.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use std::fmt;
use vx_01_document_verification::VerificationError;

/// Machine-readable error codes
pub mod codes {
    pub const INVALID_INPUT: &str = "invalid_input";
    pub const CODE_NOT_RECOGNIZED: &str = "code_not_recognized";
    pub const CODE_INACTIVE: &str = "code_inactive";
    pub const CODE_EXPIRED: &str = "code_expired";
    pub const CODE_SPACE_EXHAUSTED: &str = "code_space_exhausted";
    pub const INTERNAL_ERROR: &str = "internal_error";
}

/// Message shown for any unknown, malformed or mismatched code.
pub const NOT_RECOGNIZED_MESSAGE: &str = "verification code not recognized";

/// Error body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

/// API error with HTTP status
#[derive(Debug, Clone)]
pub struct ApiError {
    pub status: StatusCode,
    pub body: ErrorBody,
}

impl ApiError {
    /// Create a new API error
    pub fn new(status: StatusCode, code: &str, message: impl Into<String>) -> Self {
        Self {
            status,
            body: ErrorBody {
                code: code.to_string(),
                message: message.into(),
            },
        }
    }

    /// Bad request from caller input
    pub fn invalid_input(details: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, codes::INVALID_INPUT, details)
    }

    /// Code or payload not recognized
    pub fn not_recognized(status: StatusCode) -> Self {
        Self::new(status, codes::CODE_NOT_RECOGNIZED, NOT_RECOGNIZED_MESSAGE)
    }

    /// Internal error (details are logged, not returned)
    pub fn internal() -> Self {
        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            codes::INTERNAL_ERROR,
            "internal error",
        )
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.status.as_u16(), self.body.message)
    }
}

impl std::error::Error for ApiError {}

impl From<VerificationError> for ApiError {
    fn from(e: VerificationError) -> Self {
        match &e {
            VerificationError::InvalidInput(_) => ApiError::invalid_input(e.to_string()),
            VerificationError::CodeNotFound(_) => ApiError::not_recognized(StatusCode::NOT_FOUND),
            VerificationError::MalformedPayload(_)
            | VerificationError::InvalidCodeFormat(_)
            | VerificationError::DocumentMismatch { .. } => {
                ApiError::not_recognized(StatusCode::BAD_REQUEST)
            }
            VerificationError::CodeInactive { .. } => {
                ApiError::new(StatusCode::GONE, codes::CODE_INACTIVE, e.to_string())
            }
            VerificationError::CodeExpired(_) => {
                ApiError::new(StatusCode::GONE, codes::CODE_EXPIRED, e.to_string())
            }
            VerificationError::CodeSpaceExhausted(_) => ApiError::new(
                StatusCode::SERVICE_UNAVAILABLE,
                codes::CODE_SPACE_EXHAUSTED,
                e.to_string(),
            ),
            VerificationError::Qr(_) | VerificationError::Store(_) => {
                tracing::error!(error = %e, "Verification backend failure");
                ApiError::internal()
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status,
            Json(serde_json::json!({ "error": self.body })),
        )
            .into_response()
    }
}

/// Result type for API operations
pub type ApiResult<T> = Result<T, ApiError>;

/// Gateway-level errors (internal use)
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// Server socket bind error
    #[error("server bind error: {0}")]
    Bind(String),

    /// Server terminated with an error
    #[error("server error: {0}")]
    Serve(String),

    /// Server already running
    #[error("gateway already started")]
    AlreadyStarted,
}
