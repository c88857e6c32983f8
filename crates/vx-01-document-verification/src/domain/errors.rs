//! # Verification Errors
//!
//! Error types for code issuance, lookup and payload decoding.

use super::entities::CodeStatus;
use thiserror::Error;

/// Errors that can occur in the document verification subsystem.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum VerificationError {
    /// Caller supplied a non-positive id or an empty title
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Raw signature payload could not be decoded
    #[error("Malformed signature payload: {0}")]
    MalformedPayload(String),

    /// String is not shaped like `XX-XXXX-XX`
    #[error("Invalid verification code format: {0}")]
    InvalidCodeFormat(String),

    /// No record exists for the code
    #[error("Verification code not found: {0}")]
    CodeNotFound(String),

    /// Record exists but is used or revoked
    #[error("Verification code {code} is {status}")]
    CodeInactive { code: String, status: CodeStatus },

    /// Record passed its expiry date
    #[error("Verification code {0} has expired")]
    CodeExpired(String),

    /// Payload references a record issued for another document
    #[error("Document mismatch: code was issued for document {expected}, payload names {actual}")]
    DocumentMismatch { expected: i64, actual: i64 },

    /// Every generated code collided with an existing one
    #[error("Could not issue a unique verification code after {0} attempts")]
    CodeSpaceExhausted(u32),

    /// QR encoder failed
    #[error("QR encoding failed: {0}")]
    Qr(#[from] QrError),

    /// Record store failed
    #[error("Record store error: {0}")]
    Store(#[from] StoreError),
}

impl VerificationError {
    /// Whether this error should surface to users as "not recognized"
    /// rather than as a server failure.
    pub fn is_unrecognized_code(&self) -> bool {
        matches!(
            self,
            VerificationError::MalformedPayload(_)
                | VerificationError::InvalidCodeFormat(_)
                | VerificationError::CodeNotFound(_)
                | VerificationError::DocumentMismatch { .. }
        )
    }
}

/// Errors from the verification record store.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StoreError {
    /// A record with the same code already exists
    #[error("Duplicate verification code: {0}")]
    DuplicateCode(String),

    /// No record with the given code
    #[error("Record not found: {0}")]
    NotFound(String),

    /// Record changed status concurrently
    #[error("Record {code} is {current}, not {expected}")]
    StatusConflict {
        code: String,
        expected: CodeStatus,
        current: CodeStatus,
    },

    /// Backend failure
    #[error("Storage backend error: {0}")]
    Backend(String),
}

/// Errors from the QR symbol encoder.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum QrError {
    /// Data does not fit in any QR version at the chosen correction level
    #[error("Data too long for QR symbol ({0} bytes)")]
    DataTooLong(usize),

    /// Any other encoder failure
    #[error("QR encoder error: {0}")]
    Encoder(String),
}
