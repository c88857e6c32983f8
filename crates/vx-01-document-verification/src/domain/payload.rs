//! # Signature Payload Codec
//!
//! Serializes a signing event (who, which document, under which code,
//! when) to a JSON transport string and back.

use super::errors::VerificationError;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// Record of one signing event.
///
/// `timestamp` is always produced by [`generate_signature_data`], never by
/// the caller, and is kept as the exact ISO-8601 string that was encoded.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignaturePayload {
    /// Signer
    pub user_id: i64,
    /// Signed document
    pub document_id: i64,
    /// Code displayed on the signed document (not validated)
    pub verification_code: String,
    /// ISO-8601 UTC instant of signing
    pub timestamp: String,
}

impl SignaturePayload {
    /// Parse `timestamp` into a UTC instant.
    pub fn signed_at(&self) -> Result<DateTime<Utc>, VerificationError> {
        DateTime::parse_from_rfc3339(&self.timestamp)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(|e| {
                VerificationError::MalformedPayload(format!(
                    "timestamp {:?} is not ISO-8601: {e}",
                    self.timestamp
                ))
            })
    }
}

/// Encode a signing event captured now.
///
/// # Errors
///
/// `InvalidInput` when either id is not positive.
pub fn generate_signature_data(
    user_id: i64,
    document_id: i64,
    verification_code: &str,
) -> Result<String, VerificationError> {
    if user_id <= 0 {
        return Err(VerificationError::InvalidInput(format!(
            "user_id must be positive, got {user_id}"
        )));
    }
    if document_id <= 0 {
        return Err(VerificationError::InvalidInput(format!(
            "document_id must be positive, got {document_id}"
        )));
    }

    let payload = SignaturePayload {
        user_id,
        document_id,
        verification_code: verification_code.to_string(),
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
    };

    // A struct of integers and strings always serializes.
    serde_json::to_string(&payload)
        .map_err(|e| VerificationError::MalformedPayload(e.to_string()))
}

/// Decode a signature payload.
///
/// # Errors
///
/// `MalformedPayload` when `raw` is not JSON or lacks any of the four fields.
pub fn parse_signature_data(raw: &str) -> Result<SignaturePayload, VerificationError> {
    serde_json::from_str(raw).map_err(|e| VerificationError::MalformedPayload(e.to_string()))
}
