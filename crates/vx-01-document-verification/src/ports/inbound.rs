//! # Inbound Ports (Driving Ports / API)
//!
//! The API route handlers call into.

use crate::domain::entities::{IssueCodeRequest, IssuedCode, VerificationRecord};
use crate::domain::errors::VerificationError;
use crate::domain::payload::SignaturePayload;

/// Primary Document Verification API.
///
/// Implementations must be thread-safe (`Send + Sync`).
#[async_trait::async_trait]
pub trait DocumentVerificationApi: Send + Sync {
    // =========================================================================
    // Code Registry
    // =========================================================================

    /// Generate, store and render a new verification code.
    async fn issue_code(&self, request: IssueCodeRequest) -> Result<IssuedCode, VerificationError>;

    /// Look up a user-supplied code and apply lifecycle rules.
    ///
    /// Expired codes are marked `Expired`; single-use codes are marked `Used`.
    async fn verify_code(&self, code: &str) -> Result<VerificationRecord, VerificationError>;

    /// Mark a code `Revoked`.
    async fn revoke_code(&self, code: &str) -> Result<VerificationRecord, VerificationError>;

    /// Every code issued for a document.
    async fn codes_for_document(
        &self,
        document_id: i64,
    ) -> Result<Vec<VerificationRecord>, VerificationError>;

    // =========================================================================
    // Signature Payloads
    // =========================================================================

    /// Encode a signing event for `code`.
    fn sign(
        &self,
        user_id: i64,
        document_id: i64,
        code: &str,
    ) -> Result<String, VerificationError>;

    /// Decode a payload and check it against the registry.
    ///
    /// Fails when the payload is malformed, names an unknown code, or names
    /// a code issued for another document.
    async fn audit_signature(
        &self,
        raw: &str,
    ) -> Result<(SignaturePayload, VerificationRecord), VerificationError>;

    // =========================================================================
    // Rendering
    // =========================================================================

    /// SVG QR symbol of the absolute URL for an issued code.
    ///
    /// Mobile signing codes render their signing page; every other kind
    /// renders the public lookup page.
    async fn qr_code_svg(&self, code: &str) -> Result<String, VerificationError>;
}
