//! Request and response bodies.

use serde::{Deserialize, Serialize};
use vx_01_document_verification::{
    CodeKind, IssueCodeRequest, IssuedCode, SignaturePayload, VerificationRecord,
};

/// Body of `POST /api/documents/:document_id/verification-codes`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateCodeBody {
    pub title: String,
    #[serde(default)]
    pub kind: CodeKind,
    #[serde(default)]
    pub user_id: Option<i64>,
    #[serde(default)]
    pub signature_id: Option<String>,
    #[serde(default)]
    pub ttl_hours: Option<i64>,
}

impl CreateCodeBody {
    pub fn into_request(self, document_id: i64) -> IssueCodeRequest {
        IssueCodeRequest {
            document_id,
            title: self.title,
            kind: self.kind,
            user_id: self.user_id,
            signature_id: self.signature_id,
            ttl_hours: self.ttl_hours,
        }
    }
}

/// Response of code creation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateCodeResponse {
    #[serde(flatten)]
    pub issued: IssuedCode,
    pub legally_binding: bool,
}

/// Response of a successful verification
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifyResponse {
    pub valid: bool,
    pub record: VerificationRecord,
}

/// Body of `POST /api/signatures`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignBody {
    pub user_id: i64,
    pub document_id: i64,
    pub verification_code: String,
}

/// Encoded signature payload, and body of `POST /api/signatures/audit`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayloadEnvelope {
    pub payload: String,
}

/// Response of a successful audit
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditResponse {
    pub payload: SignaturePayload,
    pub record: VerificationRecord,
    pub legally_binding: bool,
}
