//! # Domain Entities
//!
//! Registry records for issued verification codes.

use super::code::VerificationCode;
use super::url::{mobile_signing_url, verification_url};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// What a code is used for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum CodeKind {
    /// Printed on a signed document for public lookup
    #[default]
    DocumentVerification,
    /// Identifies one signature on a document
    SignatureVerification,
    /// One-shot link to sign a document from a phone
    MobileSigning,
}

impl CodeKind {
    /// Relative path a user follows for this kind of code.
    pub fn path_for(&self, code: &VerificationCode) -> String {
        match self {
            CodeKind::MobileSigning => mobile_signing_url(code.as_str()),
            _ => verification_url(code.as_str()),
        }
    }

    /// Whether a successful verification consumes the code.
    pub fn is_single_use(&self) -> bool {
        matches!(self, CodeKind::MobileSigning)
    }

    /// Metric label.
    pub fn as_str(&self) -> &'static str {
        match self {
            CodeKind::DocumentVerification => "document_verification",
            CodeKind::SignatureVerification => "signature_verification",
            CodeKind::MobileSigning => "mobile_signing",
        }
    }
}

/// Lifecycle state of an issued code.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CodeStatus {
    Active,
    Used,
    Expired,
    Revoked,
}

impl fmt::Display for CodeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            CodeStatus::Active => "active",
            CodeStatus::Used => "used",
            CodeStatus::Expired => "expired",
            CodeStatus::Revoked => "revoked",
        };
        f.write_str(s)
    }
}

/// An issued verification code and its lifecycle.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationRecord {
    pub id: Uuid,
    pub document_id: i64,
    pub document_title: String,
    pub user_id: Option<i64>,
    pub signature_id: Option<String>,
    pub kind: CodeKind,
    pub code: VerificationCode,
    pub status: CodeStatus,
    pub created_at: DateTime<Utc>,
    pub expires_at: Option<DateTime<Utc>>,
}

impl VerificationRecord {
    /// Whether `expires_at` lies before `now`.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.is_some_and(|exp| exp < now)
    }
}

/// Request to issue a new code.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueCodeRequest {
    pub document_id: i64,
    pub title: String,
    #[serde(default)]
    pub kind: CodeKind,
    #[serde(default)]
    pub user_id: Option<i64>,
    #[serde(default)]
    pub signature_id: Option<String>,
    /// Overrides the kind's default lifetime
    #[serde(default)]
    pub ttl_hours: Option<i64>,
}

impl IssueCodeRequest {
    /// Request for a plain document verification code.
    pub fn document(document_id: i64, title: impl Into<String>) -> Self {
        Self {
            document_id,
            title: title.into(),
            kind: CodeKind::DocumentVerification,
            user_id: None,
            signature_id: None,
            ttl_hours: None,
        }
    }

    pub fn with_kind(mut self, kind: CodeKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn with_user(mut self, user_id: i64) -> Self {
        self.user_id = Some(user_id);
        self
    }

    /// Lifetime override in whole hours.
    pub fn with_ttl_hours(mut self, hours: i64) -> Self {
        self.ttl_hours = Some(hours);
        self
    }
}

/// Result of issuing a code.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct IssuedCode {
    pub record: VerificationRecord,
    /// Relative lookup (or mobile signing) path
    pub url: String,
    /// Absolute URL encoded in the QR symbol
    pub qr_url: String,
    /// SVG markup of the QR symbol
    pub qr_svg: String,
}
