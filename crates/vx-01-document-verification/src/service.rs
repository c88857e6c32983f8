//! # Document Verification Service
//!
//! Application service layer that implements the `DocumentVerificationApi` trait.
//!
//! ## Architecture
//!
//! This is the hexagonal "application service" that:
//! - Implements the inbound port (`DocumentVerificationApi`)
//! - Uses the outbound ports (`VerificationRecordStore`, `QrEncoder`)
//! - Delegates code generation and payload encoding to the domain layer
//!
//! ## Code Lifecycle
//!
//! ```text
//! issue ──→ Active ──verify (single-use kind)──→ Used
//!             │ ──verify after expires_at──────→ Expired
//!             └──revoke──────────────────────→ Revoked
//! ```

use crate::domain::code::{generate_verification_code, VerificationCode};
use crate::domain::entities::{
    CodeKind, CodeStatus, IssueCodeRequest, IssuedCode, VerificationRecord,
};
use crate::domain::errors::{StoreError, VerificationError};
use crate::domain::payload::{generate_signature_data, parse_signature_data, SignaturePayload};
use crate::domain::url::absolute_verification_url;
use crate::ports::inbound::DocumentVerificationApi;
use crate::ports::outbound::{QrEncoder, VerificationRecordStore};
use chrono::{Duration, Utc};
use tracing::{debug, info, warn};
use uuid::Uuid;

/// Generation attempts before giving up on a collision-free code.
pub const MAX_ISSUE_ATTEMPTS: u32 = 5;

/// Longest lifetime a caller may request: ten years.
pub const MAX_TTL_HOURS: i64 = 24 * 365 * 10;

/// Service configuration.
#[derive(Clone, Debug)]
pub struct ServiceConfig {
    /// Origin prepended to lookup paths for QR symbols
    pub public_base_url: String,
    /// Lifetime of document and signature verification codes
    pub verification_ttl: Duration,
    /// Lifetime of mobile signing codes
    pub mobile_signing_ttl: Duration,
    pub max_issue_attempts: u32,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            public_base_url: "https://www.cerfidoc.cl".to_string(),
            verification_ttl: Duration::days(365),
            mobile_signing_ttl: Duration::hours(24),
            max_issue_attempts: MAX_ISSUE_ATTEMPTS,
        }
    }
}

impl ServiceConfig {
    fn ttl_for(&self, kind: CodeKind) -> Duration {
        match kind {
            CodeKind::MobileSigning => self.mobile_signing_ttl,
            _ => self.verification_ttl,
        }
    }
}

/// Document Verification Service.
///
/// Generic over the record store and QR encoder so deployments can swap
/// the in-memory store for an external document store.
pub struct DocumentVerificationService<S: VerificationRecordStore, Q: QrEncoder> {
    store: S,
    qr: Q,
    config: ServiceConfig,
}

impl<S: VerificationRecordStore, Q: QrEncoder> DocumentVerificationService<S, Q> {
    /// Create a new document verification service.
    pub fn new(store: S, qr: Q, config: ServiceConfig) -> Self {
        Self { store, qr, config }
    }

    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Absolute URL a QR symbol for `code` of `kind` points to.
    pub fn public_url(&self, kind: CodeKind, code: &VerificationCode) -> String {
        absolute_verification_url(&self.config.public_base_url, &kind.path_for(code))
    }

    async fn find(&self, raw: &str) -> Result<VerificationRecord, VerificationError> {
        let code = VerificationCode::parse(raw)?;
        self.store
            .get(&code)
            .await?
            .ok_or_else(|| VerificationError::CodeNotFound(code.to_string()))
    }
}

/// Map a lost status race to the lifecycle error callers expect.
fn conflict_to_inactive(err: StoreError) -> VerificationError {
    match err {
        StoreError::StatusConflict { code, current, .. } => match current {
            CodeStatus::Expired => VerificationError::CodeExpired(code),
            status => VerificationError::CodeInactive { code, status },
        },
        StoreError::NotFound(code) => VerificationError::CodeNotFound(code),
        other => VerificationError::Store(other),
    }
}

#[async_trait::async_trait]
impl<S: VerificationRecordStore, Q: QrEncoder> DocumentVerificationApi
    for DocumentVerificationService<S, Q>
{
    async fn issue_code(&self, request: IssueCodeRequest) -> Result<IssuedCode, VerificationError> {
        let ttl = match request.ttl_hours {
            Some(hours) if !(1..=MAX_TTL_HOURS).contains(&hours) => {
                return Err(VerificationError::InvalidInput(format!(
                    "ttl_hours must be between 1 and {MAX_TTL_HOURS}, got {hours}"
                )))
            }
            Some(hours) => Duration::try_hours(hours).ok_or_else(|| {
                VerificationError::InvalidInput(format!("ttl_hours out of range: {hours}"))
            })?,
            None => self.config.ttl_for(request.kind),
        };

        for attempt in 1..=self.config.max_issue_attempts {
            let now = Utc::now();
            let code = generate_verification_code(request.document_id, &request.title, Some(now))?;

            let url = request.kind.path_for(&code);
            let qr_url = absolute_verification_url(&self.config.public_base_url, &url);
            let qr_svg = self.qr.encode_svg(&qr_url)?;

            let record = VerificationRecord {
                id: Uuid::new_v4(),
                document_id: request.document_id,
                document_title: request.title.clone(),
                user_id: request.user_id,
                signature_id: request.signature_id.clone(),
                kind: request.kind,
                code,
                status: CodeStatus::Active,
                created_at: now,
                expires_at: Some(now.checked_add_signed(ttl).ok_or_else(|| {
                    VerificationError::InvalidInput("code lifetime overflows the clock".to_string())
                })?),
            };

            match self.store.insert(record.clone()).await {
                Ok(()) => {
                    info!(
                        document_id = record.document_id,
                        code = %record.code,
                        kind = record.kind.as_str(),
                        "Verification code issued"
                    );
                    return Ok(IssuedCode {
                        record,
                        url,
                        qr_url,
                        qr_svg,
                    });
                }
                Err(StoreError::DuplicateCode(code)) => {
                    warn!(%code, attempt, "Verification code collision, regenerating");
                }
                Err(e) => return Err(e.into()),
            }
        }

        Err(VerificationError::CodeSpaceExhausted(
            self.config.max_issue_attempts,
        ))
    }

    async fn verify_code(&self, code: &str) -> Result<VerificationRecord, VerificationError> {
        let record = self.find(code).await?;

        if record.status != CodeStatus::Active {
            debug!(code = %record.code, status = %record.status, "Inactive code presented");
            return Err(VerificationError::CodeInactive {
                code: record.code.to_string(),
                status: record.status,
            });
        }

        if record.is_expired_at(Utc::now()) {
            match self
                .store
                .transition(&record.code, CodeStatus::Active, CodeStatus::Expired)
                .await
            {
                // Another writer moved it first; the code is unusable either way.
                Ok(_) | Err(StoreError::StatusConflict { .. }) => {}
                Err(e) => return Err(e.into()),
            }
            info!(code = %record.code, "Verification code expired");
            return Err(VerificationError::CodeExpired(record.code.to_string()));
        }

        if record.kind.is_single_use() {
            let used = self
                .store
                .transition(&record.code, CodeStatus::Active, CodeStatus::Used)
                .await
                .map_err(conflict_to_inactive)?;
            info!(code = %used.code, document_id = used.document_id, "Single-use code consumed");
            return Ok(used);
        }

        debug!(code = %record.code, document_id = record.document_id, "Verification code valid");
        Ok(record)
    }

    async fn revoke_code(&self, code: &str) -> Result<VerificationRecord, VerificationError> {
        let record = self.find(code).await?;
        let revoked = self
            .store
            .transition(&record.code, CodeStatus::Active, CodeStatus::Revoked)
            .await
            .map_err(conflict_to_inactive)?;
        info!(code = %revoked.code, document_id = revoked.document_id, "Verification code revoked");
        Ok(revoked)
    }

    async fn codes_for_document(
        &self,
        document_id: i64,
    ) -> Result<Vec<VerificationRecord>, VerificationError> {
        if document_id <= 0 {
            return Err(VerificationError::InvalidInput(format!(
                "document_id must be positive, got {document_id}"
            )));
        }
        Ok(self.store.list_for_document(document_id).await?)
    }

    fn sign(
        &self,
        user_id: i64,
        document_id: i64,
        code: &str,
    ) -> Result<String, VerificationError> {
        let payload = generate_signature_data(user_id, document_id, code)?;
        debug!(user_id, document_id, code, "Signature payload encoded");
        Ok(payload)
    }

    async fn audit_signature(
        &self,
        raw: &str,
    ) -> Result<(SignaturePayload, VerificationRecord), VerificationError> {
        let payload = parse_signature_data(raw).inspect_err(|e| {
            warn!(error = %e, "Rejected malformed signature payload");
        })?;
        payload.signed_at()?;

        let record = self.find(&payload.verification_code).await?;
        if record.document_id != payload.document_id {
            warn!(
                code = %record.code,
                expected = record.document_id,
                actual = payload.document_id,
                "Signature payload names the wrong document"
            );
            return Err(VerificationError::DocumentMismatch {
                expected: record.document_id,
                actual: payload.document_id,
            });
        }

        Ok((payload, record))
    }

    async fn qr_code_svg(&self, code: &str) -> Result<String, VerificationError> {
        let record = self.find(code).await?;
        let url = self.public_url(record.kind, &record.code);
        Ok(self.qr.encode_svg(&url)?)
    }
}
