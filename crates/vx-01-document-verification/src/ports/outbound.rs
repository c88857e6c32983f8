//! # Outbound Ports (Driven Ports / SPI)
//!
//! Dependencies this subsystem needs: persistence for issued codes and a
//! QR symbol encoder.

use crate::domain::code::VerificationCode;
use crate::domain::entities::{CodeStatus, VerificationRecord};
use crate::domain::errors::{QrError, StoreError};

/// Persistence for issued verification codes, keyed by code.
#[async_trait::async_trait]
pub trait VerificationRecordStore: Send + Sync {
    /// Insert a new record.
    ///
    /// # Errors
    /// * `StoreError::DuplicateCode` - a record with the same code exists
    async fn insert(&self, record: VerificationRecord) -> Result<(), StoreError>;

    /// Fetch a record by code.
    async fn get(&self, code: &VerificationCode) -> Result<Option<VerificationRecord>, StoreError>;

    /// Move a record from `from` to `to` atomically and return the updated record.
    ///
    /// # Errors
    /// * `StoreError::NotFound` - no record with that code
    /// * `StoreError::StatusConflict` - the record is no longer in `from`
    async fn transition(
        &self,
        code: &VerificationCode,
        from: CodeStatus,
        to: CodeStatus,
    ) -> Result<VerificationRecord, StoreError>;

    /// All records issued for a document, oldest first.
    async fn list_for_document(&self, document_id: i64) -> Result<Vec<VerificationRecord>, StoreError>;
}

/// Encodes arbitrary text as a scannable QR symbol rendered to SVG.
pub trait QrEncoder: Send + Sync {
    fn encode_svg(&self, data: &str) -> Result<String, QrError>;
}
