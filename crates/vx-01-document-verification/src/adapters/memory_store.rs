//! In-memory verification record store.
//!
//! Backs the node when no external document store is configured, and
//! every test.

use crate::domain::code::VerificationCode;
use crate::domain::entities::{CodeStatus, VerificationRecord};
use crate::domain::errors::StoreError;
use crate::ports::outbound::VerificationRecordStore;
use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::HashMap;

/// Records keyed by code.
#[derive(Default)]
pub struct InMemoryRecordStore {
    records: RwLock<HashMap<VerificationCode, VerificationRecord>>,
}

impl InMemoryRecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.read().is_empty()
    }
}

#[async_trait]
impl VerificationRecordStore for InMemoryRecordStore {
    async fn insert(&self, record: VerificationRecord) -> Result<(), StoreError> {
        let mut records = self.records.write();
        if records.contains_key(&record.code) {
            return Err(StoreError::DuplicateCode(record.code.to_string()));
        }
        records.insert(record.code.clone(), record);
        Ok(())
    }

    async fn get(&self, code: &VerificationCode) -> Result<Option<VerificationRecord>, StoreError> {
        Ok(self.records.read().get(code).cloned())
    }

    async fn transition(
        &self,
        code: &VerificationCode,
        from: CodeStatus,
        to: CodeStatus,
    ) -> Result<VerificationRecord, StoreError> {
        let mut records = self.records.write();
        let record = records
            .get_mut(code)
            .ok_or_else(|| StoreError::NotFound(code.to_string()))?;
        if record.status != from {
            return Err(StoreError::StatusConflict {
                code: code.to_string(),
                expected: from,
                current: record.status,
            });
        }
        record.status = to;
        Ok(record.clone())
    }

    async fn list_for_document(&self, document_id: i64) -> Result<Vec<VerificationRecord>, StoreError> {
        let mut found: Vec<_> = self
            .records
            .read()
            .values()
            .filter(|r| r.document_id == document_id)
            .cloned()
            .collect();
        found.sort_by_key(|r| r.created_at);
        Ok(found)
    }
}
