//! # Verification Code Generator
//!
//! Derives a short `XX-XXXX-XX` code from document identity, a timestamp
//! and a random salt.

use super::errors::VerificationError;
use chrono::{DateTime, Utc};
use rand::rngs::OsRng;
use rand::RngCore;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;
use std::str::FromStr;

/// Length of a formatted code including both hyphens.
pub const CODE_LEN: usize = 10;

/// Hex digits taken from the digest.
const DIGEST_PREFIX_LEN: usize = 8;

/// Random bytes mixed into every digest.
const SALT_LEN: usize = 8;

/// A formatted verification code (`AB-12CD-EF`).
///
/// Always 10 characters: 8 uppercase hex digits split 2-4-2.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct VerificationCode(String);

impl VerificationCode {
    /// Parse and normalize a user-supplied code.
    ///
    /// Input is trimmed and uppercased before validation, so `ab-12cd-ef`
    /// resolves to the same record as `AB-12CD-EF`.
    pub fn parse(raw: &str) -> Result<Self, VerificationError> {
        let normalized = raw.trim().to_ascii_uppercase();
        if is_well_formed(&normalized) {
            Ok(Self(normalized))
        } else {
            Err(VerificationError::InvalidCodeFormat(raw.to_string()))
        }
    }

    /// Build from the first 8 hex digits of a digest.
    fn from_hex_prefix(prefix: &str) -> Self {
        debug_assert_eq!(prefix.len(), DIGEST_PREFIX_LEN);
        let upper = prefix.to_ascii_uppercase();
        Self(format!("{}-{}-{}", &upper[..2], &upper[2..6], &upper[6..8]))
    }

    /// The code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VerificationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for VerificationCode {
    type Err = VerificationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for VerificationCode {
    type Error = VerificationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<VerificationCode> for String {
    fn from(code: VerificationCode) -> Self {
        code.0
    }
}

impl AsRef<str> for VerificationCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

fn is_well_formed(code: &str) -> bool {
    let bytes = code.as_bytes();
    bytes.len() == CODE_LEN
        && bytes.iter().enumerate().all(|(i, b)| match i {
            2 | 7 => *b == b'-',
            _ => b.is_ascii_digit() || (b'A'..=b'F').contains(b),
        })
}

/// Generate a verification code for a document.
///
/// `timestamp` defaults to the current time. The digest input always
/// carries 8 bytes from the OS random source, so two calls with identical
/// arguments produce different codes with overwhelming probability.
///
/// # Errors
///
/// `InvalidInput` when `document_id` is not positive or `title` is blank.
///
/// # Panics
///
/// If the operating system random source is unavailable.
pub fn generate_verification_code(
    document_id: i64,
    title: &str,
    timestamp: Option<DateTime<Utc>>,
) -> Result<VerificationCode, VerificationError> {
    if document_id <= 0 {
        return Err(VerificationError::InvalidInput(format!(
            "document_id must be positive, got {document_id}"
        )));
    }
    if title.trim().is_empty() {
        return Err(VerificationError::InvalidInput(
            "title must not be empty".to_string(),
        ));
    }

    let timestamp = timestamp.unwrap_or_else(Utc::now);

    let mut salt = [0u8; SALT_LEN];
    OsRng.fill_bytes(&mut salt);

    let material = format!(
        "{}{}{}{}",
        document_id,
        title,
        timestamp.timestamp_millis(),
        hex::encode(salt)
    );
    let digest = hex::encode(Sha256::digest(material.as_bytes()));

    Ok(VerificationCode::from_hex_prefix(&digest[..DIGEST_PREFIX_LEN]))
}
