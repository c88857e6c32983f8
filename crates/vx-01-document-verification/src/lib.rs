//! # Document Verification Subsystem (VX-01)
//!
//! Issues short verification codes for signed documents, encodes the
//! signature payload that ties a signer to a document and a code, and
//! renders the public lookup URL as a QR symbol.
//!
//! ## Architecture
//!
//! This subsystem follows hexagonal architecture:
//! - **Domain Layer** (`domain/`): Code generation, payload codec, URL building. No I/O.
//! - **Ports Layer** (`ports/`): Inbound API and outbound record store / QR encoder traits
//! - **Adapters Layer** (`adapters/`): In-memory record store, SVG QR encoder
//! - **Service Layer** (`service.rs`): Wires domain logic to ports
//!
//! ## Code Format
//!
//! ```text
//! SHA-256(document_id || title || epoch_ms || hex(8 random bytes))
//!        └─ first 8 hex digits, uppercased ─→  AB-12CD-EF
//! ```
//!
//! Codes are lookup keys for humans, not security tokens: the space is
//! 32 bits, so the registry rejects duplicates and the service regenerates.

#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

// Re-export public API
pub use adapters::memory_store::InMemoryRecordStore;
#[cfg(feature = "qr-svg")]
pub use adapters::qr_svg::SvgQrEncoder;
pub use domain::code::{generate_verification_code, VerificationCode, CODE_LEN};
pub use domain::entities::{CodeKind, CodeStatus, IssueCodeRequest, IssuedCode, VerificationRecord};
pub use domain::errors::{QrError, StoreError, VerificationError};
pub use domain::payload::{generate_signature_data, parse_signature_data, SignaturePayload};
pub use domain::url::{
    absolute_verification_url, mobile_signing_url, verification_url, VERIFICATION_PATH,
};
pub use ports::inbound::DocumentVerificationApi;
pub use ports::outbound::{QrEncoder, VerificationRecordStore};
pub use service::{DocumentVerificationService, ServiceConfig, MAX_ISSUE_ATTEMPTS, MAX_TTL_HOURS};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
