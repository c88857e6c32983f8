//! # VecinoXpress Test Suite
//!
//! Unified test crate containing:
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! ├── benchmarks/       # Throughput of code generation and payload codec
//! │   └── vx_01_document_verification.rs
//! │
//! └── integration/      # Cross-crate flows
//!     ├── flows.rs          # Service-level issue / sign / audit / verify
//!     └── gateway_e2e.rs    # The same flows over HTTP
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p vx-tests
//!
//! # By category
//! cargo test -p vx-tests integration::flows
//! cargo test -p vx-tests integration::gateway_e2e
//!
//! # Benchmarks
//! cargo bench -p vx-tests
//! ```

#![allow(dead_code)]

pub mod benchmarks;
pub mod integration;
