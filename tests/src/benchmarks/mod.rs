//! # VecinoXpress Benchmarks
//!
//! Performance benchmarks per subsystem.

pub mod vx_01_document_verification;
