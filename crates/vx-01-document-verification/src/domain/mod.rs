//! # Domain Layer
//!
//! Code generation, payload encoding and URL building with no I/O.
//! This is the inner layer of the hexagonal architecture.

pub mod code;
pub mod entities;
pub mod errors;
pub mod payload;
pub mod url;
