//! # Ports Layer
//!
//! Trait definitions for the hexagonal architecture.
//! - **Inbound (Driving)**: API that route handlers use
//! - **Outbound (Driven)**: Record storage and QR symbol encoding

pub mod inbound;
pub mod outbound;
