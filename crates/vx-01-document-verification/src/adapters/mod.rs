//! # Adapters Module
//!
//! Infrastructure adapters implementing the outbound ports.

pub mod memory_store;
#[cfg(feature = "qr-svg")]
pub mod qr_svg;
