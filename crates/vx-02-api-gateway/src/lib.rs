//! VX-02 API Gateway - REST interface for document verification.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────┐
//! │                 API GATEWAY (vx-02)                  │
//! ├──────────────────────────────────────────────────────┤
//! │   HTTP :8080                                         │
//! │      │                                               │
//! │   Middleware: CORS → Timeout → Trace → Metrics       │
//! │      │                                               │
//! │   Router (AppState: api + operating mode)            │
//! └──────┼───────────────────────────────────────────────┘
//!        ▼
//!   vx-01 DocumentVerificationApi
//! ```
//!
//! Lookup and decode failures are reported as "verification code not
//! recognized". In demo mode every issuance and audit response carries
//! `legally_binding: false`.
//!
//! # Usage
//!
//! ```ignore
//! use vx_02_api_gateway::{ApiGatewayService, GatewayConfig};
//!
//! let config = GatewayConfig::from_env()?;
//! let mut gateway = ApiGatewayService::new(config, api)?;
//! gateway.start().await?;
//! ```

#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod domain;
pub mod middleware;
pub mod router;
pub mod service;

pub use domain::config::{ConfigError, GatewayConfig, OperatingMode};
pub use domain::error::{ApiError, ApiResult, GatewayError};
pub use router::{build_router, AppState};
pub use service::ApiGatewayService;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
