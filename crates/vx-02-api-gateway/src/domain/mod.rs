//! Domain layer for the API Gateway.
//!
//! Configuration, error mapping and wire types. No I/O.

pub mod config;
pub mod error;
pub mod types;

pub use config::{ConfigError, CorsConfig, GatewayConfig, OperatingMode};
pub use error::{ApiError, ApiResult, GatewayError};
