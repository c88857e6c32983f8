//! # VecinoXpress Telemetry
//!
//! Logging and metrics shared by every VecinoXpress service.
//!
//! ## Components
//!
//! - **Logging**: `tracing-subscriber` with env filter, JSON output in containers
//! - **Metrics**: Prometheus collectors for code issuance, verification and payloads
//!
//! ## Usage
//!
//! ```rust,ignore
//! use vx_telemetry::{init_telemetry, TelemetryConfig};
//!
//! let _guard = init_telemetry(TelemetryConfig::from_env())?;
//! ```
//!
//! ## Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `VX_SERVICE_NAME` | `vecinoxpress` | Service name in log lines |
//! | `VX_LOG_LEVEL` | `info` | Log level filter (falls back to `RUST_LOG`) |
//! | `VX_JSON_LOGS` | `false` (`true` in containers) | JSON formatted logs |
//! | `VX_CONSOLE_OUTPUT` | `true` | Emit logs to stdout |
//! | `VX_ENVIRONMENT` | `development` | Deployment environment label |

#![warn(clippy::all)]

mod config;
mod logging;
pub mod metrics;

pub use config::TelemetryConfig;
pub use logging::init_logging;
pub use metrics::{
    encode_metrics, register_metrics, MetricsHandle, CODES_ISSUED, CODE_ISSUE_DURATION,
    CODE_VERIFICATIONS, HTTP_REQUESTS, PAYLOADS_ENCODED, PAYLOAD_DECODE_FAILURES,
};

use thiserror::Error;

/// Telemetry initialization errors
#[derive(Error, Debug)]
pub enum TelemetryError {
    #[error("Failed to initialize logging: {0}")]
    LoggingInit(String),

    #[error("Failed to initialize Prometheus metrics: {0}")]
    MetricsInit(String),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Initialize logging and register metrics.
///
/// Returns a guard that must be held for the lifetime of the application.
pub fn init_telemetry(config: TelemetryConfig) -> Result<TelemetryGuard, TelemetryError> {
    // Metrics first so startup logs can be counted
    let metrics_handle = register_metrics()?;
    init_logging(&config)?;

    tracing::info!(
        service = %config.service_name,
        environment = %config.environment,
        "Telemetry initialized"
    );

    Ok(TelemetryGuard {
        _metrics: metrics_handle,
    })
}

/// Guard that keeps telemetry active.
pub struct TelemetryGuard {
    _metrics: MetricsHandle,
}

impl Drop for TelemetryGuard {
    fn drop(&mut self) {
        tracing::info!("Shutting down telemetry...");
    }
}

/// Convenience macro for recording a metric increment.
#[macro_export]
macro_rules! metric_inc {
    ($metric:expr) => {
        $metric.inc()
    };
    ($metric:expr, $labels:expr) => {
        $metric.with_label_values($labels).inc()
    };
}
