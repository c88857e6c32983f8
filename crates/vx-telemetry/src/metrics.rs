//! Prometheus metrics for VecinoXpress services.
//!
//! All metrics follow the naming convention: `vx_<area>_<metric>_<unit>`

use lazy_static::lazy_static;
use prometheus::{
    exponential_buckets, Counter, CounterVec, Encoder, Histogram, HistogramOpts, Opts, Registry,
    TextEncoder,
};
use std::sync::Arc;

use crate::TelemetryError;

lazy_static! {
    /// Global metrics registry
    pub static ref REGISTRY: Registry = Registry::new();

    // =========================================================================
    // VERIFICATION CODES
    // =========================================================================

    /// Codes issued, by kind
    pub static ref CODES_ISSUED: CounterVec = CounterVec::new(
        Opts::new("vx_codes_issued_total", "Total verification codes issued"),
        &["kind"]  // document_verification / signature_verification / mobile_signing
    ).expect("metric creation failed");

    /// Verification attempts, by outcome
    pub static ref CODE_VERIFICATIONS: CounterVec = CounterVec::new(
        Opts::new("vx_code_verifications_total", "Total verification code lookups"),
        &["outcome"]  // valid / not_found / inactive / expired / malformed
    ).expect("metric creation failed");

    /// Time spent issuing a code (generation, QR rendering, storage)
    pub static ref CODE_ISSUE_DURATION: Histogram = Histogram::with_opts(
        HistogramOpts::new(
            "vx_code_issue_duration_seconds",
            "Time spent issuing a verification code"
        ).buckets(exponential_buckets(0.0001, 2.0, 14).expect("valid buckets"))
    ).expect("metric creation failed");

    // =========================================================================
    // SIGNATURE PAYLOADS
    // =========================================================================

    /// Payloads encoded
    pub static ref PAYLOADS_ENCODED: Counter = Counter::new(
        "vx_payloads_encoded_total",
        "Total signature payloads encoded"
    ).expect("metric creation failed");

    /// Payloads that failed to decode
    pub static ref PAYLOAD_DECODE_FAILURES: Counter = Counter::new(
        "vx_payload_decode_failures_total",
        "Total signature payloads rejected as malformed"
    ).expect("metric creation failed");

    // =========================================================================
    // HTTP
    // =========================================================================

    /// Requests handled, by route and status class
    pub static ref HTTP_REQUESTS: CounterVec = CounterVec::new(
        Opts::new("vx_http_requests_total", "Total HTTP requests handled"),
        &["route", "status"]
    ).expect("metric creation failed");
}

/// Handle for the registered metrics
pub struct MetricsHandle {
    _registry: Arc<Registry>,
}

/// Register all metrics with the global registry.
///
/// Safe to call more than once; collectors already registered are skipped.
pub fn register_metrics() -> Result<MetricsHandle, TelemetryError> {
    let metrics: Vec<Box<dyn prometheus::core::Collector>> = vec![
        Box::new(CODES_ISSUED.clone()),
        Box::new(CODE_VERIFICATIONS.clone()),
        Box::new(CODE_ISSUE_DURATION.clone()),
        Box::new(PAYLOADS_ENCODED.clone()),
        Box::new(PAYLOAD_DECODE_FAILURES.clone()),
        Box::new(HTTP_REQUESTS.clone()),
    ];

    for metric in metrics {
        match REGISTRY.register(metric) {
            Ok(()) | Err(prometheus::Error::AlreadyReg) => {}
            Err(e) => return Err(TelemetryError::MetricsInit(e.to_string())),
        }
    }

    Ok(MetricsHandle {
        _registry: Arc::new(REGISTRY.clone()),
    })
}

/// Encode all metrics as Prometheus text format.
pub fn encode_metrics() -> Result<String, TelemetryError> {
    let encoder = TextEncoder::new();
    let metric_families = REGISTRY.gather();
    let mut buffer = Vec::new();
    encoder
        .encode(&metric_families, &mut buffer)
        .map_err(|e| TelemetryError::MetricsInit(e.to_string()))?;
    String::from_utf8(buffer).map_err(|e| TelemetryError::MetricsInit(e.to_string()))
}
