//! Middleware stack for the API Gateway.
//!
//! Layer order: Request → Cors → Timeout → Trace → RequestMetrics (per route) → Handler

pub mod cors;
pub mod metrics;

pub use cors::create_cors_layer;
pub use metrics::track_requests;
