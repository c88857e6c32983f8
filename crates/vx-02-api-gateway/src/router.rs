//! HTTP routes and handlers.
//!
//! | Method | Path | Handler |
//! |--------|------|---------|
//! | GET | `/health` | [`health_check`] |
//! | GET | `/metrics` | [`metrics`] |
//! | POST/GET | `/api/documents/:document_id/verification-codes` | [`create_code`] / [`list_codes`] |
//! | GET/DELETE | `/api/verification-codes/:code` | [`verify_code`] / [`revoke_code`] |
//! | GET | `/api/verification-codes/:code/qr` | [`qr_code`] |
//! | POST | `/api/signatures` | [`sign`] |
//! | POST | `/api/signatures/audit` | [`audit`] |
//! | GET | `/verificar-documento/:code` | [`verify_code`] |

use crate::domain::config::{GatewayConfig, OperatingMode};
use crate::domain::error::{ApiError, ApiResult};
use crate::domain::types::{
    AuditResponse, CreateCodeBody, CreateCodeResponse, PayloadEnvelope, SignBody, VerifyResponse,
};
use crate::middleware::{create_cors_layer, track_requests};
use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{middleware, Json, Router};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};
use vx_01_document_verification::{
    DocumentVerificationApi, VerificationError, VERIFICATION_PATH,
};
use vx_telemetry::{
    encode_metrics, metric_inc, CODES_ISSUED, CODE_ISSUE_DURATION, CODE_VERIFICATIONS, PAYLOADS_ENCODED,
    PAYLOAD_DECODE_FAILURES,
};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub api: Arc<dyn DocumentVerificationApi>,
    pub mode: OperatingMode,
}

/// Build the HTTP router with its middleware stack.
pub fn build_router(api: Arc<dyn DocumentVerificationApi>, config: &GatewayConfig) -> Router {
    let state = AppState {
        api,
        mode: config.mode,
    };

    Router::new()
        .route("/health", get(health_check))
        .route("/metrics", get(metrics))
        .route(
            "/api/documents/:document_id/verification-codes",
            get(list_codes).post(create_code),
        )
        .route(
            "/api/verification-codes/:code",
            get(verify_code).delete(revoke_code),
        )
        .route("/api/verification-codes/:code/qr", get(qr_code))
        .route("/api/signatures", post(sign))
        .route("/api/signatures/audit", post(audit))
        .route(&format!("{VERIFICATION_PATH}/:code"), get(verify_code))
        .route_layer(middleware::from_fn(track_requests))
        .layer(
            ServiceBuilder::new()
                .layer(create_cors_layer(&config.cors))
                .layer(TimeoutLayer::new(config.timeouts.request))
                .map_response(|res: Response<_>| res.map(axum::body::Body::new))
                .layer(TraceLayer::new_for_http()),
        )
        .with_state(state)
}

/// Create, render and store a verification code for a document.
pub async fn create_code(
    State(state): State<AppState>,
    Path(document_id): Path<i64>,
    Json(body): Json<CreateCodeBody>,
) -> ApiResult<impl IntoResponse> {
    let timer = CODE_ISSUE_DURATION.start_timer();
    let issued = state.api.issue_code(body.into_request(document_id)).await?;
    timer.observe_duration();

    metric_inc!(CODES_ISSUED, &[issued.record.kind.as_str()]);

    Ok((
        StatusCode::CREATED,
        Json(CreateCodeResponse {
            issued,
            legally_binding: state.mode == OperatingMode::Production,
        }),
    ))
}

/// Every code issued for a document.
pub async fn list_codes(
    State(state): State<AppState>,
    Path(document_id): Path<i64>,
) -> ApiResult<impl IntoResponse> {
    let records = state.api.codes_for_document(document_id).await?;
    Ok(Json(records))
}

/// Look up a code. Failures answer `{"valid": false, "error": ...}`.
pub async fn verify_code(State(state): State<AppState>, Path(code): Path<String>) -> Response {
    match state.api.verify_code(&code).await {
        Ok(record) => {
            metric_inc!(CODE_VERIFICATIONS, &["valid"]);
            Json(VerifyResponse {
                valid: true,
                record,
            })
            .into_response()
        }
        Err(e) => {
            metric_inc!(CODE_VERIFICATIONS, &[verification_outcome(&e)]);
            let err = ApiError::from(e);
            (
                err.status,
                Json(serde_json::json!({ "valid": false, "error": err.body })),
            )
                .into_response()
        }
    }
}

/// Revoke an active code.
pub async fn revoke_code(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> ApiResult<impl IntoResponse> {
    let record = state.api.revoke_code(&code).await?;
    Ok(Json(record))
}

/// QR symbol of the URL an issued code points to.
pub async fn qr_code(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> ApiResult<impl IntoResponse> {
    let svg = state.api.qr_code_svg(&code).await?;
    Ok(([(header::CONTENT_TYPE, "image/svg+xml")], svg))
}

/// Encode a signature payload.
pub async fn sign(
    State(state): State<AppState>,
    Json(body): Json<SignBody>,
) -> ApiResult<impl IntoResponse> {
    let payload = state
        .api
        .sign(body.user_id, body.document_id, &body.verification_code)?;
    metric_inc!(PAYLOADS_ENCODED);
    Ok(Json(PayloadEnvelope { payload }))
}

/// Decode a signature payload and match it to its registry record.
pub async fn audit(
    State(state): State<AppState>,
    Json(body): Json<PayloadEnvelope>,
) -> ApiResult<impl IntoResponse> {
    let (payload, record) = state
        .api
        .audit_signature(&body.payload)
        .await
        .inspect_err(|e| {
            if matches!(e, VerificationError::MalformedPayload(_)) {
                metric_inc!(PAYLOAD_DECODE_FAILURES);
            }
        })?;

    info!(
        user_id = payload.user_id,
        document_id = payload.document_id,
        code = %record.code,
        "Signature audited"
    );

    Ok(Json(AuditResponse {
        payload,
        record,
        legally_binding: state.mode == OperatingMode::Production,
    }))
}

/// Health check endpoint
pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "api-gateway",
        "mode": state.mode.as_str(),
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Prometheus text exposition
pub async fn metrics() -> Response {
    match encode_metrics() {
        Ok(text) => (
            [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
            text,
        )
            .into_response(),
        Err(e) => {
            warn!(error = %e, "Failed to encode metrics");
            ApiError::internal().into_response()
        }
    }
}

fn verification_outcome(e: &VerificationError) -> &'static str {
    match e {
        VerificationError::CodeNotFound(_) => "not_found",
        VerificationError::InvalidCodeFormat(_) => "malformed",
        VerificationError::CodeInactive { .. } => "inactive",
        VerificationError::CodeExpired(_) => "expired",
        _ => "error",
    }
}
