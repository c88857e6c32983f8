//! # Gateway End-to-End Tests
//!
//! Drives the node's wiring (vx-node) through the REST router (vx-02):
//!
//! ```text
//! HTTP request ──→ Router ──→ DocumentVerificationService ──→ InMemoryRecordStore
//!                                        │
//!                                        └──→ SvgQrEncoder
//! ```

#[cfg(test)]
mod tests {
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Method, Request, StatusCode};
    use axum::Router;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use vx_02_api_gateway::{build_router, GatewayConfig, OperatingMode};
    use vx_node::build_verification_api;

    fn app(mode: OperatingMode) -> Router {
        let config = GatewayConfig {
            mode,
            public_base_url: "https://verify.vecinoxpress.cl".to_string(),
            ..GatewayConfig::default()
        };
        build_router(build_verification_api(&config), &config)
    }

    async fn call(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let request = match body {
            Some(json) => Request::builder()
                .method(method)
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => Request::builder()
                .method(method)
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        };
        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
    }

    /// Issue, sign, audit and look up a contract over HTTP.
    #[tokio::test]
    async fn test_contract_signing_flow() {
        let app = app(OperatingMode::Production);

        let (status, created) = call(
            &app,
            Method::POST,
            "/api/documents/42/verification-codes",
            Some(json!({ "title": "Contrato de Arriendo" })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        let code = created["record"]["code"].as_str().unwrap().to_string();
        assert_eq!(
            created["qr_url"],
            format!("https://verify.vecinoxpress.cl/verificar-documento/{code}")
        );

        let (status, signed) = call(
            &app,
            Method::POST,
            "/api/signatures",
            Some(json!({ "user_id": 7, "document_id": 42, "verification_code": code })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);

        let (status, audited) = call(
            &app,
            Method::POST,
            "/api/signatures/audit",
            Some(json!({ "payload": signed["payload"] })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(audited["payload"]["documentId"], 42);
        assert_eq!(audited["record"]["document_title"], "Contrato de Arriendo");
        assert_eq!(audited["legally_binding"], true);

        let (status, verified) =
            call(&app, Method::GET, &format!("/verificar-documento/{code}"), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(verified["valid"], true);
    }

    /// Two issuances for the same document never share a code.
    #[tokio::test]
    async fn test_repeated_issuance_distinct() {
        let app = app(OperatingMode::Demo);
        let mut codes = Vec::new();
        for _ in 0..2 {
            let (status, created) = call(
                &app,
                Method::POST,
                "/api/documents/42/verification-codes",
                Some(json!({ "title": "Contrato de Arriendo" })),
            )
            .await;
            assert_eq!(status, StatusCode::CREATED);
            assert_eq!(created["legally_binding"], false);
            codes.push(created["record"]["code"].as_str().unwrap().to_string());
        }
        assert_ne!(codes[0], codes[1]);
    }

    /// Unknown, malformed and tampered inputs all read "not recognized".
    #[tokio::test]
    async fn test_not_recognized_responses() {
        let app = app(OperatingMode::Production);

        let (status, body) = call(&app, Method::GET, "/verificar-documento/ZZ-ZZZZ-ZZ", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["valid"], false);
        assert_eq!(body["error"]["code"], "code_not_recognized");

        let (status, body) = call(
            &app,
            Method::POST,
            "/api/signatures/audit",
            Some(json!({ "payload": "{\"userId\":7}" })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "code_not_recognized");
    }

    #[tokio::test]
    async fn test_sign_rejects_non_positive_ids() {
        let app = app(OperatingMode::Production);
        let (status, body) = call(
            &app,
            Method::POST,
            "/api/signatures",
            Some(json!({ "user_id": 0, "document_id": 42, "verification_code": "AB-12CD-EF" })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "invalid_input");
    }
}
