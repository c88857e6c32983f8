//! # Integration Test Flows
//!
//! Exercises the document verification subsystem through its public API
//! with the production adapters (in-memory store, SVG QR encoder):
//!
//! 1. **Issue → Sign → Audit**: a signing event ties a signer to the issued code
//! 2. **Issue → Verify → Revoke**: lifecycle of a document code
//! 3. **Mobile signing**: single-use codes under concurrent lookups

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use chrono::{Duration, TimeZone, Utc};
    use regex::Regex;

    use vx_01_document_verification::{
        generate_signature_data, generate_verification_code, parse_signature_data,
        verification_url, CodeKind, CodeStatus, DocumentVerificationApi,
        DocumentVerificationService, InMemoryRecordStore, IssueCodeRequest, ServiceConfig,
        SvgQrEncoder, VerificationError,
    };

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    fn service() -> Arc<dyn DocumentVerificationApi> {
        Arc::new(DocumentVerificationService::new(
            InMemoryRecordStore::new(),
            SvgQrEncoder::default(),
            ServiceConfig::default(),
        ))
    }

    fn code_pattern() -> Regex {
        Regex::new(r"^[0-9A-F]{2}-[0-9A-F]{4}-[0-9A-F]{2}$").unwrap()
    }

    // =============================================================================
    // PURE OPERATIONS
    // =============================================================================

    /// Same document and title at the same instant still yields distinct codes.
    #[test]
    fn test_contract_codes_are_salted() {
        let at = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
        let first = generate_verification_code(42, "Contrato de Arriendo", Some(at)).unwrap();
        let second = generate_verification_code(42, "Contrato de Arriendo", Some(at)).unwrap();

        let pattern = code_pattern();
        assert!(pattern.is_match(first.as_str()));
        assert!(pattern.is_match(second.as_str()));
        assert_ne!(first, second);
    }

    #[test]
    fn test_verification_url_for_generated_code() {
        let code = generate_verification_code(42, "Contrato de Arriendo", None).unwrap();
        assert_eq!(
            verification_url(code.as_str()),
            format!("/verificar-documento/{code}")
        );
    }

    #[test]
    fn test_signature_payload_round_trip() {
        let before = Utc::now();
        let raw = generate_signature_data(7, 42, "AB-12CD-EF").unwrap();
        let payload = parse_signature_data(&raw).unwrap();

        assert_eq!(payload.user_id, 7);
        assert_eq!(payload.document_id, 42);
        assert_eq!(payload.verification_code, "AB-12CD-EF");

        let signed_at = payload.signed_at().unwrap();
        assert!(signed_at >= before - Duration::seconds(1));
        assert!(signed_at <= Utc::now() + Duration::seconds(1));
    }

    #[test]
    fn test_rejects_invalid_input() {
        assert!(matches!(
            generate_verification_code(0, "Contrato", None),
            Err(VerificationError::InvalidInput(_))
        ));
        assert!(matches!(
            generate_verification_code(42, "", None),
            Err(VerificationError::InvalidInput(_))
        ));
        assert!(matches!(
            parse_signature_data("not json"),
            Err(VerificationError::MalformedPayload(_))
        ));
    }

    // =============================================================================
    // SERVICE FLOWS
    // =============================================================================

    #[tokio::test]
    async fn test_issue_sign_audit() {
        let api = service();
        let issued = api
            .issue_code(IssueCodeRequest::document(42, "Contrato de Arriendo"))
            .await
            .unwrap();
        assert!(code_pattern().is_match(issued.record.code.as_str()));
        assert!(issued.qr_svg.contains("<svg"));

        let raw = api.sign(7, 42, issued.record.code.as_str()).unwrap();
        let (payload, record) = api.audit_signature(&raw).await.unwrap();

        assert_eq!(payload.user_id, 7);
        assert_eq!(record.id, issued.record.id);
        assert_eq!(record.document_title, "Contrato de Arriendo");
    }

    #[tokio::test]
    async fn test_audit_rejects_payload_for_other_document() {
        let api = service();
        let issued = api
            .issue_code(IssueCodeRequest::document(42, "Contrato de Arriendo"))
            .await
            .unwrap();

        let raw = api.sign(7, 43, issued.record.code.as_str()).unwrap();
        let err = api.audit_signature(&raw).await.unwrap_err();
        assert!(matches!(
            err,
            VerificationError::DocumentMismatch {
                expected: 42,
                actual: 43
            }
        ));
        assert!(err.is_unrecognized_code());
    }

    #[tokio::test]
    async fn test_audit_rejects_unknown_code() {
        let api = service();
        let raw = api.sign(7, 42, "00-0000-00").unwrap();
        let err = api.audit_signature(&raw).await.unwrap_err();
        assert!(matches!(err, VerificationError::CodeNotFound(_)));
    }

    #[tokio::test]
    async fn test_verify_then_revoke() {
        let api = service();
        let issued = api
            .issue_code(IssueCodeRequest::document(10, "Declaración Jurada"))
            .await
            .unwrap();
        let code = issued.record.code.to_string();

        // Lookup is case-insensitive and repeatable for document codes
        let lower = code.to_lowercase();
        assert_eq!(api.verify_code(&lower).await.unwrap().id, issued.record.id);
        assert_eq!(api.verify_code(&code).await.unwrap().status, CodeStatus::Active);

        let revoked = api.revoke_code(&code).await.unwrap();
        assert_eq!(revoked.status, CodeStatus::Revoked);

        assert!(matches!(
            api.verify_code(&code).await,
            Err(VerificationError::CodeInactive {
                status: CodeStatus::Revoked,
                ..
            })
        ));
        assert!(api.revoke_code(&code).await.is_err());
    }

    #[tokio::test]
    async fn test_codes_for_document() {
        let api = service();
        for title in ["Contrato", "Anexo"] {
            api.issue_code(IssueCodeRequest::document(77, title))
                .await
                .unwrap();
        }
        api.issue_code(IssueCodeRequest::document(78, "Otro"))
            .await
            .unwrap();

        let codes = api.codes_for_document(77).await.unwrap();
        assert_eq!(codes.len(), 2);
        assert!(codes.iter().all(|r| r.document_id == 77));
    }

    #[tokio::test]
    async fn test_mobile_code_single_use_under_concurrency() {
        let api = service();
        let issued = api
            .issue_code(
                IssueCodeRequest::document(5, "Finiquito")
                    .with_kind(CodeKind::MobileSigning)
                    .with_user(3),
            )
            .await
            .unwrap();
        assert!(issued.url.starts_with("/sign-mobile/"));
        let code = issued.record.code.to_string();

        let lookups: Vec<_> = (0..8)
            .map(|_| {
                let api = Arc::clone(&api);
                let code = code.clone();
                tokio::spawn(async move { api.verify_code(&code).await })
            })
            .collect();

        let mut successes = 0;
        for result in futures::future::join_all(lookups).await {
            if result.unwrap().is_ok() {
                successes += 1;
            }
        }
        assert_eq!(successes, 1);
    }

    #[tokio::test]
    async fn test_ttl_override_bounds() {
        let api = service();
        for hours in [0, -5, i64::MAX] {
            let issued = api
                .issue_code(IssueCodeRequest::document(6, "Poder").with_ttl_hours(hours))
                .await;
            assert!(matches!(issued, Err(VerificationError::InvalidInput(_))));
        }

        let issued = api
            .issue_code(IssueCodeRequest::document(6, "Poder").with_ttl_hours(2))
            .await
            .unwrap();
        let lifetime = issued.record.expires_at.unwrap() - issued.record.created_at;
        assert_eq!(lifetime, Duration::hours(2));
    }
}
