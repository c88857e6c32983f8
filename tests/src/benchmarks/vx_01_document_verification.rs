//! # VX-01 Document Verification Benchmarks
//!
//! - Code generation: one SHA-256 over a short message plus 8 bytes of OS randomness
//! - Payload encode / decode: small JSON objects
//! - Issuance: generation, QR rendering and store insert together
//! - Code parsing under adversarial input

use criterion::{black_box, BenchmarkId, Criterion, Throughput};
use std::time::Duration;
use vx_01_document_verification::{
    generate_signature_data, generate_verification_code, parse_signature_data,
    DocumentVerificationApi, DocumentVerificationService, InMemoryRecordStore, IssueCodeRequest,
    QrEncoder, ServiceConfig, SvgQrEncoder, VerificationCode,
};

pub fn bench_code_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("vx-01-code-generation");
    group.measurement_time(Duration::from_secs(5));

    for title_len in [16usize, 256, 4096] {
        let title = "x".repeat(title_len);
        group.throughput(Throughput::Bytes(title_len as u64));
        group.bench_with_input(
            BenchmarkId::new("generate", title_len),
            &title,
            |b, title| b.iter(|| black_box(generate_verification_code(42, title, None))),
        );
    }

    group.finish();
}

pub fn bench_payload_codec(c: &mut Criterion) {
    let mut group = c.benchmark_group("vx-01-payload-codec");

    group.bench_function("encode", |b| {
        b.iter(|| black_box(generate_signature_data(7, 42, "AB-12CD-EF")))
    });

    let raw = generate_signature_data(7, 42, "AB-12CD-EF").unwrap_or_default();
    group.bench_function("decode", |b| b.iter(|| black_box(parse_signature_data(&raw))));

    group.bench_function("decode_garbage", |b| {
        b.iter(|| black_box(parse_signature_data("{\"userId\":\"seven\"}")))
    });

    group.finish();
}

pub fn bench_code_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("vx-01-code-parsing");
    let inputs = [
        ("canonical", "AB-12CD-EF".to_string()),
        ("lowercase_padded", "  ab-12cd-ef  ".to_string()),
        ("oversized", "A".repeat(64 * 1024)),
    ];
    for (name, input) in inputs.iter() {
        group.bench_with_input(BenchmarkId::new("parse", name), input, |b, input| {
            b.iter(|| black_box(VerificationCode::parse(input)))
        });
    }
    group.finish();
}

pub fn bench_qr_rendering(c: &mut Criterion) {
    let mut group = c.benchmark_group("vx-01-qr-rendering");
    group.sample_size(20);
    let encoder = SvgQrEncoder::default();
    group.bench_function("verification_url", |b| {
        b.iter(|| {
            black_box(encoder.encode_svg("https://www.cerfidoc.cl/verificar-documento/AB-12CD-EF"))
        })
    });
    group.finish();
}

pub fn bench_issuance(c: &mut Criterion) {
    let mut group = c.benchmark_group("vx-01-issuance");
    group.sample_size(20);

    let Ok(runtime) = tokio::runtime::Runtime::new() else {
        return;
    };
    let service = DocumentVerificationService::new(
        InMemoryRecordStore::new(),
        SvgQrEncoder::default(),
        ServiceConfig::default(),
    );

    group.bench_function("issue_code", |b| {
        b.iter(|| {
            runtime.block_on(async {
                black_box(
                    service
                        .issue_code(IssueCodeRequest::document(42, "Contrato de Arriendo"))
                        .await,
                )
            })
        })
    });

    group.finish();
}

pub fn register_benchmarks(c: &mut Criterion) {
    bench_code_generation(c);
    bench_payload_codec(c);
    bench_code_parsing(c);
    bench_qr_rendering(c);
    bench_issuance(c);
}
