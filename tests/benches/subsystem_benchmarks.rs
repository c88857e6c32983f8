//! # VecinoXpress Subsystem Benchmarks
//!
//! | Subsystem | Operation | Target |
//! |-----------|-----------|--------|
//! | vx-01 Document Verification | Code generation | < 10µs |
//! | vx-01 Document Verification | Payload decode | < 5µs |
//! | vx-01 Document Verification | Issuance with QR | < 5ms |

use criterion::{criterion_group, criterion_main, Criterion};
use vx_tests::benchmarks::vx_01_document_verification;

fn bench_document_verification(c: &mut Criterion) {
    vx_01_document_verification::register_benchmarks(c);
}

criterion_group!(benches, bench_document_verification);
criterion_main!(benches);
