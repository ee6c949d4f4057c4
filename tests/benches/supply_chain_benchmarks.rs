//! # Pharma-Chain Benchmarks
//!
//! | Area | Operation | Target |
//! |------|-----------|--------|
//! | Trace code | encode + decode | < 5μs |
//! | Transfer | produce + hospital purchase | < 1ms |
//! | Trace | decode + holder scan over N hospitals | linear in N |

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use pharma_ledger::test_utils::make_service;
use pharma_ledger::trace_code::{self, Provenance};
use pharma_ledger::{InMemoryWorldState, SupplyChainApi};
use rand::Rng;
use std::sync::Arc;
use std::time::Duration;

fn bench_trace_code(c: &mut Criterion) {
    let mut group = c.benchmark_group("trace-code");

    let provenance = Provenance::new("Amoxicillin", "AcmeCo", 12.75, "2024-03-01T08:30:00Z");
    let mut rng = rand::thread_rng();

    group.bench_function("encode", |b| {
        b.iter(|| black_box(trace_code::encode(&provenance, rng.gen()).ok()))
    });

    let code = trace_code::encode(&provenance, 42).unwrap_or_default();
    group.bench_function("decode", |b| {
        b.iter(|| black_box(trace_code::decode(&code).ok()))
    });

    group.finish();
}

fn bench_transfer(c: &mut Criterion) {
    let mut group = c.benchmark_group("transfer");
    group.measurement_time(Duration::from_secs(5));

    let service = make_service(Arc::new(InMemoryWorldState::new()));
    let _ = service.create_manufacturer("AcmeCo", "");
    let _ = service.create_hospital("GenHosp", "");

    group.bench_function("produce_and_buy", |b| {
        b.iter(|| {
            let _ = service.produce_drug("AcmeCo", "Aspirin", 9.99);
            black_box(service.hospital_buys_drug("GenHosp", "AcmeCo", "Aspirin").ok())
        })
    });

    group.finish();
}

fn bench_trace_scan(c: &mut Criterion) {
    let mut group = c.benchmark_group("trace-scan");

    for hospitals in [1usize, 10, 100] {
        let service = make_service(Arc::new(InMemoryWorldState::new()));
        let _ = service.create_manufacturer("AcmeCo", "");
        for i in 0..hospitals {
            let _ = service.create_hospital(&format!("Hospital{:03}", i), "");
        }
        let code = service
            .produce_drug("AcmeCo", "Aspirin", 9.99)
            .unwrap_or_default();
        let last = format!("Hospital{:03}", hospitals - 1);
        let _ = service.hospital_buys_drug(&last, "AcmeCo", "Aspirin");

        group.throughput(Throughput::Elements(hospitals as u64));
        group.bench_with_input(BenchmarkId::new("holder_scan", hospitals), &code, |b, code| {
            b.iter(|| black_box(service.trace_drug(code).ok()))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_trace_code, bench_transfer, bench_trace_scan);
criterion_main!(benches);
