//! Performance benchmarks for the wage comparison engine.
//!
//! Covers the pure calculation path and the full HTTP round trip:
//! - Single comparison, engine only
//! - Each FIFO roster, engine only
//! - Single `/compare` request through the router
//! - Batch of 100 `/compare` requests
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rust_decimal::Decimal;

use wage_engine::api::{create_router, AppState, CompareRequest};
use wage_engine::calculation::{compare_scenarios, comparison_summary, FIFO_ROSTERS};
use wage_engine::config::ConfigLoader;
use wage_engine::models::{ComparisonInput, FifoOption, OvertimeOption};

use axum::{body::Body, http::Request};
use tower::ServiceExt;

/// Creates a test state with loaded configuration.
fn create_test_state() -> AppState {
    let config = ConfigLoader::load("./config").expect("Failed to load config");
    AppState::new(config)
}

/// A standard 40-hour week with overtime, the busiest engine path without FIFO.
fn standard_input() -> ComparisonInput {
    let mut input = ComparisonInput::new(Decimal::from(35), Decimal::from(40), Decimal::from(48));
    input.overtime = Some(OvertimeOption::new(Decimal::from(5), "1.5x"));
    input
}

fn compare_request(rate: u32) -> String {
    let mut request = CompareRequest::new(Decimal::from(rate), Decimal::from(40));
    request.overtime_enabled = rate % 2 == 0;
    request.overtime_hours = Some(Decimal::from(4));
    request.fifo_enabled = rate % 3 == 0;
    serde_json::to_string(&request).expect("Failed to serialize request")
}

/// Benchmark: one comparison, engine only.
fn bench_compare_engine(c: &mut Criterion) {
    let input = standard_input();

    c.bench_function("compare_engine", |b| {
        b.iter(|| {
            let comparison = compare_scenarios(black_box(&input));
            black_box(comparison_summary(&comparison))
        })
    });
}

/// Benchmark: one comparison per FIFO roster.
fn bench_fifo_rosters(c: &mut Criterion) {
    let mut group = c.benchmark_group("fifo_rosters");

    for roster in FIFO_ROSTERS.iter() {
        let mut input = standard_input();
        input.fifo = Some(FifoOption::new(roster.id));

        group.bench_with_input(BenchmarkId::new("roster", roster.id), &input, |b, input| {
            b.iter(|| black_box(compare_scenarios(input)))
        });
    }

    group.finish();
}

/// Benchmark: single `/compare` request through the router.
fn bench_compare_endpoint(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let router = create_router(create_test_state());
    let body = compare_request(35);

    c.bench_function("compare_endpoint", |b| {
        b.to_async(&rt).iter(|| async {
            let router = router.clone();
            let response = router
                .oneshot(
                    Request::builder()
                        .method("POST")
                        .uri("/compare")
                        .header("Content-Type", "application/json")
                        .body(Body::from(body.clone()))
                        .unwrap(),
                )
                .await
                .unwrap();
            black_box(response)
        })
    });
}

/// Benchmark: batch of 100 `/compare` requests with varied inputs.
fn bench_batch_100(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let state = create_test_state();

    let requests: Vec<String> = (0..100).map(|i| compare_request(25 + i)).collect();

    let mut group = c.benchmark_group("batch_processing");
    group.throughput(Throughput::Elements(100));

    group.bench_function("batch_100", |b| {
        b.to_async(&rt).iter(|| async {
            let mut results = Vec::with_capacity(100);
            for body in &requests {
                let router = create_router(state.clone());
                let response = router
                    .oneshot(
                        Request::builder()
                            .method("POST")
                            .uri("/compare")
                            .header("Content-Type", "application/json")
                            .body(Body::from(body.clone()))
                            .unwrap(),
                    )
                    .await
                    .unwrap();
                results.push(response);
            }
            black_box(results)
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_compare_engine,
    bench_fifo_rosters,
    bench_compare_endpoint,
    bench_batch_100,
);
criterion_main!(benches);
