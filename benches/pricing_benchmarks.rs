//! Performance benchmarks for the Enrollment Pricing Engine.
//!
//! Pricing runs on every form change, so a quote should stay far below a
//! frame budget:
//! - Single quote through the core: < 20μs mean
//! - Single quote through the HTTP router: < 200μs mean
//! - Batch of 100 quotes: < 20ms mean
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use enrollment_pricing::api::{AppState, create_router};
use enrollment_pricing::calculation::PriceCalculator;
use enrollment_pricing::config::ConfigLoader;
use enrollment_pricing::models::{CourseOffering, EnrollmentSelection};

use axum::{body::Body, http::Request};
use tower::ServiceExt;

const NOW: &str = "2026-01-01T10:00:00";

/// Creates a test state with loaded configuration.
fn create_test_state() -> AppState {
    let config = ConfigLoader::load("./config/default").expect("Failed to load config");
    AppState::new(config)
}

fn create_course(id: u64) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "name": format!("English {}", id),
        "level": if id % 2 == 0 { "Advanced" } else { "Beginner" },
        "course_fee_per_hour": 100 + id,
        "week_length": 10,
        "total_length": 4,
        "start_dates": ["2026-02-07T19:00:00", "2026-02-09T10:00:00"]
    })
}

/// Creates a quote body; every rule fires when `persons` is 5 or more.
fn create_quote_body(id: u64, persons: u32) -> String {
    serde_json::json!({
        "course": create_course(id),
        "selection": {
            "start_date": "2026-02-07",
            "start_time": "19:00",
            "person_count": persons,
            "intensive_course": true,
            "supplementary": true,
            "personalized": true,
            "excursions": true
        },
        "now": NOW
    })
    .to_string()
}

fn post_request(uri: &str, body: String) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("Content-Type", "application/json")
        .body(Body::from(body))
        .unwrap()
}

/// Benchmark: the pricing core alone.
fn bench_core_quote(c: &mut Criterion) {
    let loader = ConfigLoader::load("./config/default").expect("Failed to load config");
    let calculator = PriceCalculator::new(loader.rates().clone());
    let course: CourseOffering = serde_json::from_value(create_course(1)).unwrap();
    let request: serde_json::Value = serde_json::from_str(&create_quote_body(1, 6)).unwrap();
    let selection: EnrollmentSelection =
        serde_json::from_value(request["selection"].clone()).unwrap();
    let now = serde_json::from_value(request["now"].clone()).unwrap();

    c.bench_function("core_quote", |b| {
        b.iter(|| black_box(calculator.quote(Some(&course), &selection, now)))
    });
}

/// Benchmark: one quote through the router.
fn bench_single_quote(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let router = create_router(create_test_state());
    let body = create_quote_body(1, 6);

    c.bench_function("single_quote", |b| {
        b.to_async(&rt).iter(|| async {
            let router = router.clone();
            let response = router
                .oneshot(post_request("/quote", body.clone()))
                .await
                .unwrap();
            black_box(response)
        })
    });
}

/// Benchmark: batch of 100 quotes with varying courses and group sizes.
fn bench_batch_100(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let state = create_test_state();

    let requests: Vec<String> = (0..100)
        .map(|i| create_quote_body(i, (i % 8) as u32 + 1))
        .collect();

    let mut group = c.benchmark_group("batch_processing");
    group.throughput(Throughput::Elements(100));

    group.bench_function("batch_100", |b| {
        b.to_async(&rt).iter(|| async {
            let mut results = Vec::with_capacity(100);
            for body in &requests {
                let router = create_router(state.clone());
                let response = router
                    .oneshot(post_request("/quote", body.clone()))
                    .await
                    .unwrap();
                results.push(response);
            }
            black_box(results)
        })
    });

    group.finish();
}

/// Benchmark: course search over catalogs of growing size.
fn bench_search_scaling(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let state = create_test_state();

    let mut group = c.benchmark_group("search_scaling");

    for catalog_size in [10u64, 100, 1000].iter() {
        let router = create_router(state.clone());
        let courses: Vec<serde_json::Value> = (0..*catalog_size).map(create_course).collect();
        let body = serde_json::json!({
            "courses": courses,
            "filter": { "name": "english 1", "level": "beginner" },
            "page": 2
        })
        .to_string();

        group.throughput(Throughput::Elements(*catalog_size));
        group.bench_with_input(
            BenchmarkId::new("courses", catalog_size),
            catalog_size,
            |b, _| {
                b.to_async(&rt).iter(|| async {
                    let router = router.clone();
                    let response = router
                        .oneshot(post_request("/courses/search", body.clone()))
                        .await
                        .unwrap();
                    black_box(response)
                })
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_core_quote,
    bench_single_quote,
    bench_batch_100,
    bench_search_scaling,
);
criterion_main!(benches);
