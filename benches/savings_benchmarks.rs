//! Performance benchmarks for the Staffing Savings Engine.
//!
//! Covers the formula itself, a full session evaluation, a round trip
//! through the HTTP router, and loading the reference tables.
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use std::str::FromStr;

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use rust_decimal::Decimal;

use savings_engine::api::{AppState, create_router};
use savings_engine::calculation::{compute_savings, compute_savings_alt};
use savings_engine::config::ConfigLoader;
use savings_engine::data::ReferenceData;
use savings_engine::models::{Organization, OrganizationKind};
use savings_engine::session::CalculatorSession;

use axum::{body::Body, http::Request};
use tower::ServiceExt;

fn load_config() -> ConfigLoader {
    ConfigLoader::load("./config").expect("Failed to load config")
}

fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

/// Benchmark: both formulas on the reference inputs.
fn bench_formulas(c: &mut Criterion) {
    let (staff, agency, rn) = (dec("40.00"), dec("90.00"), dec("10.0"));

    let mut group = c.benchmark_group("formulas");
    group.bench_function("compute_savings", |b| {
        b.iter(|| compute_savings(black_box(staff), black_box(agency), black_box(rn)))
    });
    group.bench_function("compute_savings_alt", |b| {
        b.iter(|| compute_savings_alt(black_box(staff), black_box(agency), black_box(rn)))
    });
    group.finish();
}

/// Benchmark: select, edit and evaluate through a session.
fn bench_session_evaluate(c: &mut Criterion) {
    let data = ReferenceData::from_config(&load_config()).expect("Failed to load data");
    let organization = data
        .organization(OrganizationKind::Hospital, "160045")
        .expect("Missing hospital");

    c.bench_function("session_evaluate", |b| {
        b.iter(|| {
            let mut session = CalculatorSession::new(organization.clone());
            session.edit_rn_need("12.5");
            black_box(session.evaluate().expect("Evaluation failed"))
        })
    });
}

/// Benchmark: POST /calculate through the router.
fn bench_calculate_endpoint(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let state = AppState::from_config(&load_config()).expect("Failed to build state");
    let router = create_router(state);
    let body = serde_json::json!({ "kind": "hospital", "id": "160045", "rn_need": "12.5" })
        .to_string();

    c.bench_function("calculate_endpoint", |b| {
        b.to_async(&rt).iter(|| async {
            let router = router.clone();
            let response = router
                .oneshot(
                    Request::builder()
                        .method("POST")
                        .uri("/calculate")
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

/// Benchmark: evaluate every organization in both tables.
fn bench_evaluate_all(c: &mut Criterion) {
    let data = ReferenceData::from_config(&load_config()).expect("Failed to load data");
    let organizations: Vec<Organization> = data
        .health_systems()
        .iter()
        .cloned()
        .map(Organization::from)
        .chain(data.hospitals().iter().cloned().map(Organization::from))
        .collect();

    let mut group = c.benchmark_group("batch_processing");
    group.throughput(Throughput::Elements(organizations.len() as u64));
    group.bench_with_input(
        BenchmarkId::new("evaluate_all", organizations.len()),
        &organizations,
        |b, organizations| {
            b.iter(|| {
                organizations
                    .iter()
                    .map(|org| CalculatorSession::new(org.clone()).evaluate().expect("Evaluation failed").savings())
                    .sum::<Decimal>()
            })
        },
    );
    group.finish();
}

/// Benchmark: parse both reference tables from disk.
fn bench_load_tables(c: &mut Criterion) {
    let config = load_config();
    c.bench_function("load_tables", |b| {
        b.iter(|| black_box(ReferenceData::from_config(&config).expect("Failed to load data")))
    });
}

criterion_group!(
    benches,
    bench_formulas,
    bench_session_evaluate,
    bench_calculate_endpoint,
    bench_evaluate_all,
    bench_load_tables
);
criterion_main!(benches);
