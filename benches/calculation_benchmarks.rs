//! Performance benchmarks for the Weekly Payroll Engine.
//!
//! This benchmark suite covers the calculation core and the HTTP surface:
//! - Single daily salary calculation
//! - Weekly payroll roll-up
//! - Full API round-trip for a weekly request
//! - Batches of weekly requests
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use payroll_engine::api::{AppState, create_router};
use payroll_engine::calculation::{
    NightOvertimeRule, RateTable, calculate_daily_salary, calculate_weekly_payroll,
};
use payroll_engine::config::ConfigLoader;
use payroll_engine::models::{AttendanceRecord, ClockHour, DayType, PayrollConfig};

use axum::{body::Body, http::Request};
use rust_decimal::Decimal;
use tower::ServiceExt;

/// Creates a test state with loaded configuration.
fn create_test_state() -> AppState {
    let config = ConfigLoader::load("./config/weekly_payroll").expect("Failed to load config");
    AppState::new(config)
}

fn hour(h: u8) -> ClockHour {
    ClockHour::new(h).unwrap()
}

/// A working week mixing day shifts, a night shift, overtime and rest days.
fn mixed_week_config() -> PayrollConfig {
    PayrollConfig {
        base_daily_rate: Decimal::from(500),
        max_regular_hours: 8,
        weekly_schedule: vec![
            AttendanceRecord::present(DayType::Normal, hour(9), hour(18)),
            AttendanceRecord::present(DayType::Normal, hour(9), hour(21)),
            AttendanceRecord::present(DayType::Normal, hour(22), hour(6)),
            AttendanceRecord::present(DayType::SpecialNonWorking, hour(11), hour(1)),
            AttendanceRecord::present(DayType::Normal, hour(9), hour(18)),
            AttendanceRecord::absent(DayType::RestDay),
            AttendanceRecord::present(DayType::RegularHolidayAndRest, hour(9), hour(18)),
        ],
    }
}

/// Creates a weekly request body with overtime and night shifts.
fn create_weekly_request_json() -> serde_json::Value {
    serde_json::json!({
        "employee": {
            "id": "emp_bench_001",
            "base_daily_rate": "500.0",
            "max_regular_hours": 8
        },
        "schedule": [
            {"day_type": "N", "in_hour": 9, "out_hour": 18},
            {"day_type": "N", "in_hour": 9, "out_hour": 21},
            {"day_type": "N", "in_hour": 22, "out_hour": 6},
            {"day_type": "SNWH", "in_hour": 11, "out_hour": 1},
            {"day_type": "N", "in_hour": 9, "out_hour": 18},
            {"day_type": "R", "in_hour": 9, "out_hour": 9},
            {"day_type": "RHR", "in_hour": 9, "out_hour": 18}
        ]
    })
}

/// Benchmarks a single daily salary calculation with overtime.
fn bench_daily_salary(c: &mut Criterion) {
    let rates = RateTable::statutory();
    let record = AttendanceRecord::present(DayType::Normal, hour(11), hour(1));

    c.bench_function("daily_salary_with_overtime", |b| {
        b.iter(|| {
            calculate_daily_salary(
                black_box(&record),
                black_box(Decimal::from(500)),
                black_box(8),
                &rates,
                NightOvertimeRule::Carryover,
            )
            .unwrap()
        })
    });
}

/// Benchmarks the weekly roll-up over a mixed schedule.
fn bench_weekly_payroll(c: &mut Criterion) {
    let rates = RateTable::statutory();
    let config = mixed_week_config();

    c.bench_function("weekly_payroll_mixed_week", |b| {
        b.iter(|| {
            calculate_weekly_payroll(
                black_box(&config),
                &rates,
                NightOvertimeRule::Carryover,
            )
            .unwrap()
        })
    });
}

/// Benchmarks a full API round-trip for a weekly request.
fn bench_api_round_trip(c: &mut Criterion) {
    let runtime = tokio::runtime::Runtime::new().unwrap();
    let state = create_test_state();
    let body = create_weekly_request_json().to_string();

    c.bench_function("api_weekly_round_trip", |b| {
        b.to_async(&runtime).iter(|| {
            let router = create_router(state.clone());
            let body = body.clone();
            async move {
                let response = router
                    .oneshot(
                        Request::builder()
                            .method("POST")
                            .uri("/payroll/weekly")
                            .header("Content-Type", "application/json")
                            .body(Body::from(body))
                            .unwrap(),
                    )
                    .await
                    .unwrap();
                black_box(response.status())
            }
        })
    });
}

/// Benchmarks batches of weekly calculations at increasing sizes.
fn bench_weekly_batches(c: &mut Criterion) {
    let rates = RateTable::statutory();
    let config = mixed_week_config();

    let mut group = c.benchmark_group("weekly_batches");
    for batch_size in [10usize, 100, 1000] {
        group.throughput(Throughput::Elements(batch_size as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(batch_size),
            &batch_size,
            |b, &batch_size| {
                b.iter(|| {
                    for _ in 0..batch_size {
                        black_box(
                            calculate_weekly_payroll(
                                &config,
                                &rates,
                                NightOvertimeRule::Carryover,
                            )
                            .unwrap(),
                        );
                    }
                })
            },
        );
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_daily_salary,
    bench_weekly_payroll,
    bench_api_round_trip,
    bench_weekly_batches
);
criterion_main!(benches);
