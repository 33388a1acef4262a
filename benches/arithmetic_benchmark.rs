// ============================================================================
// Arithmetic Benchmarks
// ============================================================================
//
// Benchmark Categories:
// 1. Checked Integer - Signed and unsigned add/mul against overflow checks
// 2. Float Rounding - round_f64 across all seven modes
// 3. Integer Rounding - round_i64 across units and modes
// 4. Decimal - SafeDecimal arithmetic and rounding
// ============================================================================

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use finarith::prelude::*;
use std::hint::black_box;

// ============================================================================
// Checked Integer Benchmarks
// ============================================================================

fn benchmark_checked_integer(c: &mut Criterion) {
    let mut group = c.benchmark_group("checked_integer");

    let signed_pairs: Vec<(i64, i64)> = (0..1000i64)
        .map(|i| (i * 7_919 - 500_000, 1_000 - i * 3))
        .collect();
    let unsigned_pairs: Vec<(u64, u64)> = (0..1000u64).map(|i| (i * 7_919, i + 1)).collect();

    group.bench_function("signed_add", |b| {
        b.iter(|| {
            for &(x, y) in &signed_pairs {
                let _ = black_box(signed::add(black_box(x), black_box(y)));
            }
        });
    });

    group.bench_function("signed_mul", |b| {
        b.iter(|| {
            for &(x, y) in &signed_pairs {
                let _ = black_box(signed::mul(black_box(x), black_box(y)));
            }
        });
    });

    // Baseline for the quadrant checks above
    group.bench_function("std_checked_mul", |b| {
        b.iter(|| {
            for &(x, y) in &signed_pairs {
                black_box(black_box(x).checked_mul(black_box(y)));
            }
        });
    });

    group.bench_function("unsigned_mul", |b| {
        b.iter(|| {
            for &(x, y) in &unsigned_pairs {
                let _ = black_box(unsigned::mul(black_box(x), black_box(y)));
            }
        });
    });

    group.bench_function("signed_mul_overflow", |b| {
        b.iter(|| black_box(signed::mul(black_box(i64::MAX / 10), black_box(11))));
    });

    group.finish();
}

// ============================================================================
// Float Rounding Benchmarks
// ============================================================================

fn benchmark_round_f64(c: &mut Criterion) {
    let mut group = c.benchmark_group("round_f64");

    let values: Vec<f64> = (0..1000).map(|i| i as f64 * 1.0037 - 500.0).collect();

    for mode in RoundingMode::ALL {
        group.bench_with_input(BenchmarkId::new("mode", mode), &values, |b, values| {
            b.iter(|| {
                for &v in values {
                    let _ = black_box(round_f64(black_box(v), 2, mode));
                }
            });
        });
    }

    group.bench_function("named_mode", |b| {
        b.iter(|| black_box(round_f64(black_box(10.555), 2, black_box("round_half_even"))));
    });

    group.finish();
}

// ============================================================================
// Integer Rounding Benchmarks
// ============================================================================

fn benchmark_round_i64(c: &mut Criterion) {
    let mut group = c.benchmark_group("round_i64");

    let values: Vec<i64> = (0..1000i64).map(|i| i * 37 - 18_500).collect();

    for unit in [10i64, 100, 1_000_000].iter() {
        group.bench_with_input(BenchmarkId::new("half_even", unit), unit, |b, &unit| {
            b.iter(|| {
                for &v in &values {
                    let _ = black_box(round_i64(black_box(v), unit, RoundingMode::HalfEven));
                }
            });
        });
    }

    group.finish();
}

// ============================================================================
// Decimal Benchmarks
// ============================================================================

fn benchmark_safe_decimal(c: &mut Criterion) {
    let mut group = c.benchmark_group("safe_decimal");

    let amounts: Vec<SafeDecimal> = (0..1000i64)
        .map(|i| SafeDecimal::from_i64(i * 1_234).checked_div(SafeDecimal::from_i64(100)))
        .filter_map(Result::ok)
        .collect();
    let rate = SafeDecimal::from_i64(7);

    group.bench_function("mul_round", |b| {
        b.iter(|| {
            for &amount in &amounts {
                let _ = black_box(
                    amount
                        .checked_mul(rate)
                        .and_then(|v| v.div_round(SafeDecimal::from_i64(100), 2, RoundingMode::HalfEven)),
                );
            }
        });
    });

    let tax = TaxRule::new(
        SafeDecimal::from_i64(10),
        SafeDecimal::from_i64(100),
        SafeDecimal::from_i64(1_000),
    );

    group.bench_function("tax_rule", |b| {
        b.iter(|| {
            for &amount in &amounts {
                let _ = black_box(tax.calculate_tax(black_box(amount)));
            }
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_checked_integer,
    benchmark_round_f64,
    benchmark_round_i64,
    benchmark_safe_decimal,
);
criterion_main!(benches);
