//! Criterion benchmarks for the ranking hot path.
//!
//! Benchmarks:
//! 1. Full rank over universes of increasing size (both presets)
//! 2. Liquidity filter over the same universes

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use magicrank_core::{rank, RankingConfig, RecordSet, MIN_AVG_DAILY_LIQUIDITY};

// ── Helpers ──────────────────────────────────────────────────────────

fn make_universe(n: usize) -> RecordSet {
    let header = [
        "TICKER",
        "PRECO",
        "P/L",
        "ROE",
        "EV/EBIT",
        "ROIC",
        " LIQUIDEZ MEDIA DIARIA",
    ];
    let rows = (0..n).map(|i| {
        let x = i as f64;
        vec![
            format!("TK{i:05}"),
            format!("{:.2}", 10.0 + (x * 0.7).sin() * 5.0),
            format!("{:.2}", (x * 0.3).cos() * 20.0),
            format!("{:.2}", (x * 0.11).sin() * 40.0),
            format!("{:.2}", (x * 0.17).cos() * 15.0),
            format!("{:.2}", (x * 0.05).sin() * 30.0),
            format!("{:.0}", 500_000.0 + (i % 97) as f64 * 40_000.0),
        ]
    });
    RecordSet::from_rows(&header, rows).expect("bench header is complete")
}

// ── Benchmarks ───────────────────────────────────────────────────────

fn bench_rank(c: &mut Criterion) {
    let mut group = c.benchmark_group("rank");
    for n in [100usize, 1_000, 10_000] {
        let set = make_universe(n);
        for config in RankingConfig::presets() {
            group.bench_with_input(BenchmarkId::new(config.name.clone(), n), &set, |b, set| {
                b.iter(|| rank(black_box(set), black_box(&config)))
            });
        }
    }
    group.finish();
}

fn bench_liquidity_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("retain_liquid");
    for n in [1_000usize, 10_000] {
        let set = make_universe(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &set, |b, set| {
            b.iter(|| {
                let mut s = set.clone();
                black_box(s.retain_liquid(MIN_AVG_DAILY_LIQUIDITY))
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_rank, bench_liquidity_filter);
criterion_main!(benches);
