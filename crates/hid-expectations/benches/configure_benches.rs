//! Benchmarks for table composition and lookup.
//!
//! Run with: cargo bench --bench configure_benches

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use logi_hid_expectations::prelude::*;
use std::hint::black_box;

fn bench_configure(c: &mut Criterion) {
    let mut group = c.benchmark_group("configure");
    for version in [
        GuidelineVersion::V2_0,
        GuidelineVersion::V2_8,
        GuidelineVersion::V3_3,
    ] {
        group.bench_with_input(
            BenchmarkId::from_parameter(version),
            &version,
            |b, &version| {
                b.iter(|| ExpectationEngine::new(black_box(EngineConfig::productivity(version))));
            },
        );
    }
    group.finish();
}

fn bench_full_table_lookup(c: &mut Criterion) {
    let Ok(engine) = ExpectationEngine::new(EngineConfig::productivity(GuidelineVersion::V3_3))
    else {
        return;
    };
    let keys: Vec<KeyId> = engine.table().keys().collect();

    c.bench_function("lookup_full_table_windows", |b| {
        b.iter(|| {
            for &key in &keys {
                black_box(engine.lookup(black_box(key), OsVariant::Windows));
            }
        });
    });

    c.bench_function("lookup_full_table_all_hosts", |b| {
        b.iter(|| {
            for &key in &keys {
                for os in OsVariant::ALL {
                    black_box(engine.try_lookup(black_box(key), os).is_ok());
                }
            }
        });
    });
}

fn bench_protocol_switch(c: &mut Criterion) {
    let Ok(mut engine) = ExpectationEngine::new(EngineConfig::productivity(GuidelineVersion::V3_0))
    else {
        return;
    };
    c.bench_function("protocol_round_trip", |b| {
        b.iter(|| {
            engine.use_protocol(Protocol::Boot);
            engine.use_protocol(Protocol::Report);
        });
    });
}

criterion_group!(
    benches,
    bench_configure,
    bench_full_table_lookup,
    bench_protocol_switch
);
criterion_main!(benches);
