//! Lookup micro-benchmarks: reserved keys, deep paths, and misses.

use criterion::{criterion_group, criterion_main, Criterion};
use fieldq_core::{extract, Record};
use serde_json::json;
use std::hint::black_box;

fn bench_lookup(c: &mut Criterion) {
    let tree = json!({
        "metadata": {
            "name": "api-0",
            "namespace": "prod",
            "creationTimestamp": "2021-05-01T00:00:00Z",
            "labels": {"tier": "backend", "critical": ""},
        },
        "spec": {
            "replicas": 3,
            "containers": [
                {"name": "app", "resources": {"limits": {"memory": "512Mi"}}},
                {"name": "sidecar", "resources": {"limits": {"memory": "64Mi"}}},
            ],
        },
    });
    let record = Record::new(&tree);

    c.bench_function("reserved_name", |b| {
        b.iter(|| extract(black_box(&record), black_box("name")))
    });
    c.bench_function("label_presence", |b| {
        b.iter(|| extract(black_box(&record), black_box("labels.critical")))
    });
    c.bench_function("deep_si_scalar", |b| {
        b.iter(|| {
            extract(
                black_box(&record),
                black_box("spec.containers.2.resources.limits.memory"),
            )
        })
    });
    c.bench_function("missing_path", |b| {
        b.iter(|| extract(black_box(&record), black_box("status.phase.reason")))
    });
}

criterion_group!(benches, bench_lookup);
criterion_main!(benches);
