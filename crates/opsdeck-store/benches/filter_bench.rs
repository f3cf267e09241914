// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Criterion benchmarks for the collection name filter.

use criterion::{Criterion, black_box, criterion_group, criterion_main};

use opsdeck_core::types::{Service, ServiceId};
use opsdeck_store::NameFilter;

fn services(count: usize) -> Vec<Service> {
    (0..count)
        .map(|i| Service {
            id: ServiceId(i as u64),
            name: if i % 10 == 0 {
                format!("Voxco Service {i}")
            } else {
                format!("Tenant Service {i}")
            },
            health: Default::default(),
            description: None,
            updated_at: None,
        })
        .collect()
}

/// Benchmark filtering at list sizes from a small tenant to a large fleet.
///
/// One in ten names matches, which is the shape the dashboard sees when a
/// deployment filters a shared status feed down to its own services.
fn bench_filter_apply(c: &mut Criterion) {
    let sizes: &[(&str, usize)] = &[("100", 100), ("1k", 1_000), ("10k", 10_000)];

    let mut group = c.benchmark_group("name_filter_apply");
    for &(label, size) in sizes {
        let items = services(size);
        let filter = NameFilter::new("Voxco", false);
        group.bench_function(label, |b| {
            b.iter(|| black_box(filter.apply(black_box(&items))));
        });
    }
    group.finish();

    let items = services(1_000);
    let folded = NameFilter::new("voxco", true);
    c.bench_function("name_filter_apply_case_insensitive (1k)", |b| {
        b.iter(|| black_box(folded.apply(black_box(&items))));
    });
}

criterion_group!(benches, bench_filter_apply);
criterion_main!(benches);
