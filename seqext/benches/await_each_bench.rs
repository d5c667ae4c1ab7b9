// Copyright 2026 seqext contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use seqext::{AsListExt, AwaitEachExt};
use std::hint::black_box;
use tokio::runtime::Runtime;

pub fn bench_await_each(c: &mut Criterion) {
    let mut group = c.benchmark_group("await_each");
    let sizes = [100usize, 1000, 10000];

    for &size in &sizes {
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |bencher, &size| {
            let rt = Runtime::new().unwrap();
            bencher.iter(|| {
                rt.block_on(async {
                    let items: Vec<u64> = (0..size as u64).collect();
                    let results = items
                        .await_each(|item| async move { item.wrapping_mul(31) })
                        .await;
                    black_box(results);
                });
            });
        });
    }
    group.finish();
}

pub fn bench_as_list(c: &mut Criterion) {
    let mut group = c.benchmark_group("as_list");
    let sizes = [100usize, 1000, 10000];

    for &size in &sizes {
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(
            BenchmarkId::new("already_vec", size),
            &size,
            |bencher, &size| {
                bencher.iter_with_setup(
                    || (0..size as u64).collect::<Vec<_>>(),
                    |items| black_box(items.as_list()),
                );
            },
        );

        group.bench_with_input(
            BenchmarkId::new("lazy_range", size),
            &size,
            |bencher, &size| {
                bencher.iter(|| black_box((0..size as u64).as_list()));
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_await_each, bench_as_list);
criterion_main!(benches);
