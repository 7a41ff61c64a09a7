// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rill_stream::Sequence;
use std::hint::black_box;
use std::time::Duration;
use tokio::runtime::Builder;
use tokio::time::advance;

fn bench_map_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("map_filter");

    for &size in &[100usize, 10_000] {
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |bencher, &size| {
            bencher.iter(|| {
                let collected = Sequence::of(0..size)
                    .map(|n| n * 3)
                    .filter(|n| n % 2 == 0)
                    .count()
                    .blocking_get();
                black_box(collected);
            });
        });
    }

    group.finish();
}

fn bench_delay_elements(c: &mut Criterion) {
    let mut group = c.benchmark_group("delay_elements_overhead");
    let duration = Duration::from_secs(1);

    group.throughput(Throughput::Elements(4));
    group.bench_function("four_elements", |bencher| {
        bencher.iter(|| {
            // Paused runtime: advancing time costs no wall-clock time
            let rt = Builder::new_current_thread()
                .enable_time()
                .start_paused(true)
                .build()
                .expect("runtime should build");

            rt.block_on(async {
                let pending = tokio::spawn(
                    Sequence::of([1, 2, 3, 4])
                        .delay_elements(duration)
                        .collect_list()
                        .get(),
                );
                advance(duration).await;
                black_box(pending.await)
            })
        });
    });

    group.finish();
}

criterion_group!(benches, bench_map_filter, bench_delay_elements);
criterion_main!(benches);
