//! Basic benchmarks for the `reuse_pool` package.

#![allow(
    missing_docs,
    reason = "No need for API documentation in benchmark code"
)]

use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use reuse_pool::{Key, ReusePool, Reusable};

criterion_group!(benches, entrypoint);
criterion_main!(benches);

const CAPACITY: usize = 1024;

#[derive(Default)]
struct Item {
    value: u64,
}

impl Reusable for Item {
    fn reset_for_reuse(&mut self) {
        self.value = 0;
    }
}

fn entrypoint(c: &mut Criterion) {
    let mut group = c.benchmark_group("rp_create");

    group.bench_function("with_default", |b| {
        b.iter(|| drop(black_box(ReusePool::<Item>::with_default(CAPACITY))));
    });

    group.finish();

    let mut group = c.benchmark_group("rp_cycle");

    group.bench_function("dequeue_enqueue", |b| {
        let mut pool = ReusePool::<Item>::with_default(CAPACITY);

        b.iter(|| {
            let key = pool.dequeue_first_available().unwrap();
            pool.get_mut(key).value = 1;
            pool.enqueue(black_box(key));
        });
    });

    group.bench_function("dequeue_unavailable_full", |b| {
        let mut pool = ReusePool::<Item>::with_default(CAPACITY);

        while pool.dequeue_first_available().is_some() {}

        b.iter(|| black_box(pool.dequeue_first_unavailable()));
    });

    group.bench_function("enqueue_every_other", |b| {
        b.iter_batched_ref(
            || {
                let mut pool = ReusePool::<Item>::with_default(CAPACITY);
                while pool.dequeue_first_available().is_some() {}
                pool
            },
            |pool| {
                let keys: Vec<Key> = pool
                    .unavailable_elements()
                    .step_by(2)
                    .map(|(key, _)| key)
                    .collect();

                for key in keys {
                    pool.enqueue(key);
                }
            },
            criterion::BatchSize::SmallInput,
        );
    });

    group.finish();
}
