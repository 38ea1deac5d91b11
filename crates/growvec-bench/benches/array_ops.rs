//! Criterion micro-benchmarks for append, positional edits, and traversal.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use growvec::GrowVec;
use growvec_bench::{reserved, sequential};

const N: usize = 10_000;

fn bench_push(c: &mut Criterion) {
    let mut group = c.benchmark_group("push");

    group.bench_function("amortized_growth_10k", |b| {
        b.iter(|| {
            let mut v = GrowVec::new();
            for i in 0..N as u64 {
                v.push(black_box(i));
            }
            black_box(v.len())
        })
    });

    group.bench_function("preallocated_10k", |b| {
        b.iter(|| {
            let mut v = reserved(N);
            for i in 0..N as u64 {
                v.push(black_box(i));
            }
            black_box(v.len())
        })
    });

    group.finish();
}

fn bench_positional(c: &mut Criterion) {
    let mut group = c.benchmark_group("positional");

    group.bench_function("insert_front_1k", |b| {
        b.iter(|| {
            let mut v = reserved(1024);
            for i in 0..1000u64 {
                v.insert(0, black_box(i));
            }
            black_box(v.len())
        })
    });

    let remove_template = sequential(1000);
    group.bench_function("remove_front_1k", |b| {
        b.iter(|| {
            let mut v = remove_template.clone();
            while !v.is_empty() {
                black_box(v.remove(0));
            }
        })
    });

    let pop_template = sequential(N);
    group.bench_function("pop_10k", |b| {
        b.iter(|| {
            let mut v = pop_template.clone();
            while let Some(x) = v.pop() {
                black_box(x);
            }
        })
    });

    group.finish();
}

fn bench_traversal(c: &mut Criterion) {
    let mut group = c.benchmark_group("traversal");
    let v = sequential(N);

    group.bench_function("iter_sum_10k", |b| {
        b.iter(|| black_box(v.iter().sum::<u64>()))
    });

    group.bench_function("index_sum_10k", |b| {
        b.iter(|| {
            let mut total = 0u64;
            for i in 0..v.len() {
                total += v[i];
            }
            black_box(total)
        })
    });

    group.bench_function("checked_sum_10k", |b| {
        b.iter(|| {
            let mut total = 0u64;
            for i in 0..v.len() {
                total += v.at(i).unwrap();
            }
            black_box(total)
        })
    });

    group.finish();
}

fn bench_reallocation(c: &mut Criterion) {
    let mut group = c.benchmark_group("reallocation");

    group.bench_function("reserve_then_fill_10k", |b| {
        b.iter(|| {
            let mut v = GrowVec::new();
            v.reserve(N);
            v.extend(0..N as u64);
            black_box(v.capacity())
        })
    });

    group.bench_function("resize_exact_fit_10k", |b| {
        b.iter(|| {
            let mut v: GrowVec<u64> = GrowVec::new();
            v.resize(N);
            black_box(v.capacity())
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_push,
    bench_positional,
    bench_traversal,
    bench_reallocation
);
criterion_main!(benches);
