//! Benchmarks for list push/pop/edit churn.
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

use slotlist::List;

const N: usize = 10_000;

fn bench_push_pop(c: &mut Criterion) {
    let mut group = c.benchmark_group("push_pop");
    group.throughput(Throughput::Elements(N as u64));

    group.bench_function("push_back_pop_front", |b| {
        b.iter(|| {
            let mut list: List<u64> = List::new();
            for i in 0..N as u64 {
                list.push_back(black_box(i));
            }
            while let Ok(v) = list.pop_front() {
                black_box(v);
            }
        })
    });

    group.bench_function("push_front_pop_back", |b| {
        b.iter(|| {
            let mut list: List<u64> = List::new();
            for i in 0..N as u64 {
                list.push_front(black_box(i));
            }
            while let Ok(v) = list.pop_back() {
                black_box(v);
            }
        })
    });

    group.finish();
}

fn bench_positional(c: &mut Criterion) {
    let mut group = c.benchmark_group("positional");
    group.throughput(Throughput::Elements(N as u64));

    group.bench_function("interior_insert_remove", |b| {
        let mut list: List<u64> = (0..3).collect();
        let middle = list.find(&1);
        b.iter(|| {
            for i in 0..N as u64 {
                let cursor = list.insert(middle, black_box(i));
                black_box(list.remove(cursor).unwrap());
            }
        })
    });

    group.finish();
}

fn bench_scan(c: &mut Criterion) {
    let mut group = c.benchmark_group("scan");

    let list: List<u64> = (0..N as u64).collect();
    group.bench_function("find_last", |b| {
        b.iter(|| black_box(list.find(black_box(&(N as u64 - 1)))))
    });

    group.bench_function("iter_sum", |b| b.iter(|| black_box(list.iter().sum::<u64>())));

    group.bench_function("clone", |b| b.iter(|| black_box(list.clone())));

    group.finish();
}

criterion_group!(benches, bench_push_pop, bench_positional, bench_scan);
criterion_main!(benches);
