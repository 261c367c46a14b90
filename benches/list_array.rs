use std::hint::black_box;

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use minlist::{DataType, ListArray, ListSlot};

const N: usize = 100_000;

/// Deterministic column: every seventh slot null, lists of 0..=9 letters.
fn make_array(n: usize) -> ListArray {
    (0..n)
        .map(|i| {
            if i % 7 == 0 {
                ListSlot::Null
            } else {
                ListSlot::from_chars((0..i % 10).map(|j| (b'a' + ((i + j) % 26) as u8) as char))
            }
        })
        .collect()
}

fn bench_take(c: &mut Criterion) {
    let arr = make_array(N);
    let indices: Vec<i64> = (0..N as i64).rev().map(|i| if i % 5 == 0 { -1 } else { i }).collect();

    let mut group = c.benchmark_group("take");
    group.throughput(Throughput::Elements(N as u64));
    group.bench_function("take_no_fill", |b| {
        b.iter(|| black_box(arr.take(black_box(&indices), false, None).unwrap()))
    });
    group.bench_function("take_with_fill", |b| {
        b.iter(|| black_box(arr.take(black_box(&indices), true, None).unwrap()))
    });
    group.finish();
}

fn bench_concat(c: &mut Criterion) {
    let parts: Vec<ListArray> = (0..10).map(|_| make_array(N / 10)).collect();
    let refs: Vec<&ListArray> = parts.iter().collect();

    let mut group = c.benchmark_group("concat");
    group.throughput(Throughput::Elements(N as u64));
    group.bench_function("concat_same_type", |b| {
        b.iter(|| black_box(ListArray::concat_same_type(black_box(&refs))))
    });
    group.finish();
}

fn bench_astype(c: &mut Criterion) {
    let arr = make_array(N);

    let mut group = c.benchmark_group("astype");
    group.throughput(Throughput::Elements(N as u64));
    group.bench_function("astype_utf8", |b| {
        b.iter(|| black_box(arr.astype(&DataType::utf8(), true).unwrap().len()))
    });
    group.bench_function("isna", |b| b.iter(|| black_box(arr.isna())));
    group.finish();
}

criterion_group!(benches, bench_take, bench_concat, bench_astype);
criterion_main!(benches);
