// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use rand::{Rng, SeedableRng, rngs::StdRng};
use std::hint::black_box;

const SIZES: [usize; 4] = [16, 256, 4_096, 65_536];

fn random_sequence(len: usize) -> Vec<i64> {
    // Fixed seed for deterministic benchmark inputs
    let mut rng = StdRng::seed_from_u64(0xC0FFEE);
    (0..len).map(|_| rng.random_range(-1_000..1_000)).collect()
}

/// Fused projection against the two-pass `filter` followed by `map`.
fn bench_map_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("map_filter_vs_filter_map");

    for &len in &SIZES {
        let seq = random_sequence(len);
        group.throughput(Throughput::Elements(len as u64));

        group.bench_with_input(BenchmarkId::new("map_filter", len), &seq, |b, seq| {
            b.iter(|| {
                seqkit::map_filter(black_box(seq), |e, i, _| {
                    (e % 3 == 0).then(|| e * 2 + i as i64)
                })
            })
        });

        group.bench_with_input(BenchmarkId::new("filter_then_map", len), &seq, |b, seq| {
            b.iter(|| {
                let indexed = seqkit::map(black_box(seq), |e, i, _| (i, *e));
                let kept = seqkit::filter(&indexed, |(_, e), _, _| e % 3 == 0);
                seqkit::map(&kept, |(i, e), _, _| e * 2 + *i as i64)
            })
        });
    }
    group.finish();
}

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");

    for &len in &SIZES {
        let seq = random_sequence(len);
        group.throughput(Throughput::Elements(len as u64));

        // Absent target forces a full scan
        group.bench_with_input(BenchmarkId::new("find_index_miss", len), &seq, |b, seq| {
            b.iter(|| seqkit::find_index(black_box(seq), |e, _, _| *e > 1_000))
        });

        group.bench_with_input(
            BenchmarkId::new("find_last_index_miss", len),
            &seq,
            |b, seq| b.iter(|| seqkit::find_last_index(black_box(seq), |e, _, _| *e > 1_000)),
        );

        group.bench_with_input(BenchmarkId::new("reduce_sum", len), &seq, |b, seq| {
            b.iter(|| seqkit::reduce(black_box(seq), 0_i64, |acc, e, _, _| acc + e))
        });
    }
    group.finish();
}

fn bench_at(c: &mut Criterion) {
    let seq = random_sequence(4_096);
    let mut group = c.benchmark_group("at");

    group.bench_function("positive", |b| {
        b.iter(|| seqkit::at(black_box(&seq), black_box(2_048_isize)))
    });
    group.bench_function("negative", |b| {
        b.iter(|| seqkit::at(black_box(&seq), black_box(-2_048_isize)))
    });
    group.bench_function("out_of_range", |b| {
        b.iter(|| seqkit::at(black_box(&seq), black_box(-5_000_isize)))
    });
    group.finish();
}

criterion_group!(benches, bench_map_filter, bench_search, bench_at);
criterion_main!(benches);
