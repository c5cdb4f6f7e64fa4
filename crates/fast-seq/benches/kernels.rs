//! Performance benchmarks for the fast-seq kernels.
//!
//! Run with: `cargo bench -p fast-seq`
//!
//! Each kernel is measured against its naive reference across input sizes to
//! confirm the expected complexity: O(N log K) for the merge and O(N) for the
//! sliding window, independent of width.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use fast_seq::kernels::kway_merge::{merge_k_sorted, merge_k_sorted_naive, KMergeIter};
use fast_seq::kernels::sliding_window::{
    sliding_window_extrema, sliding_window_extremum, sliding_window_extremum_naive,
};
use fast_seq::search::{binary_search, exponential_search};
use fast_seq::Extremum;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

const SEED: u64 = 0x5eed;

// Standard sizes for benchmarking
const SIZES: &[usize] = &[1_000, 10_000, 100_000];
const SOURCE_COUNTS: &[usize] = &[2, 16, 256];
const WIDTHS: &[usize] = &[4, 64, 1024];

fn generate_series(size: usize) -> Vec<i64> {
    let mut rng = ChaCha8Rng::seed_from_u64(SEED);
    (0..size).map(|_| rng.gen_range(-1_000_000..1_000_000)).collect()
}

/// Splits `total` random values into `k` sorted sources of equal length.
fn generate_sources(total: usize, k: usize) -> Vec<Vec<i64>> {
    let values = generate_series(total);
    let per_source = ((total + k - 1) / k).max(1);
    values
        .chunks(per_source)
        .map(|chunk| {
            let mut source = chunk.to_vec();
            source.sort_unstable();
            source
        })
        .collect()
}

fn bench_merge(c: &mut Criterion) {
    let mut group = c.benchmark_group("merge_k_sorted");
    let total = 100_000;
    group.throughput(Throughput::Elements(total as u64));

    for &k in SOURCE_COUNTS {
        let sources = generate_sources(total, k);
        group.bench_with_input(BenchmarkId::new("heap", k), &sources, |b, sources| {
            b.iter(|| merge_k_sorted(black_box(sources)));
        });
        group.bench_with_input(BenchmarkId::new("iter", k), &sources, |b, sources| {
            b.iter(|| KMergeIter::new(black_box(sources)).filter_map(Result::ok).count());
        });
        group.bench_with_input(BenchmarkId::new("naive", k), &sources, |b, sources| {
            b.iter(|| merge_k_sorted_naive(black_box(sources)));
        });
    }
    group.finish();
}

fn bench_sliding_window(c: &mut Criterion) {
    let mut group = c.benchmark_group("sliding_window");
    for &size in SIZES {
        let data = generate_series(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("deque_w64", size), &data, |b, data| {
            b.iter(|| sliding_window_extremum(black_box(data), black_box(64), Extremum::Max));
        });
        group.bench_with_input(BenchmarkId::new("extrema_w64", size), &data, |b, data| {
            b.iter(|| sliding_window_extrema(black_box(data), black_box(64)));
        });
    }
    group.finish();
}

fn bench_window_width(c: &mut Criterion) {
    let mut group = c.benchmark_group("sliding_window_width");
    let data = generate_series(100_000);
    group.throughput(Throughput::Elements(data.len() as u64));

    for &width in WIDTHS {
        group.bench_with_input(BenchmarkId::new("deque", width), &width, |b, &width| {
            b.iter(|| sliding_window_extremum(black_box(&data), width, Extremum::Min));
        });
        // The naive scan is O(N * W); keep it to the narrow windows.
        if width <= 64 {
            group.bench_with_input(BenchmarkId::new("naive", width), &width, |b, &width| {
                b.iter(|| sliding_window_extremum_naive(black_box(&data), width, Extremum::Min));
            });
        }
    }
    group.finish();
}

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");
    let mut data = generate_series(1_000_000);
    data.sort_unstable();
    let near_front = data[16];
    let near_back = data[data.len() - 16];

    group.bench_function("binary_front", |b| {
        b.iter(|| binary_search(black_box(&data), black_box(&near_front)));
    });
    group.bench_function("exponential_front", |b| {
        b.iter(|| exponential_search(black_box(&data), black_box(&near_front)));
    });
    group.bench_function("binary_back", |b| {
        b.iter(|| binary_search(black_box(&data), black_box(&near_back)));
    });
    group.bench_function("exponential_back", |b| {
        b.iter(|| exponential_search(black_box(&data), black_box(&near_back)));
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_merge,
    bench_sliding_window,
    bench_window_width,
    bench_search
);
criterion_main!(benches);
