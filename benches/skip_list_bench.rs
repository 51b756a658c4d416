// Benchmark suite for the skip list
//
// Compares SkipList against the standard ordered containers:
// - BTreeMap<u64, usize>: counted multiset, the usual ordered default
// - Vec<u64>: kept sorted with binary search, fast to read and slow to grow

use std::collections::BTreeMap;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use skipseq::{Config, Natural, SkipList};

const SIZES: [usize; 3] = [100, 1000, 10000];

fn random_values(count: usize, seed: u64) -> Vec<u64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count).map(|_| rng.gen_range(0..count as u64 * 4)).collect()
}

fn seeded_list() -> SkipList<u64> {
    SkipList::with_config(Config::default().with_seed(42), Natural)
}

fn build_list(values: &[u64]) -> SkipList<u64> {
    let mut list = seeded_list();
    list.extend(values.iter().copied());
    list
}

// =============================================================================
// Insertion
// =============================================================================

fn bench_random_inserts(c: &mut Criterion) {
    let mut group = c.benchmark_group("random_inserts");

    for size in SIZES {
        let values = random_values(size, 42);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("SkipList", size), &values, |b, values| {
            b.iter(|| black_box(build_list(values)));
        });

        group.bench_with_input(BenchmarkId::new("BTreeMap", size), &values, |b, values| {
            b.iter(|| {
                let mut map: BTreeMap<u64, usize> = BTreeMap::new();
                for &v in values {
                    *map.entry(v).or_default() += 1;
                }
                black_box(map)
            });
        });

        group.bench_with_input(BenchmarkId::new("SortedVec", size), &values, |b, values| {
            b.iter(|| {
                let mut vec: Vec<u64> = Vec::with_capacity(values.len());
                for &v in values {
                    let at = vec.partition_point(|&x| x <= v);
                    vec.insert(at, v);
                }
                black_box(vec)
            });
        });
    }

    group.finish();
}

fn bench_hinted_appends(c: &mut Criterion) {
    let mut group = c.benchmark_group("ascending_inserts");

    for size in SIZES {
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("plain", size), &size, |b, &size| {
            b.iter(|| {
                let mut list = seeded_list();
                for v in 0..size as u64 {
                    list.insert(v);
                }
                black_box(list)
            });
        });

        // The previous node is usually too short to serve as a hint, so this
        // mostly measures the cost of rejecting one.
        group.bench_with_input(BenchmarkId::new("hinted", size), &size, |b, &size| {
            b.iter(|| {
                let mut list = seeded_list();
                let mut last = list.head();
                for v in 0..size as u64 {
                    last = list.insert_with_hint(v, last);
                }
                black_box(list)
            });
        });
    }

    group.finish();
}

// =============================================================================
// Lookup
// =============================================================================

fn bench_lookups(c: &mut Criterion) {
    let mut group = c.benchmark_group("lookups");

    for size in SIZES {
        let values = random_values(size, 42);
        let probes = random_values(1000, 7);
        group.throughput(Throughput::Elements(probes.len() as u64));

        let list = build_list(&values);
        group.bench_with_input(BenchmarkId::new("SkipList", size), &probes, |b, probes| {
            b.iter(|| {
                let mut hits = 0usize;
                for p in probes {
                    if list.contains(p) {
                        hits += 1;
                    }
                }
                black_box(hits)
            });
        });

        let map: BTreeMap<u64, usize> = values.iter().map(|&v| (v, 1)).collect();
        group.bench_with_input(BenchmarkId::new("BTreeMap", size), &probes, |b, probes| {
            b.iter(|| black_box(probes.iter().filter(|p| map.contains_key(*p)).count()));
        });

        let mut sorted = values.clone();
        sorted.sort_unstable();
        group.bench_with_input(BenchmarkId::new("SortedVec", size), &probes, |b, probes| {
            b.iter(|| black_box(probes.iter().filter(|p| sorted.binary_search(*p).is_ok()).count()));
        });
    }

    group.finish();
}

// =============================================================================
// Mixed workload
// =============================================================================

fn bench_mixed(c: &mut Criterion) {
    let mut group = c.benchmark_group("mixed");

    for size in SIZES {
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("SkipList", size), &size, |b, &size| {
            b.iter(|| {
                let mut rng = StdRng::seed_from_u64(42);
                let mut list = seeded_list();
                for _ in 0..size {
                    let v = rng.gen_range(0..size as u64);
                    // 70% insert, 30% remove
                    if list.is_empty() || rng.gen_bool(0.7) {
                        list.insert(v);
                    } else {
                        list.remove_first(&v);
                    }
                }
                black_box(list)
            });
        });

        group.bench_with_input(BenchmarkId::new("BTreeMap", size), &size, |b, &size| {
            b.iter(|| {
                let mut rng = StdRng::seed_from_u64(42);
                let mut map: BTreeMap<u64, usize> = BTreeMap::new();
                for _ in 0..size {
                    let v = rng.gen_range(0..size as u64);
                    if map.is_empty() || rng.gen_bool(0.7) {
                        *map.entry(v).or_default() += 1;
                    } else if let Some(count) = map.get_mut(&v) {
                        *count -= 1;
                        if *count == 0 {
                            map.remove(&v);
                        }
                    }
                }
                black_box(map)
            });
        });
    }

    group.finish();
}

fn bench_iteration(c: &mut Criterion) {
    let mut group = c.benchmark_group("iteration");

    for size in SIZES {
        let list = build_list(&random_values(size, 42));
        group.throughput(Throughput::Elements(size as u64));

        group.bench_function(BenchmarkId::new("forward", size), |b| {
            b.iter(|| black_box(list.iter().sum::<u64>()));
        });
        group.bench_function(BenchmarkId::new("cursor", size), |b| {
            b.iter(|| {
                let mut sum = 0u64;
                let mut cursor = list.cursor_front();
                while let Some(v) = cursor.get() {
                    sum += v;
                    cursor.move_next();
                }
                black_box(sum)
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_random_inserts,
    bench_hinted_appends,
    bench_lookups,
    bench_mixed,
    bench_iteration,
);
criterion_main!(benches);
