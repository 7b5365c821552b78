use avl_bimap::AvlBiMap;
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::collections::BTreeMap;

const N: usize = 10_000;

// ─── Helper functions to generate key sequences ─────────────────────────────

fn ordered_keys(n: usize) -> Vec<i64> {
    (0..n as i64).collect()
}

fn reverse_ordered_keys(n: usize) -> Vec<i64> {
    (0..n as i64).rev().collect()
}

fn random_keys(n: usize) -> Vec<i64> {
    // Use a simple LCG for deterministic pseudo-random sequence
    let mut keys = Vec::with_capacity(n);
    let mut x: u64 = 12345;
    for _ in 0..n {
        x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
        keys.push((x >> 33) as i64);
    }
    keys
}

/// Right key paired with `k`. Any bijection works; negation keeps it cheap.
fn right_of(k: i64) -> i64 {
    k.wrapping_neg()
}

// ─── Baseline: the usual two-map pattern ────────────────────────────────────

#[derive(Default)]
struct TwoMaps {
    by_left: BTreeMap<i64, i64>,
    by_right: BTreeMap<i64, i64>,
}

impl TwoMaps {
    fn insert(&mut self, l: i64, r: i64) -> bool {
        if self.by_left.contains_key(&l) || self.by_right.contains_key(&r) {
            return false;
        }
        self.by_left.insert(l, r);
        self.by_right.insert(r, l);
        true
    }

    fn remove_left(&mut self, l: i64) -> bool {
        match self.by_left.remove(&l) {
            Some(r) => {
                self.by_right.remove(&r);
                true
            }
            None => false,
        }
    }
}

fn build_bimap(keys: &[i64]) -> AvlBiMap<i64, i64> {
    let mut map = AvlBiMap::new();
    for &k in keys {
        map.insert(k, right_of(k));
    }
    map
}

fn build_two_maps(keys: &[i64]) -> TwoMaps {
    let mut maps = TwoMaps::default();
    for &k in keys {
        maps.insert(k, right_of(k));
    }
    maps
}

// ─── Insert ─────────────────────────────────────────────────────────────────

fn bench_insert(c: &mut Criterion, name: &str, keys: &[i64]) {
    let mut group = c.benchmark_group(name);

    group.bench_function(BenchmarkId::new("AvlBiMap", N), |b| {
        b.iter(|| build_bimap(keys));
    });

    group.bench_function(BenchmarkId::new("TwoBTreeMaps", N), |b| {
        b.iter(|| build_two_maps(keys));
    });

    group.finish();
}

fn bench_insert_ordered(c: &mut Criterion) {
    bench_insert(c, "insert_ordered", &ordered_keys(N));
}

fn bench_insert_reverse(c: &mut Criterion) {
    bench_insert(c, "insert_reverse", &reverse_ordered_keys(N));
}

fn bench_insert_random(c: &mut Criterion) {
    bench_insert(c, "insert_random", &random_keys(N));
}

// ─── Lookup ─────────────────────────────────────────────────────────────────

fn bench_get_left_random(c: &mut Criterion) {
    let keys = random_keys(N);
    let bimap = build_bimap(&keys);
    let maps = build_two_maps(&keys);

    let mut group = c.benchmark_group("get_left_random");

    group.bench_function(BenchmarkId::new("AvlBiMap", N), |b| {
        b.iter(|| {
            let mut sum = 0i64;
            for &k in &keys {
                if let Some(&v) = bimap.get_left(&k) {
                    sum = sum.wrapping_add(v);
                }
            }
            sum
        });
    });

    group.bench_function(BenchmarkId::new("TwoBTreeMaps", N), |b| {
        b.iter(|| {
            let mut sum = 0i64;
            for &k in &keys {
                if let Some(&v) = maps.by_left.get(&k) {
                    sum = sum.wrapping_add(v);
                }
            }
            sum
        });
    });

    group.finish();
}

fn bench_get_right_random(c: &mut Criterion) {
    let keys = random_keys(N);
    let bimap = build_bimap(&keys);
    let maps = build_two_maps(&keys);
    let right_keys: Vec<i64> = keys.iter().map(|&k| right_of(k)).collect();

    let mut group = c.benchmark_group("get_right_random");

    group.bench_function(BenchmarkId::new("AvlBiMap", N), |b| {
        b.iter(|| {
            let mut sum = 0i64;
            for &k in &right_keys {
                if let Some(&v) = bimap.get_right(&k) {
                    sum = sum.wrapping_add(v);
                }
            }
            sum
        });
    });

    group.bench_function(BenchmarkId::new("TwoBTreeMaps", N), |b| {
        b.iter(|| {
            let mut sum = 0i64;
            for &k in &right_keys {
                if let Some(&v) = maps.by_right.get(&k) {
                    sum = sum.wrapping_add(v);
                }
            }
            sum
        });
    });

    group.finish();
}

// ─── Remove ─────────────────────────────────────────────────────────────────

fn bench_remove(c: &mut Criterion, name: &str, keys: &[i64]) {
    let mut group = c.benchmark_group(name);

    group.bench_function(BenchmarkId::new("AvlBiMap", N), |b| {
        b.iter_batched(
            || build_bimap(keys),
            |mut map| {
                for &k in keys {
                    map.erase_left(&k);
                }
                map
            },
            criterion::BatchSize::SmallInput,
        );
    });

    group.bench_function(BenchmarkId::new("TwoBTreeMaps", N), |b| {
        b.iter_batched(
            || build_two_maps(keys),
            |mut maps| {
                for &k in keys {
                    maps.remove_left(k);
                }
                maps
            },
            criterion::BatchSize::SmallInput,
        );
    });

    group.finish();
}

fn bench_remove_ordered(c: &mut Criterion) {
    bench_remove(c, "remove_ordered", &ordered_keys(N));
}

fn bench_remove_random(c: &mut Criterion) {
    bench_remove(c, "remove_random", &random_keys(N));
}

// ─── Iteration ──────────────────────────────────────────────────────────────

fn bench_iter_right(c: &mut Criterion) {
    let keys = random_keys(N);
    let bimap = build_bimap(&keys);
    let maps = build_two_maps(&keys);

    let mut group = c.benchmark_group("iter_right");

    group.bench_function(BenchmarkId::new("AvlBiMap", N), |b| {
        b.iter(|| bimap.iter_right().fold(0i64, |sum, (_, &l)| sum.wrapping_add(l)));
    });

    group.bench_function(BenchmarkId::new("TwoBTreeMaps", N), |b| {
        b.iter(|| maps.by_right.values().fold(0i64, |sum, &l| sum.wrapping_add(l)));
    });

    group.finish();
}

// ─── Criterion Groups ───────────────────────────────────────────────────────

criterion_group!(insert_benches, bench_insert_ordered, bench_insert_reverse, bench_insert_random,);

criterion_group!(get_benches, bench_get_left_random, bench_get_right_random,);

criterion_group!(remove_benches, bench_remove_ordered, bench_remove_random,);

criterion_group!(iter_benches, bench_iter_right,);

criterion_main!(insert_benches, get_benches, remove_benches, iter_benches,);
