use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pooled_bst::{BinarySearchTree, TraversalOrder};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::BTreeSet;

// Random keys keep the unbalanced tree near logarithmic height.
fn random_keys(count: usize) -> Vec<u64> {
    let mut rng = StdRng::seed_from_u64(42);
    (0..count).map(|_| rng.gen()).collect()
}

fn add_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("add");

    for &size in &[1_000, 10_000, 100_000] {
        let keys = random_keys(size);

        group.bench_with_input(BenchmarkId::new("pooled_bst", size), &keys, |b, keys| {
            b.iter(|| {
                let mut tree = BinarySearchTree::new(size).unwrap();
                for &key in keys {
                    tree.add(key, TraversalOrder::InOrder);
                }
                black_box(tree.len())
            })
        });

        group.bench_with_input(BenchmarkId::new("pooled_bst_grow", size), &keys, |b, keys| {
            b.iter(|| {
                let mut tree = BinarySearchTree::with_default_capacity();
                for &key in keys {
                    tree.add(key, TraversalOrder::InOrder);
                }
                black_box(tree.len())
            })
        });

        group.bench_with_input(BenchmarkId::new("std_btreeset", size), &keys, |b, keys| {
            b.iter(|| {
                let mut set = BTreeSet::new();
                for &key in keys {
                    set.insert(key);
                }
                black_box(set.len())
            })
        });
    }

    group.finish();
}

fn lookup_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("contains");

    for &size in &[1_000, 10_000, 100_000] {
        let keys = random_keys(size);
        let tree: BinarySearchTree<u64> = keys.iter().copied().collect();
        let set: BTreeSet<u64> = keys.iter().copied().collect();

        group.bench_with_input(BenchmarkId::new("pooled_bst", size), &keys, |b, keys| {
            b.iter(|| {
                let hits = keys.iter().filter(|&key| tree.contains(key)).count();
                black_box(hits)
            })
        });

        group.bench_with_input(BenchmarkId::new("std_btreeset", size), &keys, |b, keys| {
            b.iter(|| {
                let hits = keys.iter().filter(|&key| set.contains(key)).count();
                black_box(hits)
            })
        });
    }

    group.finish();
}

fn traversal_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("traversal");

    for &size in &[1_000, 10_000, 100_000] {
        let keys = random_keys(size);
        let tree: BinarySearchTree<u64> = keys.iter().copied().collect();
        let set: BTreeSet<u64> = keys.iter().copied().collect();

        group.bench_function(BenchmarkId::new("pooled_bst_cursor", size), |b| {
            b.iter(|| {
                let mut cursor = tree.first(TraversalOrder::InOrder);
                let mut sum = 0u64;
                while let Some(value) = cursor.get() {
                    sum = sum.wrapping_add(*value);
                    cursor.move_next();
                }
                black_box(sum)
            })
        });

        group.bench_function(BenchmarkId::new("pooled_bst_iter", size), |b| {
            b.iter(|| black_box(tree.iter().fold(0u64, |sum, v| sum.wrapping_add(*v))))
        });

        group.bench_function(BenchmarkId::new("std_btreeset", size), |b| {
            b.iter(|| black_box(set.iter().fold(0u64, |sum, v| sum.wrapping_add(*v))))
        });
    }

    group.finish();
}

fn remove_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("remove_all");

    for &size in &[1_000, 10_000] {
        let keys = random_keys(size);
        let tree: BinarySearchTree<u64> = keys.iter().copied().collect();
        let set: BTreeSet<u64> = keys.iter().copied().collect();

        group.bench_with_input(BenchmarkId::new("pooled_bst", size), &keys, |b, keys| {
            b.iter(|| {
                let mut tree = tree.clone();
                for key in keys {
                    tree.remove_value(key);
                }
                black_box(tree.is_empty())
            })
        });

        group.bench_with_input(BenchmarkId::new("std_btreeset", size), &keys, |b, keys| {
            b.iter(|| {
                let mut set = set.clone();
                for key in keys {
                    set.remove(key);
                }
                black_box(set.is_empty())
            })
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    add_benchmark,
    lookup_benchmark,
    traversal_benchmark,
    remove_benchmark
);
criterion_main!(benches);
