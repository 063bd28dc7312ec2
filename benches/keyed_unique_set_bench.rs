//! KeyedUniqueSet insert/remove benchmark.
//!
//! Compares fresh-key inserts, overwriting inserts and removals, with a
//! closure projector and a field projector.
//!
//! Pre-generated elements are reused via clone() in setup to avoid
//! regeneration overhead between iterations.

use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use lambars_keyed::key_path;
use lambars_keyed::keyed::KeyedUniqueSet;
use std::hint::black_box;

const SIZES: [u64; 4] = [100, 1000, 10000, 100000];

#[derive(Clone)]
struct Order {
    id: u64,
    quantity: u32,
}

/// Generates `size` orders with distinct ids.
fn generate_orders(size: u64) -> Vec<Order> {
    (0..size)
        .map(|id| Order {
            id,
            quantity: u32::try_from(id % 97).unwrap_or(0),
        })
        .collect()
}

/// Returns the appropriate BatchSize based on input size.
fn batch_size_for(size: u64) -> BatchSize {
    if size < 1000 {
        BatchSize::SmallInput
    } else {
        BatchSize::LargeInput
    }
}

fn benchmark_insert_fresh(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("keyed_unique_set_insert_fresh");

    for size in SIZES {
        let orders = generate_orders(size);
        group.bench_with_input(
            BenchmarkId::new("closure_projector", size),
            &size,
            |bencher, &size| {
                bencher.iter_batched(
                    || orders.clone(),
                    |orders| {
                        let mut set = KeyedUniqueSet::new(|order: &Order| order.id);
                        for order in orders {
                            set.insert(black_box(order));
                        }
                        black_box(set.len())
                    },
                    batch_size_for(size),
                );
            },
        );
        group.bench_with_input(
            BenchmarkId::new("field_projector", size),
            &size,
            |bencher, &size| {
                bencher.iter_batched(
                    || orders.clone(),
                    |orders| {
                        let mut set = KeyedUniqueSet::new(key_path!(Order, id));
                        for order in orders {
                            set.insert(black_box(order));
                        }
                        black_box(set.len())
                    },
                    batch_size_for(size),
                );
            },
        );
    }

    group.finish();
}

fn benchmark_insert_overwrite(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("keyed_unique_set_insert_overwrite");

    for size in SIZES {
        let orders = generate_orders(size);
        let mut populated = KeyedUniqueSet::new(|order: &Order| order.id);
        populated.extend(orders.iter().cloned());

        group.bench_with_input(BenchmarkId::new("overwrite", size), &size, |bencher, &size| {
            bencher.iter_batched(
                || (populated.clone(), orders.clone()),
                |(mut set, orders)| {
                    for mut order in orders {
                        order.quantity += 1;
                        black_box(set.insert(black_box(order)));
                    }
                    black_box(set.len())
                },
                batch_size_for(size),
            );
        });
    }

    group.finish();
}

fn benchmark_remove(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("keyed_unique_set_remove");

    for size in SIZES {
        let orders = generate_orders(size);
        let mut populated = KeyedUniqueSet::new(|order: &Order| order.id);
        populated.extend(orders.iter().cloned());

        group.bench_with_input(BenchmarkId::new("remove", size), &size, |bencher, &size| {
            bencher.iter_batched(
                || populated.clone(),
                |mut set| {
                    for order in &orders {
                        black_box(set.remove(black_box(order)));
                    }
                    black_box(set.is_empty())
                },
                batch_size_for(size),
            );
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_insert_fresh,
    benchmark_insert_overwrite,
    benchmark_remove
);

criterion_main!(benches);
