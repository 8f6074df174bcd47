#![allow(
    missing_docs,
    clippy::missing_docs_in_private_items,
    clippy::unwrap_used,
    clippy::similar_names
)]
use std::collections::HashMap;

use criterion::{Criterion, criterion_group, criterion_main};
use proptest::{
    prelude::{Strategy, any},
    strategy::ValueTree,
    test_runner::TestRunner,
};
use strmap::{ChainingMap, QuadraticProbingMap, StringMap, hashing::positional_hash};

const ITEMS_AMOUNT: usize = 1000;
const SAMPLE_SIZE: usize = 10;
const INITIAL_CAPACITY: usize = 11;

fn fill<M: StringMap<u32>>(map: &mut M, items: &[(String, u32)]) {
    for (key, value) in items {
        map.put(key.clone(), *value);
    }
}

fn hash_map_benches(c: &mut Criterion) {
    let mut runner = TestRunner::default();
    let items = proptest::collection::vec(("[a-z]{1,12}", any::<u32>()), ITEMS_AMOUNT)
        .new_tree(&mut runner)
        .unwrap()
        .current();

    let mut group = c.benchmark_group("Hash map comparison benchmark");
    group.sample_size(SAMPLE_SIZE);

    group.bench_function("quadratic probing put", |b| {
        b.iter(|| {
            let mut map = QuadraticProbingMap::new(INITIAL_CAPACITY, positional_hash);
            fill(&mut map, &items);
            map
        });
    });
    group.bench_function("separate chaining put", |b| {
        b.iter(|| {
            let mut map = ChainingMap::new(INITIAL_CAPACITY, positional_hash);
            fill(&mut map, &items);
            map
        });
    });
    group.bench_function("rust std insert", |b| {
        b.iter(|| {
            let mut map = HashMap::with_capacity(INITIAL_CAPACITY);
            for (key, value) in &items {
                map.insert(key.clone(), *value);
            }
            map
        });
    });

    let mut probing = QuadraticProbingMap::new(INITIAL_CAPACITY, positional_hash);
    fill(&mut probing, &items);
    let mut chaining = ChainingMap::new(INITIAL_CAPACITY, positional_hash);
    fill(&mut chaining, &items);
    let rust_map: HashMap<String, u32> = items.iter().cloned().collect();

    group.bench_function("quadratic probing get", |b| {
        b.iter(|| {
            for (key, _) in &items {
                let _ = probing.get(key);
            }
        });
    });
    group.bench_function("separate chaining get", |b| {
        b.iter(|| {
            for (key, _) in &items {
                let _ = chaining.get(key);
            }
        });
    });
    group.bench_function("rust std get", |b| {
        b.iter(|| {
            for (key, _) in &items {
                let _ = rust_map.get(key);
            }
        });
    });
    group.finish();
}

criterion_group!(benches, hash_map_benches);

criterion_main!(benches);
