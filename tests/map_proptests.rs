// Property tests shared by both map strategies.
//
// Property 1: model-based state machine.
//  - Model: std::collections::HashMap<String, i32>.
//  - Operations: put, remove, get, contains, resize, clear.
//  - Invariant after each step: len() matches the model, the looked-up key
//    agrees with the model, capacity is prime (or the capacity-2 special
//    case), and the load factor stays within the strategy's bound.
//  - Final check: entries() yields exactly the model's pairs.
//
// Property 2: resize preserves the live pairs and rejects bad targets.
#![allow(
    missing_docs,
    clippy::missing_docs_in_private_items,
    clippy::unwrap_used,
    clippy::arithmetic_side_effects,
    clippy::indexing_slicing
)]

use std::collections::{BTreeMap, HashMap};

use proptest::prelude::*;
use strmap::{
    ChainingMap, QuadraticProbingMap, StringMap, chaining, find_mode,
    hashing::{HashFn, additive_hash, positional_hash},
    open_addressing, prime,
};

#[derive(Clone, Debug)]
enum Op {
    Put(String, i32),
    Remove(String),
    Get(String),
    Contains(String),
    Resize(usize),
    Clear,
}

prop_compose! {
    fn arb_key()(s in "[a-e]{1,3}") -> String { s }
}

fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        6 => (arb_key(), any::<i32>()).prop_map(|(k, v)| Op::Put(k, v)),
        2 => arb_key().prop_map(Op::Remove),
        2 => arb_key().prop_map(Op::Get),
        1 => arb_key().prop_map(Op::Contains),
        1 => (0usize..64).prop_map(Op::Resize),
        1 => Just(Op::Clear),
    ]
}

fn arb_hash() -> impl Strategy<Value = HashFn> {
    prop_oneof![Just::<HashFn>(additive_hash), Just::<HashFn>(positional_hash)]
}

fn sorted_pairs<M: StringMap<i32>>(map: &M) -> BTreeMap<String, i32> {
    map.entries().map(|(k, v)| (k.to_owned(), *v)).collect()
}

fn run_state_machine<M: StringMap<i32>>(
    mut map: M,
    ops: &[Op],
    max_load: f64,
) -> Result<(), TestCaseError> {
    let mut model: HashMap<String, i32> = HashMap::new();

    for op in ops {
        let key = match op {
            Op::Put(k, v) => {
                let expected = model.insert(k.clone(), *v);
                prop_assert_eq!(map.put(k.clone(), *v), expected);
                prop_assert!(map.load_factor() <= max_load);
                Some(k)
            }
            Op::Remove(k) => {
                prop_assert_eq!(map.remove(k), model.remove(k));
                Some(k)
            }
            Op::Get(k) | Op::Contains(k) => Some(k),
            Op::Resize(capacity) => {
                let before = map.capacity();
                map.resize(*capacity);
                if *capacity < map.len() || *capacity == 0 {
                    prop_assert!(map.capacity() == before || map.capacity() >= map.len());
                }
                None
            }
            Op::Clear => {
                let capacity = map.capacity();
                map.clear();
                model.clear();
                prop_assert_eq!(map.capacity(), capacity);
                None
            }
        };

        if let Some(k) = key {
            prop_assert_eq!(map.get(k), model.get(k));
            prop_assert_eq!(map.contains_key(k), model.contains_key(k));
        }
        prop_assert_eq!(map.len(), model.len());
        prop_assert!(map.capacity() == 2 || prime::is_prime(map.capacity()));
    }

    let expected: BTreeMap<String, i32> = model.into_iter().collect();
    prop_assert_eq!(sorted_pairs(&map), expected);
    Ok(())
}

proptest! {
    #[test]
    fn prop_quadratic_probing_matches_model(
        capacity in 0usize..30,
        hash in arb_hash(),
        ops in proptest::collection::vec(arb_op(), 1..200),
    ) {
        run_state_machine(
            QuadraticProbingMap::new(capacity, hash),
            &ops,
            open_addressing::MAX_LOAD_FACTOR,
        )?;
    }

    #[test]
    fn prop_chaining_matches_model(
        capacity in 0usize..30,
        hash in arb_hash(),
        ops in proptest::collection::vec(arb_op(), 1..200),
    ) {
        run_state_machine(ChainingMap::new(capacity, hash), &ops, chaining::MAX_LOAD_FACTOR)?;
    }

    #[test]
    fn prop_resize_preserves_entries(
        keys in proptest::collection::hash_set("[a-z]{1,6}", 0..40),
        target in 0usize..200,
    ) {
        let mut probing = QuadraticProbingMap::new(11, positional_hash);
        let mut chaining = ChainingMap::new(11, positional_hash);
        for (i, key) in keys.iter().enumerate() {
            let value = i32::try_from(i).unwrap();
            probing.put(key.as_str(), value);
            chaining.put(key.as_str(), value);
        }
        let before = sorted_pairs(&probing);
        let probing_capacity = probing.capacity();
        let chaining_capacity = chaining.capacity();

        let probing_result = probing.try_resize(target);
        let chaining_result = chaining.try_resize(target);

        prop_assert_eq!(sorted_pairs(&probing), before.clone());
        prop_assert_eq!(sorted_pairs(&chaining), before);

        if target < keys.len() {
            prop_assert!(probing_result.is_err());
            prop_assert_eq!(probing.capacity(), probing_capacity);
        } else {
            prop_assert_eq!(probing_result, Ok(probing.capacity()));
            prop_assert!(probing.load_factor() <= open_addressing::MAX_LOAD_FACTOR);
        }

        if target == 0 {
            prop_assert!(chaining_result.is_err());
            prop_assert_eq!(chaining.capacity(), chaining_capacity);
        } else {
            prop_assert_eq!(chaining_result, Ok(chaining.capacity()));
            prop_assert!(chaining.load_factor() <= chaining::MAX_LOAD_FACTOR);
        }
    }

    #[test]
    fn prop_mode_matches_counts(values in proptest::collection::vec("[a-d]", 0..60)) {
        let mut counts: HashMap<&str, usize> = HashMap::new();
        for value in &values {
            *counts.entry(value.as_str()).or_default() += 1;
        }
        let frequency = counts.values().copied().max().unwrap_or(0);
        let mut expected: Vec<&str> =
            counts.iter().filter(|&(_, &n)| n == frequency).map(|(&k, _)| k).collect();
        expected.sort_unstable();

        let mut mode = find_mode(&values);
        mode.values.sort();
        prop_assert_eq!(mode.frequency, frequency);
        prop_assert_eq!(mode.values, expected);
    }
}

#[test]
fn overwrite_scenario_on_both_strategies() {
    fn check<M: StringMap<i32>>(mut map: M) {
        map.put("a".to_owned(), 1);
        map.put("b".to_owned(), 2);
        map.put("a".to_owned(), 3);
        assert_eq!(map.len(), 2);
        assert_eq!(map.get("a"), Some(&3));
    }

    check(QuadraticProbingMap::new(11, additive_hash));
    check(ChainingMap::new(11, additive_hash));
}

#[test]
fn six_keys_then_resize_to_two_is_rejected() {
    let mut map = QuadraticProbingMap::new(11, positional_hash);
    for i in 1..=6 {
        map.put(i.to_string(), i);
    }
    let capacity = map.capacity();

    map.resize(2);

    assert_eq!(map.capacity(), capacity);
    assert!(prime::is_prime(map.capacity()));
    assert_eq!(map.len(), 6);
    for i in 1..=6 {
        assert_eq!(map.get(&i.to_string()), Some(&i));
    }
}

#[test]
fn tombstone_slot_is_reused() {
    let mut map = QuadraticProbingMap::new(11, additive_hash);
    map.put("k", 1);
    let size = map.len();

    map.remove("k");
    assert!(!map.contains_key("k"));
    assert_eq!(map.len(), size - 1);

    map.put("k", 2);
    assert_eq!(map.len(), size);
    assert_eq!(map.get("k"), Some(&2));
}
