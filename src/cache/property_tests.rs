//! Property-Based Tests for Cache Module
//!
//! Uses proptest to check the store against a plain HashMap model and the
//! shared cache's isolation between instances.

use proptest::prelude::*;
use std::collections::HashMap;
use std::time::Duration;

use tokio::time::Instant;

use crate::cache::{ByteCache, CacheStore};

// == Test Configuration ==
const TEST_INTERVAL: Duration = Duration::from_secs(60);

// == Strategies ==
/// Generates request-like keys from a small pool so operations collide
fn key_strategy() -> impl Strategy<Value = String> {
    "[a-d]{1,2}".prop_map(|s| format!("https://pokeapi.co/api/v2/location/?offset={}", s))
}

/// Generates byte payloads
fn value_strategy() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 0..64)
}

#[derive(Debug, Clone)]
enum CacheOp {
    Add { key: String, value: Vec<u8> },
    Get { key: String },
}

fn cache_op_strategy() -> impl Strategy<Value = CacheOp> {
    prop_oneof![
        (key_strategy(), value_strategy()).prop_map(|(key, value)| CacheOp::Add { key, value }),
        key_strategy().prop_map(|key| CacheOp::Get { key }),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // Within the interval the store behaves like a last-write-wins map, and
    // the hit/miss counters match what the model predicts.
    #[test]
    fn prop_store_matches_map_model(ops in prop::collection::vec(cache_op_strategy(), 1..60)) {
        let mut store = CacheStore::new(TEST_INTERVAL);
        let mut model: HashMap<String, Vec<u8>> = HashMap::new();
        let now = Instant::now();
        let mut expected_hits: u64 = 0;
        let mut expected_misses: u64 = 0;

        for op in ops {
            match op {
                CacheOp::Add { key, value } => {
                    store.add(key.clone(), value.clone(), now);
                    model.insert(key, value);
                }
                CacheOp::Get { key } => {
                    let got = store.get(&key, now);
                    prop_assert_eq!(got.as_ref(), model.get(&key), "Value mismatch for {}", key);
                    if got.is_some() { expected_hits += 1 } else { expected_misses += 1 }
                }
            }
        }

        let stats = store.stats();
        prop_assert_eq!(stats.hits, expected_hits);
        prop_assert_eq!(stats.misses, expected_misses);
        prop_assert_eq!(store.len(), model.len());
    }

    // A key that was never added is a miss; after an add it is a hit with
    // exactly the value added.
    #[test]
    fn prop_miss_then_hit(key in key_strategy(), value in value_strategy()) {
        let mut store = CacheStore::new(TEST_INTERVAL);
        let now = Instant::now();

        prop_assert_eq!(store.get(&key, now), None);
        store.add(key.clone(), value.clone(), now);
        prop_assert_eq!(store.get(&key, now), Some(value));
    }

    // Sweeping keeps exactly the entries whose age does not exceed the
    // interval.
    #[test]
    fn prop_sweep_keeps_only_fresh(ages_ms in prop::collection::vec(0u64..200, 1..40)) {
        let interval = Duration::from_millis(100);
        let mut store = CacheStore::new(interval);
        let start = Instant::now();
        let sweep_at = start + Duration::from_millis(200);

        for (i, age) in ages_ms.iter().enumerate() {
            store.add(format!("key{}", i), vec![i as u8], sweep_at - Duration::from_millis(*age));
        }

        let expected_kept = ages_ms.iter().filter(|age| **age <= 100).count();
        let removed = store.sweep(sweep_at);
        prop_assert_eq!(store.len(), expected_kept);
        prop_assert_eq!(removed, ages_ms.len() - expected_kept);
    }
}

// Fewer cases: each one spins up a runtime and two reapers
proptest! {
    #![proptest_config(ProptestConfig::with_cases(20))]

    // Two caches never share entries.
    #[test]
    fn prop_caches_are_isolated(key in key_strategy(), value in value_strategy()) {
        let (seen_by_b, seen_by_a) = tokio_test::block_on(async {
            let cache_a = ByteCache::new(TEST_INTERVAL).unwrap();
            let cache_b = ByteCache::new(TEST_INTERVAL).unwrap();

            cache_a.add(key.clone(), value.clone()).await;
            let seen = (cache_b.get(&key).await, cache_a.get(&key).await);

            cache_a.close().await;
            cache_b.close().await;
            seen
        });

        prop_assert_eq!(seen_by_b, None);
        prop_assert_eq!(seen_by_a, Some(value));
    }
}
