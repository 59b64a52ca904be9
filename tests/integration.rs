//! 哈希表集成测试

use hashing_bench::{
    batch_get, batch_insert, bench, build_table, log_info, BenchConfig, BucketCuckooTable,
    CapacityCause, ChainingTable, CuckooConfig, HashTable, LinearTable, QuadraticTable, Report,
    TableError, TableKind, Workload,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::HashMap;
use test_log::test;

const SEED: u64 = 42;
const CAPACITY: usize = 1 << 12;

/// 生成随机键值对，键可能重复
fn generate_items(count: usize) -> Vec<(u32, u32)> {
    let mut rng = StdRng::seed_from_u64(SEED);
    (0..count).map(|i| (rng.gen(), i as u32 + 1)).collect()
}

/// 插入并维护真值，容量错误时跳过该条
fn fill(table: &mut dyn HashTable, items: &[(u32, u32)]) -> HashMap<u32, u32> {
    let mut truth = HashMap::new();
    for &(k, v) in items {
        match table.put(k, v) {
            Ok(()) => {
                truth.insert(k, v);
            }
            Err(e) => assert!(e.is_capacity_exceeded(), "{}: {}", table.name(), e),
        }
        assert_eq!(table.get(k), truth.get(&k).copied(), "{} get after put", table.name());
    }
    truth
}

#[test]
fn test_get_after_put_all_tables() {
    let items = generate_items(CAPACITY / 2);
    for kind in TableKind::ALL {
        let mut table = build_table(kind, CAPACITY, SEED).unwrap();
        let truth = fill(table.as_mut(), &items);
        assert_eq!(table.len(), truth.len(), "{}", kind);
        for (&k, &v) in &truth {
            assert_eq!(table.get(k), Some(v), "{} lost key {}", kind, k);
        }
    }
}

#[test]
fn test_reput_updates_in_place() {
    for kind in TableKind::ALL {
        let mut table = build_table(kind, 256, SEED).unwrap();
        for k in 0..100u32 {
            table.put(k * 3, k).unwrap();
        }
        for k in 0..100u32 {
            table.put(k * 3, k + 1000).unwrap();
        }
        assert_eq!(table.len(), 100, "{} duplicated keys", kind);
        for k in 0..100u32 {
            assert_eq!(table.get(k * 3), Some(k + 1000), "{}", kind);
        }
        assert_eq!(table.stats().update_count, 100, "{}", kind);
    }
}

#[test]
fn test_missing_keys_not_found() {
    let items = generate_items(CAPACITY * 3 / 4);
    for kind in TableKind::ALL {
        let mut table = build_table(kind, CAPACITY, SEED).unwrap();
        let truth = fill(table.as_mut(), &items);

        let mut rng = StdRng::seed_from_u64(SEED + 1);
        for _ in 0..2000 {
            let k: u32 = rng.gen();
            if !truth.contains_key(&k) {
                assert_eq!(table.get(k), None, "{} invented key {}", kind, k);
            }
        }
    }
}

#[test]
fn test_open_addressing_rejects_more_than_capacity() {
    let capacity = 64;
    let mut linear = LinearTable::new(capacity).unwrap();
    let mut quadratic = QuadraticTable::new(capacity).unwrap();

    let linear_ok = (0..=capacity as u32)
        .filter(|&k| linear.put(k, k).is_ok())
        .count();
    let quadratic_ok = (0..=capacity as u32)
        .filter(|&k| quadratic.put(k.wrapping_mul(0x9E37_79B9), k).is_ok())
        .count();

    assert_eq!(linear_ok, capacity - 1);
    assert!(quadratic_ok < capacity);
    assert!(matches!(
        linear.put(10_000, 0),
        Err(TableError::CapacityExceeded { cause: CapacityCause::LoadLimit, .. })
    ));
    assert!(quadratic.put(10_000, 0).is_err());
}

#[test]
fn test_chaining_single_slot() {
    let capacity = 1 << 8;
    let mut table = ChainingTable::new(capacity).unwrap();
    let keys: Vec<u32> = (0..2000u32).map(|i| 42 + i * capacity as u32).collect();
    let inserted = batch_insert(&mut table, keys.iter().map(|&k| (k, k ^ 0xFFFF))).unwrap();
    assert_eq!(inserted, keys.len());
    assert_eq!(table.chain_len(42), keys.len());

    let values = batch_get(&table, keys.iter().copied());
    for (k, v) in keys.iter().zip(values) {
        assert_eq!(v, Some(k ^ 0xFFFF));
    }
}

#[test]
fn test_cuckoo_toy_example() {
    let config = CuckooConfig {
        hash_count: 2,
        bucket_size: 2,
        max_eviction_chain: 2,
        ..CuckooConfig::default()
    };
    let mut table = BucketCuckooTable::with_config(16, config).unwrap();
    for k in 1..=10u32 {
        match table.put(k, k) {
            Ok(()) => assert_eq!(table.get(k), Some(k)),
            Err(e) => assert!(e.is_capacity_exceeded()),
        }
    }
    for k in 1..=10u32 {
        if let Some(v) = table.get(k) {
            assert_eq!(v, k, "wrong value for key {}", k);
        }
    }
}

#[test]
fn test_cuckoo_put_survives_eviction_overflow() {
    let config = CuckooConfig {
        hash_count: 1,
        bucket_size: 1,
        max_eviction_chain: 0,
        max_rehash_attempts: 16,
        seed: SEED,
    };
    let mut table = BucketCuckooTable::with_config(64, config).unwrap();
    let earlier: Vec<(u32, u32)> = (1..=4u32).map(|k| (k * 7919, k)).collect();
    for &(k, v) in &earlier {
        table.put(k, v).unwrap();
    }

    let (anchor, _) = earlier[0];
    let home = table.candidate_buckets(anchor);
    let collider = (1..100_000u32)
        .map(|i| i.wrapping_mul(0x9E37_79B9))
        .find(|&k| earlier.iter().all(|&(e, _)| e != k) && table.candidate_buckets(k) == home)
        .unwrap();
    let rehashes_before = table.stats().rehash_count;

    table.put(collider, 99).unwrap();

    assert!(table.stats().rehash_count > rehashes_before);
    assert_eq!(table.len(), earlier.len() + 1);
    assert_eq!(table.get(collider), Some(99));
    for &(k, v) in &earlier {
        assert_eq!(table.get(k), Some(v), "key {} lost during rehash", k);
    }
}

#[test]
fn test_cuckoo_high_load() {
    let mut table = BucketCuckooTable::new(CAPACITY).unwrap();
    let truth = fill(&mut table, &generate_items(CAPACITY * 3 / 4));

    for (&k, &v) in &truth {
        assert_eq!(table.get(k), Some(v));
        let hits = table.cells().iter().filter(|c| c.holds(k)).count();
        assert_eq!(hits, 1);
        let idx = table.locate(k).unwrap();
        let bucket_size = table.config().bucket_size;
        assert!(table
            .candidate_buckets(k)
            .iter()
            .any(|&start| (start..start + bucket_size).contains(&idx)));
    }
    let stats = table.stats();
    log_info!("cuckoo stats at high load: {}", stats);
    assert!(stats.insert_count as usize >= truth.len());
}

#[test]
fn test_cuckoo_deterministic_under_seed() {
    let items = generate_items(CAPACITY / 2);
    let snapshot = || {
        let mut table = BucketCuckooTable::new(CAPACITY).unwrap();
        let outcomes: Vec<bool> = items.iter().map(|&(k, v)| table.put(k, v).is_ok()).collect();
        (outcomes, table.cells().to_vec(), table.hash_params().to_vec())
    };
    assert_eq!(snapshot(), snapshot());
}

#[test]
fn test_harness_evaluation_is_reproducible() {
    for kind in TableKind::ALL {
        let config = BenchConfig {
            algo: kind,
            log2_capacity: 12,
            fill_factor: 0.5,
            microbenchmark: false,
            seed: SEED,
        };
        let first = bench::run(&config).unwrap();
        let second = bench::run(&config).unwrap();
        assert_eq!(first.errors(), 0, "{}", kind);
        assert_eq!(first.errors(), second.errors());
        assert!(matches!(first, Report::Evaluation(_)));
    }
}

#[test]
fn test_workload_against_tables() {
    let workload = Workload::generate(CAPACITY, 0.6, SEED).unwrap();
    for kind in TableKind::ALL {
        let mut table = build_table(kind, CAPACITY, SEED).unwrap();
        let report = bench::evaluate(table.as_mut(), &workload, 0.6).unwrap();
        assert_eq!(report.errors, 0, "{}", kind);
        assert_eq!(report.capacity, CAPACITY);
        assert_eq!(table.len(), workload.distinct_keys());
    }
}
