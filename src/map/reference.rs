//! 参考实现 - 标准库 HashMap 的薄封装，用于生成基准真值和性能对照

use std::collections::HashMap;

use ahash::RandomState;

use crate::{
    error::TableError,
    hash::IndexMapper,
    map::HashTable,
    stats::{OperationStats, OperationStatsSnapshot},
    types::{Key, OperationType, Value},
};

const REFERENCE_SEED: usize = 42;

/// 标准库 HashMap 封装，不受固定容量约束
#[derive(Debug, Clone)]
pub struct ReferenceTable {
    map: HashMap<Key, Value, RandomState>,
    capacity: usize,
    stats: OperationStats,
}

impl ReferenceTable {
    /// `capacity` 仅作为报告用的名义容量
    pub fn new(capacity: usize) -> Result<Self, TableError> {
        let mapper = IndexMapper::new(capacity)?;
        Ok(Self {
            map: HashMap::with_hasher(RandomState::with_seed(REFERENCE_SEED)),
            capacity: mapper.capacity(),
            stats: OperationStats::new(),
        })
    }

    /// 按任意顺序遍历全部键值
    pub fn entries(&self) -> impl Iterator<Item = (Key, Value)> + '_ {
        self.map.iter().map(|(&k, &v)| (k, v))
    }
}

impl HashTable for ReferenceTable {
    fn name(&self) -> &'static str {
        "stl"
    }

    fn capacity(&self) -> usize {
        self.capacity
    }

    fn len(&self) -> usize {
        self.map.len()
    }

    fn put(&mut self, key: Key, value: Value) -> Result<(), TableError> {
        match self.map.insert(key, value) {
            Some(_) => self.stats.record(OperationType::Update),
            None => self.stats.record(OperationType::Insert),
        }
        Ok(())
    }

    fn get(&self, key: Key) -> Option<Value> {
        self.map.get(&key).copied()
    }

    fn stats(&self) -> OperationStatsSnapshot {
        self.stats.snapshot()
    }
}
