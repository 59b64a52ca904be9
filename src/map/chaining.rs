//! 链地址法哈希表
//!
//! 每个槽位持有一条无长度上限的链；链节点存放在按下标寻址的节点池中。

use crate::{
    error::TableError,
    hash::IndexMapper,
    map::HashTable,
    stats::{OperationStats, OperationStatsSnapshot},
    types::{Key, OperationType, Value},
};

const NIL: usize = usize::MAX;

#[derive(Debug, Clone, Copy)]
struct ChainNode {
    key: Key,
    value: Value,
    next: usize,
}

/// 链地址法哈希表
#[derive(Debug, Clone)]
pub struct ChainingTable {
    mapper: IndexMapper,
    heads: Vec<usize>,
    nodes: Vec<ChainNode>,
    stats: OperationStats,
}

impl ChainingTable {
    pub fn new(capacity: usize) -> Result<Self, TableError> {
        let mapper = IndexMapper::new(capacity)?;
        Ok(Self {
            mapper,
            heads: vec![NIL; capacity],
            nodes: Vec::new(),
            stats: OperationStats::new(),
        })
    }

    /// 槽位上的链长度
    pub fn chain_len(&self, slot: usize) -> usize {
        self.chain(slot).count()
    }

    /// 按链顺序遍历槽位上的键值
    pub fn chain(&self, slot: usize) -> ChainIter<'_> {
        ChainIter {
            nodes: &self.nodes,
            cursor: self.heads.get(slot).copied().unwrap_or(NIL),
        }
    }

    /// 最长链长度
    pub fn max_chain_len(&self) -> usize {
        (0..self.heads.len())
            .map(|slot| self.chain_len(slot))
            .max()
            .unwrap_or(0)
    }

    fn push_node(&mut self, key: Key, value: Value) -> usize {
        let handle = self.nodes.len();
        self.nodes.push(ChainNode { key, value, next: NIL });
        self.stats.record(OperationType::Insert);
        handle
    }
}

impl HashTable for ChainingTable {
    fn name(&self) -> &'static str {
        "chaining"
    }

    fn capacity(&self) -> usize {
        self.mapper.capacity()
    }

    fn len(&self) -> usize {
        self.nodes.len()
    }

    fn put(&mut self, key: Key, value: Value) -> Result<(), TableError> {
        let slot = self.mapper.index(key);
        let mut cursor = self.heads[slot];

        if cursor == NIL {
            self.heads[slot] = self.push_node(key, value);
            return Ok(());
        }

        loop {
            self.stats.record(OperationType::Probe);
            let node = &mut self.nodes[cursor];
            if node.key == key {
                node.value = value;
                self.stats.record(OperationType::Update);
                return Ok(());
            }
            if node.next == NIL {
                let handle = self.push_node(key, value);
                self.nodes[cursor].next = handle;
                return Ok(());
            }
            cursor = node.next;
        }
    }

    fn get(&self, key: Key) -> Option<Value> {
        self.chain(self.mapper.index(key))
            .find(|&(k, _)| k == key)
            .map(|(_, v)| v)
    }

    fn stats(&self) -> OperationStatsSnapshot {
        self.stats.snapshot()
    }
}

/// 链迭代器
pub struct ChainIter<'a> {
    nodes: &'a [ChainNode],
    cursor: usize,
}

impl Iterator for ChainIter<'_> {
    type Item = (Key, Value);

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.nodes.get(self.cursor)?;
        self.cursor = node.next;
        Some((node.key, node.value))
    }
}
