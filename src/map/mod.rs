//! 哈希表模块 - 各冲突解决策略的实现

pub mod bucket;
pub mod chaining;
pub mod cuckoo_map;
pub mod open_addressing;
pub mod reference;

pub use bucket::{BucketScan, DEFAULT_BUCKET_SIZE};
pub use chaining::ChainingTable;
pub use cuckoo_map::{BucketCuckooTable, CuckooConfig};
pub use open_addressing::{LinearTable, ProbingTable, QuadraticTable};
pub use reference::ReferenceTable;

use crate::{
    error::TableError,
    stats::OperationStatsSnapshot,
    types::{Key, Value},
};

/// 所有哈希表实现共享的接口
pub trait HashTable {
    /// 报告中使用的算法名称
    fn name(&self) -> &'static str;

    /// 构造时固定的槽位数 M
    fn capacity(&self) -> usize;

    /// 当前存放的不同键数
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// 插入或更新键值；失败时表内容保持不变
    fn put(&mut self, key: Key, value: Value) -> Result<(), TableError>;

    /// 查询键对应的值
    fn get(&self, key: Key) -> Option<Value>;

    /// 写入路径统计
    fn stats(&self) -> OperationStatsSnapshot;

    /// 当前负载因子
    fn load_factor(&self) -> f32 {
        self.len() as f32 / self.capacity() as f32
    }
}

impl<T: HashTable + ?Sized> HashTable for Box<T> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn capacity(&self) -> usize {
        (**self).capacity()
    }

    fn len(&self) -> usize {
        (**self).len()
    }

    fn put(&mut self, key: Key, value: Value) -> Result<(), TableError> {
        (**self).put(key, value)
    }

    fn get(&self, key: Key) -> Option<Value> {
        (**self).get(key)
    }

    fn stats(&self) -> OperationStatsSnapshot {
        (**self).stats()
    }
}
