// src/stats/operation.rs
//! 操作统计 - 跟踪哈希表写入路径的开销

use std::fmt;

use crate::types::OperationType;

/// 操作统计快照
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct OperationStatsSnapshot {
    pub insert_count: u64,
    pub update_count: u64,
    pub probe_count: u64,
    pub kick_count: u64,
    pub rehash_count: u64,
    pub rehash_failure_count: u64,
    pub capacity_failure_count: u64,
}

impl OperationStatsSnapshot {
    /// 每次成功写入的平均探测次数
    pub fn probes_per_put(&self) -> f64 {
        let puts = self.insert_count + self.update_count;
        if puts == 0 {
            0.0
        } else {
            self.probe_count as f64 / puts as f64
        }
    }
}

impl fmt::Display for OperationStatsSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "inserts={} updates={} probes={} ({:.2}/put) kicks={} rehashes={} failed_rehashes={} capacity_failures={}",
            self.insert_count,
            self.update_count,
            self.probe_count,
            self.probes_per_put(),
            self.kick_count,
            self.rehash_count,
            self.rehash_failure_count,
            self.capacity_failure_count,
        )
    }
}

/// 单线程操作计数器，由各哈希表独占
#[derive(Debug, Default, Clone)]
pub struct OperationStats {
    snapshot: OperationStatsSnapshot,
}

impl OperationStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// 记录一次操作
    #[inline]
    pub fn record(&mut self, op_type: OperationType) {
        self.record_n(op_type, 1);
    }

    /// 记录 n 次同类操作
    #[inline]
    pub fn record_n(&mut self, op_type: OperationType, n: u64) {
        let counter = match op_type {
            OperationType::Insert => &mut self.snapshot.insert_count,
            OperationType::Update => &mut self.snapshot.update_count,
            OperationType::Probe => &mut self.snapshot.probe_count,
            OperationType::Kick => &mut self.snapshot.kick_count,
            OperationType::Rehash => &mut self.snapshot.rehash_count,
            OperationType::RehashFailure => &mut self.snapshot.rehash_failure_count,
            OperationType::CapacityFailure => &mut self.snapshot.capacity_failure_count,
        };
        *counter += n;
    }

    /// 获取操作统计快照
    pub fn snapshot(&self) -> OperationStatsSnapshot {
        self.snapshot
    }
}
