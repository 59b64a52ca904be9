//! 开放寻址哈希表 - 探测序列由 [`ProbeStrategy`] 决定
//!
//! 表最多存放 M-1 个不同键，保证始终留有一个空槽位。
//! 没有删除操作，因此不需要墓碑标记。

use crate::{
    error::{CapacityCause, TableError},
    hash::{IndexMapper, LinearProbeStrategy, ProbeStrategy, QuadraticProbeStrategy},
    map::HashTable,
    stats::{OperationStats, OperationStatsSnapshot},
    types::{Cell, Key, OperationType, Value},
};

/// 线性探测表
pub type LinearTable = ProbingTable<LinearProbeStrategy>;

/// 二次探测表
pub type QuadraticTable = ProbingTable<QuadraticProbeStrategy>;

/// 开放寻址哈希表
#[derive(Debug, Clone)]
pub struct ProbingTable<S: ProbeStrategy> {
    mapper: IndexMapper,
    cells: Vec<Cell>,
    len: usize,
    strategy: S,
    stats: OperationStats,
}

impl<S: ProbeStrategy> ProbingTable<S> {
    pub fn new(capacity: usize) -> Result<Self, TableError> {
        Self::with_strategy(capacity, S::default())
    }

    pub fn with_strategy(capacity: usize, strategy: S) -> Result<Self, TableError> {
        let mapper = IndexMapper::new(capacity)?;
        Ok(Self {
            mapper,
            cells: vec![Cell::default(); capacity],
            len: 0,
            strategy,
            stats: OperationStats::new(),
        })
    }

    /// 可存放的最大不同键数
    pub fn max_len(&self) -> usize {
        self.cells.len() - 1
    }

    /// 所有槽位，按下标顺序
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn strategy(&self) -> &S {
        &self.strategy
    }

    #[inline]
    fn slot(&self, key: Key, attempt: u64) -> usize {
        self.mapper.index(self.strategy.probe_hash(key, attempt))
    }

    fn capacity_error(&mut self, cause: CapacityCause) -> TableError {
        self.stats.record(OperationType::CapacityFailure);
        log_debug!(
            "{} table rejected insert: len={} capacity={} cause={}",
            self.strategy.name(),
            self.len,
            self.cells.len(),
            cause
        );
        TableError::CapacityExceeded {
            capacity: self.cells.len(),
            size: self.len,
            cause,
        }
    }
}

impl<S: ProbeStrategy> HashTable for ProbingTable<S> {
    fn name(&self) -> &'static str {
        self.strategy.name()
    }

    fn capacity(&self) -> usize {
        self.cells.len()
    }

    fn len(&self) -> usize {
        self.len
    }

    fn put(&mut self, key: Key, value: Value) -> Result<(), TableError> {
        let attempts = self.cells.len() as u64;
        let max_len = self.max_len();

        for attempt in 0..attempts {
            let idx = self.slot(key, attempt);
            self.stats.record(OperationType::Probe);

            let cell = &mut self.cells[idx];
            if cell.is_empty() {
                // 探测序列中首个空槽之前没有该键，这是一次新插入
                if self.len >= max_len {
                    return Err(self.capacity_error(CapacityCause::LoadLimit));
                }
                cell.store(key, value);
                self.len += 1;
                self.stats.record(OperationType::Insert);
                return Ok(());
            }
            if cell.key == key {
                cell.value = value;
                self.stats.record(OperationType::Update);
                return Ok(());
            }
        }

        Err(self.capacity_error(CapacityCause::ProbeSequenceExhausted))
    }

    fn get(&self, key: Key) -> Option<Value> {
        let attempts = self.cells.len() as u64;

        for attempt in 0..attempts {
            let cell = &self.cells[self.slot(key, attempt)];
            if cell.is_empty() {
                return None;
            }
            if cell.key == key {
                return Some(cell.value);
            }
        }
        None
    }

    fn stats(&self) -> OperationStatsSnapshot {
        self.stats.snapshot()
    }
}
