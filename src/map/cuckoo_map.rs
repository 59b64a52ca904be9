//! 桶式Cuckoo哈希表核心实现
//!
//! d 个仿射哈希函数各选出一个含 B 个槽位的桶。插入时若全部候选槽位都被其他键占用，
//! 随机选一个函数踢出其桶首槽位的旧数据，并继续为旧数据寻找位置。
//! 踢出路径超过 L 时撤销整条路径，重新抽取哈希参数并整表重插。

use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::{
    error::{CapacityCause, TableError},
    hash::{AffineHash, AffineHashFamily},
    map::{
        bucket::{self, BucketScan, DEFAULT_BUCKET_SIZE},
        HashTable,
    },
    stats::{OperationStats, OperationStatsSnapshot},
    types::{Cell, Key, OperationType, Value},
};

/// 哈希表配置
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CuckooConfig {
    /// 候选哈希函数个数 d
    pub hash_count: usize,
    /// 每桶槽位数 B
    pub bucket_size: usize,
    /// 最大踢出路径长度 L
    pub max_eviction_chain: usize,
    /// 单次重哈希最多抽取参数的次数
    pub max_rehash_attempts: usize,
    /// 表内随机数生成器种子
    pub seed: u64,
}

impl Default for CuckooConfig {
    fn default() -> Self {
        Self {
            hash_count: 2,
            bucket_size: DEFAULT_BUCKET_SIZE,
            max_eviction_chain: 2,
            max_rehash_attempts: 16,
            seed: 42,
        }
    }
}

impl CuckooConfig {
    /// 校验配置与容量是否匹配
    pub fn validate(&self, capacity: usize) -> Result<(), TableError> {
        if self.hash_count == 0 {
            return Err(TableError::InvalidConfig {
                reason: "哈希函数个数必须至少为1".into(),
            });
        }
        if self.bucket_size == 0 || !self.bucket_size.is_power_of_two() {
            return Err(TableError::InvalidConfig {
                reason: format!("桶大小必须是2的幂: {}", self.bucket_size),
            });
        }
        if self.bucket_size > capacity {
            return Err(TableError::InvalidConfig {
                reason: format!("桶大小 {} 超过容量 {}", self.bucket_size, capacity),
            });
        }
        if self.max_rehash_attempts == 0 {
            return Err(TableError::InvalidConfig {
                reason: "重哈希次数必须至少为1".into(),
            });
        }
        Ok(())
    }
}

/// 单次放置的结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Placement {
    Inserted,
    Updated,
}

/// 桶式Cuckoo哈希表
#[derive(Debug, Clone)]
pub struct BucketCuckooTable {
    cells: Vec<Cell>,
    family: AffineHashFamily,
    config: CuckooConfig,
    rng: StdRng,
    len: usize,
    stats: OperationStats,
}

impl BucketCuckooTable {
    /// 使用默认配置 (d=2, B=2, L=2) 创建
    pub fn new(capacity: usize) -> Result<Self, TableError> {
        Self::with_config(capacity, CuckooConfig::default())
    }

    pub fn with_config(capacity: usize, config: CuckooConfig) -> Result<Self, TableError> {
        config.validate(capacity)?;
        let mut rng = StdRng::seed_from_u64(config.seed);
        let family =
            AffineHashFamily::new(config.hash_count, capacity, config.bucket_size, &mut rng)?;

        Ok(Self {
            cells: vec![Cell::default(); capacity],
            family,
            config,
            rng,
            len: 0,
            stats: OperationStats::new(),
        })
    }

    pub fn config(&self) -> &CuckooConfig {
        &self.config
    }

    pub fn bucket_count(&self) -> usize {
        self.cells.len() / self.config.bucket_size
    }

    /// 当前哈希参数
    pub fn hash_params(&self) -> &[AffineHash] {
        self.family.params()
    }

    /// 键的候选桶起始下标，按函数顺序
    pub fn candidate_buckets(&self, key: Key) -> Vec<usize> {
        self.family.candidate_buckets(key)
    }

    /// 所有槽位，按下标顺序
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// 以起始下标获取桶，`start` 必须来自哈希族
    pub(crate) fn bucket(&self, start: usize) -> &[Cell] {
        &self.cells[start..start + self.config.bucket_size]
    }

    /// 键所在槽位下标
    pub fn locate(&self, key: Key) -> Option<usize> {
        (0..self.family.len()).find_map(|function| {
            let start = self.family.bucket_start(function, key);
            bucket::find_slot_with_key(self.bucket(start), key).map(|i| start + i)
        })
    }

    /// 重新抽取哈希参数并重插全部数据，容量不变
    pub fn rehash(&mut self) -> Result<(), TableError> {
        self.rehash_with(None)
    }

    /// 不触发重哈希的放置：在候选桶中更新或插入，必要时沿踢出路径搬移旧数据
    ///
    /// 路径超过 L 时撤销全部搬移，返回 `EvictionChainExceeded`，表恢复到调用前状态。
    fn place(&mut self, key: Key, value: Value) -> Result<Placement, TableError> {
        let max_chain = self.config.max_eviction_chain;
        let mut path: Vec<(usize, Cell)> = Vec::new();
        let (mut current_key, mut current_value) = (key, value);
        let mut chain = 0;

        loop {
            if chain > max_chain {
                log_debug!(
                    "cuckoo eviction chain exceeded: key={} pending={} depth={}",
                    key,
                    current_key,
                    chain
                );
                self.rollback(path);
                return Err(TableError::EvictionChainExceeded { max_chain });
            }

            if let Some(placement) = self.try_direct_insert(current_key, current_value) {
                return Ok(placement);
            }

            // 全部 d*B 个槽位都被其他键占用，踢出随机候选桶的首槽位
            let function = self.rng.gen_range(0..self.family.len());
            let victim = self.family.bucket_start(function, current_key);
            let displaced = std::mem::replace(
                &mut self.cells[victim],
                Cell::occupied(current_key, current_value),
            );
            path.push((victim, displaced));
            self.stats.record(OperationType::Kick);
            log_debug!(
                "kicked key={} out of cell {} for key={}, depth={}",
                displaced.key,
                victim,
                current_key,
                chain
            );

            current_key = displaced.key;
            current_value = displaced.value;
            chain += 1;
        }
    }

    /// 在候选桶中直接放置；所有候选槽位都被其他键占用时返回 `None`
    fn try_direct_insert(&mut self, key: Key, value: Value) -> Option<Placement> {
        let bucket_size = self.config.bucket_size;
        let mut first_empty = None;

        for function in 0..self.family.len() {
            let start = self.family.bucket_start(function, key);
            self.stats.record_n(OperationType::Probe, bucket_size as u64);

            match bucket::scan(&self.cells[start..start + bucket_size], key) {
                BucketScan::Found(i) => {
                    self.cells[start + i].value = value;
                    return Some(Placement::Updated);
                }
                BucketScan::Empty(i) if first_empty.is_none() => first_empty = Some(start + i),
                BucketScan::Empty(_) | BucketScan::Full => {}
            }
        }

        let idx = first_empty?;
        self.cells[idx].store(key, value);
        Some(Placement::Inserted)
    }

    fn rollback(&mut self, path: Vec<(usize, Cell)>) {
        for (idx, cell) in path.into_iter().rev() {
            self.cells[idx] = cell;
        }
    }

    /// 整表重哈希，`pending` 为尚未放入表中的新键值
    ///
    /// 每次尝试重新抽取全部参数；所有尝试失败时恢复原槽位与参数并返回容量错误。
    fn rehash_with(&mut self, pending: Option<(Key, Value)>) -> Result<(), TableError> {
        let capacity = self.cells.len();
        let attempts = self.config.max_rehash_attempts;
        let previous_cells = std::mem::replace(&mut self.cells, vec![Cell::default(); capacity]);
        let previous_params = self.family.params().to_vec();

        for attempt in 1..=attempts {
            self.family.reroll(&mut self.rng);
            self.stats.record(OperationType::Rehash);
            if attempt > 1 {
                self.cells.fill(Cell::default());
            }

            // 空表的重插视为成功
            let mut reinserted = 0usize;
            let mut succeeded = true;
            let entries = previous_cells
                .iter()
                .filter_map(Cell::entry)
                .chain(pending);
            for (key, value) in entries {
                match self.place(key, value) {
                    Ok(_) => reinserted += 1,
                    Err(_) => {
                        succeeded = false;
                        break;
                    }
                }
            }

            if succeeded {
                log_info!(
                    "cuckoo rehash succeeded on attempt {}/{}: {} entries, capacity={}",
                    attempt,
                    attempts,
                    reinserted,
                    capacity
                );
                if pending.is_some() {
                    self.stats.record(OperationType::Insert);
                }
                self.len = reinserted;
                return Ok(());
            }

            self.stats.record(OperationType::RehashFailure);
            log_warn!(
                "cuckoo rehash attempt {}/{} failed after {} entries",
                attempt,
                attempts,
                reinserted
            );
        }

        self.cells = previous_cells;
        self.family.restore(previous_params);
        self.stats.record(OperationType::CapacityFailure);
        log_error!(
            "cuckoo rehash exhausted {} attempts: len={} capacity={}",
            attempts,
            self.len,
            capacity
        );
        Err(TableError::CapacityExceeded {
            capacity,
            size: self.len,
            cause: CapacityCause::RehashAttemptsExhausted { attempts },
        })
    }
}

impl HashTable for BucketCuckooTable {
    fn name(&self) -> &'static str {
        "bucket_cuckoo"
    }

    fn capacity(&self) -> usize {
        self.cells.len()
    }

    fn len(&self) -> usize {
        self.len
    }

    fn put(&mut self, key: Key, value: Value) -> Result<(), TableError> {
        match self.place(key, value) {
            Ok(Placement::Inserted) => {
                self.len += 1;
                self.stats.record(OperationType::Insert);
                Ok(())
            }
            Ok(Placement::Updated) => {
                self.stats.record(OperationType::Update);
                Ok(())
            }
            Err(e) if e.is_recoverable() => {
                log_debug!("rehashing for key={}: {}", key, e);
                self.rehash_with(Some((key, value)))
            }
            Err(e) => Err(e),
        }
    }

    fn get(&self, key: Key) -> Option<Value> {
        let bucket_size = self.config.bucket_size;
        for function in 0..self.family.len() {
            let start = self.family.bucket_start(function, key);
            let cells = &self.cells[start..start + bucket_size];
            if let Some(i) = bucket::find_slot_with_key(cells, key) {
                return Some(cells[i].value);
            }
        }
        None
    }

    fn stats(&self) -> OperationStatsSnapshot {
        self.stats.snapshot()
    }
}
