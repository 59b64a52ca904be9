//! 固定容量哈希表的冲突解决策略对比
//!
//! 提供四种固定容量的 `u32 -> u32` 哈希表，以及一个对照用的标准库封装：
//! - 链地址法 [`ChainingTable`]
//! - 线性探测 [`LinearTable`]
//! - 二次探测 [`QuadraticTable`]
//! - 桶式Cuckoo哈希 [`BucketCuckooTable`]，踢出路径有界，失败时整表重哈希
//!
//! ## 快速开始
//!
//! ```rust
//! use hashing_bench::*;
//!
//! let mut table = BucketCuckooTable::new(1 << 10).expect("容量必须是2的幂");
//! table.put(7, 70).expect("插入失败");
//! assert_eq!(table.get(7), Some(70));
//! assert_eq!(table.get(8), None);
//! ```

#![warn(clippy::all)]
#[cfg(feature = "logging")]
#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {
        log::debug!($($arg)*)
    };
}

#[cfg(feature = "logging")]
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {
        log::info!($($arg)*)
    };
}

#[cfg(feature = "logging")]
#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => {
        log::warn!($($arg)*)
    };
}

#[cfg(feature = "logging")]
#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => {
        log::error!($($arg)*)
    };
}

#[cfg(not(feature = "logging"))]
#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "logging"))]
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "logging"))]
#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "logging"))]
#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => {};
}
// 核心模块导出
pub mod error;
pub mod types;
pub mod hash;
pub mod map;
pub mod stats;
pub mod bench;
pub mod cli;

// 公共接口导出
pub use crate::{
    bench::{BenchConfig, EvaluationReport, MicroReport, Report, Workload},
    error::{BenchError, CapacityCause, TableError},
    hash::{IndexMapper, LinearProbeStrategy, ProbeStrategy, QuadraticProbeStrategy},
    map::{
        BucketCuckooTable, ChainingTable, CuckooConfig, HashTable, LinearTable, ProbingTable,
        QuadraticTable, ReferenceTable,
    },
    stats::{OperationStats, OperationStatsSnapshot},
    types::{Cell, Key, TableKind, Value},
};

/// 按算法种类构造哈希表
///
/// `seed` 只影响需要随机数的实现（目前为Cuckoo表）。
pub fn build_table(
    kind: TableKind,
    capacity: usize,
    seed: u64,
) -> Result<Box<dyn HashTable>, TableError> {
    Ok(match kind {
        TableKind::Chaining => Box::new(ChainingTable::new(capacity)?),
        TableKind::Linear => Box::new(LinearTable::new(capacity)?),
        TableKind::Quadratic => Box::new(QuadraticTable::new(capacity)?),
        TableKind::BucketCuckoo => Box::new(BucketCuckooTable::with_config(
            capacity,
            CuckooConfig {
                seed,
                ..CuckooConfig::default()
            },
        )?),
        TableKind::Stl => Box::new(ReferenceTable::new(capacity)?),
    })
}

/// 批量插入，遇到第一个错误即停止，返回成功条数
pub fn batch_insert<T: HashTable + ?Sized>(
    table: &mut T,
    items: impl IntoIterator<Item = (Key, Value)>,
) -> Result<usize, TableError> {
    let mut count = 0;
    for (k, v) in items {
        table.put(k, v)?;
        count += 1;
    }
    Ok(count)
}

/// 批量查询
pub fn batch_get<T: HashTable + ?Sized>(
    table: &T,
    keys: impl IntoIterator<Item = Key>,
) -> Vec<Option<Value>> {
    keys.into_iter().map(|k| table.get(k)).collect()
}
