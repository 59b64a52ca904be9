//! 基准测试驱动 - 生成负载、执行插入与查询、校验并计时

pub mod report;
pub mod runner;
pub mod workload;

pub use report::{EvaluationReport, MicroReport, Report};
pub use runner::{evaluate, microbenchmark, run};
pub use workload::Workload;

use crate::{error::BenchError, hash::IndexMapper, types::TableKind};

/// 基准测试配置
#[derive(Clone, Debug, PartialEq)]
pub struct BenchConfig {
    pub algo: TableKind,
    /// 容量 M = 2^log2_capacity
    pub log2_capacity: u32,
    pub fill_factor: f32,
    /// 只对插入循环计时，跳过正确性校验
    pub microbenchmark: bool,
    pub seed: u64,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            algo: TableKind::Chaining,
            log2_capacity: 26,
            fill_factor: 0.5,
            microbenchmark: false,
            seed: 42,
        }
    }
}

impl BenchConfig {
    /// 与索引映射支持的最大容量一致
    pub const MAX_LOG2_CAPACITY: u32 = IndexMapper::MAX_LOG2_CAPACITY;

    pub fn capacity(&self) -> usize {
        1usize << self.log2_capacity
    }

    /// 负载条数 n = floor(M * fill_factor)
    pub fn insert_count(&self) -> usize {
        insert_count(self.capacity(), self.fill_factor)
    }

    pub fn validate(&self) -> Result<(), BenchError> {
        if !(1..=Self::MAX_LOG2_CAPACITY).contains(&self.log2_capacity) {
            return Err(BenchError::Usage {
                reason: format!(
                    "log2 capacity must be within 1..={}, got {}",
                    Self::MAX_LOG2_CAPACITY,
                    self.log2_capacity
                ),
            });
        }
        if !self.fill_factor.is_finite() || self.fill_factor <= 0.0 {
            return Err(BenchError::Usage {
                reason: format!("fill factor must be a positive number, got {}", self.fill_factor),
            });
        }
        if self.capacity() as f64 * self.fill_factor as f64 > u32::MAX as f64 {
            return Err(BenchError::Usage {
                reason: format!("fill factor {} yields too many insertions", self.fill_factor),
            });
        }
        Ok(())
    }
}

/// n = floor(M * fill_factor)
pub fn insert_count(capacity: usize, fill_factor: f32) -> usize {
    (capacity as f64 * fill_factor as f64).floor() as usize
}
