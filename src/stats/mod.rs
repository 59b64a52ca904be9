//! 统计模块 - 哈希表写入路径指标

pub mod operation;

pub use operation::{OperationStats, OperationStatsSnapshot};
