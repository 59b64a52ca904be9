//! 统一错误处理 - 所有可能错误类型和恢复逻辑

use std::fmt;

/// 容量耗尽的具体原因
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CapacityCause {
    /// 开放寻址表已存放 M-1 个不同键
    LoadLimit,
    /// 探测序列走满 M 步仍未找到位置
    ProbeSequenceExhausted,
    /// Cuckoo 重哈希尝试次数耗尽
    RehashAttemptsExhausted { attempts: usize },
}

impl fmt::Display for CapacityCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LoadLimit => write!(f, "已达负载上限"),
            Self::ProbeSequenceExhausted => write!(f, "探测序列耗尽"),
            Self::RehashAttemptsExhausted { attempts } => {
                write!(f, "重哈希 {} 次均失败", attempts)
            }
        }
    }
}

/// 哈希表操作可能发生的错误
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TableError {
    #[error("表已满，无法插入新条目 (容量: {capacity}, 当前大小: {size}, 原因: {cause})")]
    CapacityExceeded {
        capacity: usize,
        size: usize,
        cause: CapacityCause,
    },

    #[error("踢出路径超过最大长度限制 ({max_chain})")]
    EvictionChainExceeded { max_chain: usize },

    #[error("无效配置: {reason}")]
    InvalidConfig { reason: String },
}

impl TableError {
    /// 获取错误恢复建议
    pub fn recovery_suggestion(&self) -> Option<&'static str> {
        match self {
            Self::CapacityExceeded { cause: CapacityCause::RehashAttemptsExhausted { .. }, .. } => {
                Some("增加重哈希次数、桶大小或哈希函数个数")
            }
            Self::CapacityExceeded { .. } => Some("减小填充因子或增大表容量"),
            Self::EvictionChainExceeded { .. } => Some("重新选取哈希函数参数后重试"),
            Self::InvalidConfig { .. } => Some("检查配置参数"),
        }
    }

    /// 判断错误是否可恢复
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::EvictionChainExceeded { .. })
    }

    /// 是否为容量耗尽
    pub fn is_capacity_exceeded(&self) -> bool {
        matches!(self, Self::CapacityExceeded { .. })
    }
}

/// 基准测试驱动可能发生的错误
#[derive(Debug, thiserror::Error)]
pub enum BenchError {
    #[error("用法错误: {reason}")]
    Usage { reason: String },

    #[error(transparent)]
    Table(#[from] TableError),
}

impl BenchError {
    /// 进程退出码：用法错误为 2，其余为 1
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Usage { .. } => 2,
            Self::Table(_) => 1,
        }
    }

    /// 表错误的恢复建议，用法错误由 clap 给出提示
    pub fn recovery_suggestion(&self) -> Option<&'static str> {
        match self {
            Self::Usage { .. } => None,
            Self::Table(e) => e.recovery_suggestion(),
        }
    }
}
