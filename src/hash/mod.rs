//! 哈希模块 - 统一管理哈希相关功能

pub mod strategy;
pub mod linear_probe;
pub mod quadratic_probe;
pub mod affine;

pub use strategy::ProbeStrategy;
pub use linear_probe::LinearProbeStrategy;
pub use quadratic_probe::QuadraticProbeStrategy;
pub use affine::{AffineHash, AffineHashFamily};

use crate::error::TableError;

/// 索引映射 - 把整数哈希值映射到 [0, M)
///
/// M 必须是2的幂，取模通过位与完成。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexMapper {
    mask: u32,
    log2_capacity: u32,
}

impl IndexMapper {
    /// 最大支持容量 2^31
    pub const MAX_LOG2_CAPACITY: u32 = 31;

    /// 创建新映射，容量必须是2的幂
    pub fn new(capacity: usize) -> Result<Self, TableError> {
        if capacity == 0 || !capacity.is_power_of_two() {
            return Err(TableError::InvalidConfig {
                reason: format!("容量必须是2的幂: {}", capacity),
            });
        }
        let log2_capacity = capacity.trailing_zeros();
        if log2_capacity > Self::MAX_LOG2_CAPACITY {
            return Err(TableError::InvalidConfig {
                reason: format!("容量过大: 2^{}", log2_capacity),
            });
        }
        Ok(Self {
            mask: (capacity - 1) as u32,
            log2_capacity,
        })
    }

    /// 计算 h mod M
    #[inline]
    pub fn index(&self, h: u32) -> usize {
        (h & self.mask) as usize
    }

    pub fn capacity(&self) -> usize {
        self.mask as usize + 1
    }

    pub fn log2_capacity(&self) -> u32 {
        self.log2_capacity
    }
}

// 单元测试
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_mapping_masks_high_bits() {
        let mapper = IndexMapper::new(16).unwrap();
        assert_eq!(mapper.index(0), 0);
        assert_eq!(mapper.index(15), 15);
        assert_eq!(mapper.index(16), 0);
        assert_eq!(mapper.index(0xFFFF_FFF3), 3);
        assert_eq!(mapper.capacity(), 16);
        assert_eq!(mapper.log2_capacity(), 4);
    }

    #[test]
    fn test_rejects_non_power_of_two() {
        assert!(IndexMapper::new(0).is_err());
        assert!(IndexMapper::new(12).is_err());
        assert!(IndexMapper::new(1).is_ok());
    }
}
