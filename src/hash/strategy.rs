//! 探测策略模块 - 定义开放寻址的探测序列

/// 探测策略特征
///
/// 第 i 次探测访问 `index(k + offset(i))`。
pub trait ProbeStrategy: Default {
    /// 第 i 次探测相对起始位置的偏移
    fn offset(&self, attempt: u64) -> u64;

    /// 表名称
    fn name(&self) -> &'static str;

    /// 计算第 i 次探测的原始哈希值（按 2^32 回绕）
    #[inline]
    fn probe_hash(&self, key: u32, attempt: u64) -> u32 {
        key.wrapping_add(self.offset(attempt) as u32)
    }

    /// 前 n 次探测的偏移序列
    fn offsets(&self, n: u64) -> Vec<u64> {
        (0..n).map(|i| self.offset(i)).collect()
    }
}

// 单元测试
#[cfg(test)]
mod tests {
    use super::*;
    use crate::hash::{LinearProbeStrategy, QuadraticProbeStrategy};

    #[test]
    fn test_probe_hash_wraps() {
        let strategy = LinearProbeStrategy;
        assert_eq!(strategy.probe_hash(u32::MAX, 1), 0);
        assert_eq!(strategy.probe_hash(5, 3), 8);
    }

    #[test]
    fn test_strategy_names() {
        assert_eq!(LinearProbeStrategy.name(), "linear");
        assert_eq!(QuadraticProbeStrategy.name(), "quadratic");
    }
}
