//! 线性探测策略 - 使用线性探测解决冲突

use crate::hash::strategy::ProbeStrategy;

/// 线性探测策略：第 i 次探测偏移 i
#[derive(Debug, Clone, Copy, Default)]
pub struct LinearProbeStrategy;

impl ProbeStrategy for LinearProbeStrategy {
    #[inline]
    fn offset(&self, attempt: u64) -> u64 {
        attempt
    }

    fn name(&self) -> &'static str {
        "linear"
    }
}
