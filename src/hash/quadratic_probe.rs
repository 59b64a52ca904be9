//! 二次探测策略 - 三角数偏移，缓解线性探测的一次聚集

use crate::hash::strategy::ProbeStrategy;

/// 二次探测策略：第 i 次探测偏移 `i/2 + i²/2`（向下取整）
#[derive(Debug, Clone, Copy, Default)]
pub struct QuadraticProbeStrategy;

impl ProbeStrategy for QuadraticProbeStrategy {
    #[inline]
    fn offset(&self, attempt: u64) -> u64 {
        // i < 2^32 时 i*i 不会溢出 u64
        attempt / 2 + attempt.wrapping_mul(attempt) / 2
    }

    fn name(&self) -> &'static str {
        "quadratic"
    }
}
