//! 仿射哈希族 - Cuckoo表的 d 个候选桶哈希函数
//!
//! `h_i(k) = a_i * k + b_i (mod 2^32)`，取高 log2(M) 位后折叠到桶编号。

use rand::Rng;

use crate::{error::TableError, hash::IndexMapper};

/// 单个仿射变换参数
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AffineHash {
    pub a: u32,
    pub b: u32,
}

impl AffineHash {
    /// 在32位域上计算 `a * k + b`
    #[inline]
    pub fn apply(&self, key: u32) -> u32 {
        self.a.wrapping_mul(key).wrapping_add(self.b)
    }
}

/// 仿射哈希族：参数集合与桶寻址方式
#[derive(Debug, Clone)]
pub struct AffineHashFamily {
    functions: Vec<AffineHash>,
    shift: u32,
    bucket_mask: u32,
    bucket_size: usize,
    param_max: u32,
}

impl AffineHashFamily {
    /// 创建哈希族并立即抽取一组参数
    ///
    /// `capacity` 为槽位总数 M，`bucket_size` 为每桶槽位数 B。
    pub fn new<R: Rng>(
        hash_count: usize,
        capacity: usize,
        bucket_size: usize,
        rng: &mut R,
    ) -> Result<Self, TableError> {
        let mapper = IndexMapper::new(capacity)?;
        if hash_count == 0 {
            return Err(TableError::InvalidConfig {
                reason: "哈希函数个数必须至少为1".into(),
            });
        }
        if bucket_size == 0 || !bucket_size.is_power_of_two() || bucket_size > capacity {
            return Err(TableError::InvalidConfig {
                reason: format!("桶大小必须是不超过容量的2的幂: {}", bucket_size),
            });
        }

        let log2_capacity = mapper.log2_capacity();
        let bucket_count = capacity / bucket_size;
        let param_max = (2u64 << (32 - log2_capacity)).min(u32::MAX as u64) as u32;

        let mut family = Self {
            functions: vec![AffineHash { a: 1, b: 1 }; hash_count],
            shift: 32 - log2_capacity,
            bucket_mask: (bucket_count - 1) as u32,
            bucket_size,
            param_max,
        };
        family.reroll(rng);
        Ok(family)
    }

    /// 重新抽取所有函数的参数
    pub fn reroll<R: Rng>(&mut self, rng: &mut R) {
        for function in &mut self.functions {
            function.a = rng.gen_range(1..=self.param_max);
            function.b = rng.gen_range(1..=self.param_max);
        }
    }

    /// 第 i 个函数选中的桶的首个槽位下标
    #[inline]
    pub fn bucket_start(&self, function: usize, key: u32) -> usize {
        let h = self.functions[function].apply(key);
        let folded = h.checked_shr(self.shift).unwrap_or(0);
        (folded & self.bucket_mask) as usize * self.bucket_size
    }

    /// 键的全部候选桶起始下标，按函数顺序
    pub fn candidate_buckets(&self, key: u32) -> Vec<usize> {
        (0..self.functions.len())
            .map(|i| self.bucket_start(i, key))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.functions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }

    pub fn params(&self) -> &[AffineHash] {
        &self.functions
    }

    /// 参数抽取区间上界（含）
    pub fn param_max(&self) -> u32 {
        self.param_max
    }

    pub(crate) fn restore(&mut self, params: Vec<AffineHash>) {
        debug_assert_eq!(params.len(), self.functions.len());
        self.functions = params;
    }
}

// 单元测试
#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn test_param_range_matches_capacity() {
        let mut rng = StdRng::seed_from_u64(42);
        let family = AffineHashFamily::new(2, 1 << 26, 2, &mut rng).unwrap();
        assert_eq!(family.param_max(), 128);
        for f in family.params() {
            assert!((1..=128).contains(&f.a));
            assert!((1..=128).contains(&f.b));
        }
    }

    #[test]
    fn test_bucket_start_is_aligned_and_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        let family = AffineHashFamily::new(3, 1024, 4, &mut rng).unwrap();
        for key in (0..10_000u32).map(|k| k.wrapping_mul(2_654_435_761)) {
            for idx in family.candidate_buckets(key) {
                assert!(idx < 1024);
                assert_eq!(idx % 4, 0, "桶起始下标应按桶大小对齐");
            }
        }
    }

    #[test]
    fn test_same_seed_same_params() {
        let mut rng1 = StdRng::seed_from_u64(99);
        let mut rng2 = StdRng::seed_from_u64(99);
        let mut f1 = AffineHashFamily::new(2, 64, 2, &mut rng1).unwrap();
        let mut f2 = AffineHashFamily::new(2, 64, 2, &mut rng2).unwrap();
        assert_eq!(f1.params(), f2.params());

        f1.reroll(&mut rng1);
        f2.reroll(&mut rng2);
        assert_eq!(f1.params(), f2.params());
    }

    #[test]
    fn test_invalid_bucket_size() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(AffineHashFamily::new(2, 16, 3, &mut rng).is_err());
        assert!(AffineHashFamily::new(2, 16, 32, &mut rng).is_err());
        assert!(AffineHashFamily::new(0, 16, 2, &mut rng).is_err());
    }

    #[test]
    fn test_single_bucket_table() {
        let mut rng = StdRng::seed_from_u64(1);
        let family = AffineHashFamily::new(2, 2, 2, &mut rng).unwrap();
        assert_eq!(family.bucket_start(0, 12345), 0);
        assert_eq!(family.bucket_start(1, u32::MAX), 0);
    }
}
