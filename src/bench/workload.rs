//! 负载生成 - 由固定种子决定的插入序列与查询真值

use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};

use crate::{
    bench::insert_count,
    error::TableError,
    map::{HashTable, ReferenceTable},
    types::{Key, Value},
};

/// 一次评测使用的完整负载
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workload {
    /// 插入序列，键可能重复，值依次为 1, 2, 3, ...
    pub inserts: Vec<(Key, Value)>,
    /// 每个键的最终值，已打乱顺序
    pub lookups: Vec<(Key, Value)>,
}

impl Workload {
    /// 生成负载
    ///
    /// 先抽取 n 个键组成键池，再从键池中抽取 n 次插入；
    /// 真值由参考表得到，查询顺序用同一生成器打乱。
    pub fn generate(capacity: usize, fill_factor: f32, seed: u64) -> Result<Self, TableError> {
        let mut rng = StdRng::seed_from_u64(seed);
        let n = insert_count(capacity, fill_factor);

        let pool: Vec<Key> = (0..n).map(|_| rng.gen()).collect();
        let inserts: Vec<(Key, Value)> = (0..n)
            .map(|i| (pool[rng.gen_range(0..n)], i as Value + 1))
            .collect();

        let mut truth = ReferenceTable::new(capacity)?;
        for &(k, v) in &inserts {
            truth.put(k, v)?;
        }

        let mut lookups: Vec<(Key, Value)> = truth.entries().collect();
        lookups.sort_unstable();
        lookups.shuffle(&mut rng);

        Ok(Self { inserts, lookups })
    }

    /// 不同键的个数
    pub fn distinct_keys(&self) -> usize {
        self.lookups.len()
    }

    pub fn len(&self) -> usize {
        self.inserts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inserts.is_empty()
    }
}
