// src/map/bucket.rs
//! 桶实现 - Cuckoo表中按组寻址的连续槽位

use crate::types::{Cell, Key};

pub const DEFAULT_BUCKET_SIZE: usize = 2;

/// 单个桶的扫描结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BucketScan {
    /// 桶内某槽位存放该键
    Found(usize),
    /// 桶内没有该键，首个空槽位下标
    Empty(usize),
    /// 桶已满且没有该键
    Full,
}

/// 在桶内查找存放指定键的槽位，遇到空槽位不提前结束
pub fn find_slot_with_key(bucket: &[Cell], key: Key) -> Option<usize> {
    bucket.iter().position(|cell| cell.holds(key))
}

/// 扫描桶：键匹配优先于空槽位
pub fn scan(bucket: &[Cell], key: Key) -> BucketScan {
    let mut first_empty = None;
    for (i, cell) in bucket.iter().enumerate() {
        if cell.holds(key) {
            return BucketScan::Found(i);
        }
        if first_empty.is_none() && cell.is_empty() {
            first_empty = Some(i);
        }
    }
    first_empty.map_or(BucketScan::Full, BucketScan::Empty)
}

/// 已占用槽位数
pub fn occupied(bucket: &[Cell]) -> usize {
    bucket.iter().filter(|cell| cell.valid).count()
}

/// 桶内已占用槽位是否构成前缀（空槽位之后不再有数据）
pub fn is_packed(bucket: &[Cell]) -> bool {
    let used = occupied(bucket);
    bucket[..used].iter().all(|cell| cell.valid)
}
