//! 核心类型定义 - 共享类型和接口

use std::{fmt, str::FromStr};

use clap::ValueEnum;

/// 键类型 - 任意位模式的32位整数
pub type Key = u32;

/// 值类型
pub type Value = u32;

/// 开放寻址表与Cuckoo表使用的槽位
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cell {
    pub key: Key,
    pub value: Value,
    pub valid: bool,
}

impl Cell {
    /// 创建已占用槽位
    pub const fn occupied(key: Key, value: Value) -> Self {
        Self { key, value, valid: true }
    }

    /// 是否为空槽位
    #[inline]
    pub const fn is_empty(&self) -> bool {
        !self.valid
    }

    /// 槽位是否存放指定键
    #[inline]
    pub const fn holds(&self, key: Key) -> bool {
        self.valid && self.key == key
    }

    /// 写入键值并标记为已占用
    #[inline]
    pub fn store(&mut self, key: Key, value: Value) {
        self.key = key;
        self.value = value;
        self.valid = true;
    }

    /// 以 (键, 值) 形式取出内容
    #[inline]
    pub fn entry(&self) -> Option<(Key, Value)> {
        self.valid.then_some((self.key, self.value))
    }
}

/// 操作类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationType {
    Insert,
    Update,
    Probe,
    Kick,
    Rehash,
    RehashFailure,
    CapacityFailure,
}

/// 可选的哈希表实现
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum TableKind {
    Chaining,
    Linear,
    Quadratic,
    #[value(name = "bucket_cuckoo")]
    BucketCuckoo,
    Stl,
}

impl TableKind {
    pub const ALL: [TableKind; 5] = [
        TableKind::Chaining,
        TableKind::Linear,
        TableKind::Quadratic,
        TableKind::BucketCuckoo,
        TableKind::Stl,
    ];

    /// 命令行与报告中使用的名称
    pub const fn name(self) -> &'static str {
        match self {
            Self::Chaining => "chaining",
            Self::Linear => "linear",
            Self::Quadratic => "quadratic",
            Self::BucketCuckoo => "bucket_cuckoo",
            Self::Stl => "stl",
        }
    }
}

impl fmt::Display for TableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TableKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| format!("unknown algorithm: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_store() {
        let mut cell = Cell::default();
        assert!(cell.is_empty());
        assert_eq!(cell.entry(), None);

        cell.store(7, 70);
        assert!(cell.holds(7));
        assert!(!cell.holds(8));
        assert_eq!(cell.entry(), Some((7, 70)));
    }

    #[test]
    fn test_empty_cell_never_holds_zero_key() {
        let cell = Cell::default();
        assert!(!cell.holds(0));
    }

    #[test]
    fn test_table_kind_names() {
        for kind in TableKind::ALL {
            assert_eq!(kind.name().parse::<TableKind>(), Ok(kind));
        }
        assert!("robin_hood".parse::<TableKind>().is_err());
        assert_eq!(TableKind::BucketCuckoo.to_string(), "bucket_cuckoo");
    }
}
