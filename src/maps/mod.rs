//! This module provides the hash maps that can be benchmarked.

/// 被测哈希表的通用接口，键和值都是 64 位有符号整数。
pub trait IntMap {
    /// 出现在结果表格中的名称。
    const NAME: &'static str;

    /// 创建一个空的哈希表。
    fn new() -> Self
    where
        Self: Sized;

    /// 插入一个键值对。
    ///
    /// 如果该键已存在，则覆盖旧值。
    fn insert(&mut self, key: i64, value: i64);

    /// 获取给定键的值。
    ///
    /// 如果键不存在，则返回 `None`。
    fn get(&self, key: i64) -> Option<i64>;

    /// 返回键值对的数量。
    fn len(&self) -> usize;

    /// 哈希表是否为空。
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// 将给定键的值加一，键不存在时从 0 开始计数。
    fn increment(&mut self, key: i64) {
        let value = self.get(key).unwrap_or(0);
        self.insert(key, value.wrapping_add(1));
    }
}

mod std_map;

pub use self::std_map::StdIntMap;
