use super::IntMap;
use std::collections::HashMap;

/// Wrapper of `std::collections::HashMap<i64, i64>`
///
/// 使用默认的 `RandomState`（SipHash，每个哈希表独立播种），
/// 随机键不会产生聚集，测得的性能接近实际使用场景。
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StdIntMap(HashMap<i64, i64>);

impl IntMap for StdIntMap {
    const NAME: &'static str = "std::HashMap";

    fn new() -> Self {
        StdIntMap(HashMap::new())
    }

    #[inline]
    fn insert(&mut self, key: i64, value: i64) {
        self.0.insert(key, value);
    }

    #[inline]
    fn get(&self, key: i64) -> Option<i64> {
        self.0.get(&key).cloned()
    }

    fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    fn increment(&mut self, key: i64) {
        let count = self.0.entry(key).or_insert(0);
        *count = count.wrapping_add(1);
    }
}
