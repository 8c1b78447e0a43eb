use rand::rngs::StdRng;
use rand::{FromEntropy, Rng};

/// 随机样本生成器。
///
/// 持有一个显式的伪随机数生成器实例，而不是依赖进程级的全局随机状态。
/// 默认从系统熵源播种，因此每次运行产生的数据都不相同。
pub struct Generator<R> {
    rng: R,
}

impl Generator<StdRng> {
    /// 创建一个从系统熵源播种的 `Generator`。
    pub fn from_entropy() -> Self {
        Generator::new(StdRng::from_entropy())
    }
}

impl<R: Rng> Generator<R> {
    /// 用给定的随机数生成器创建 `Generator`。
    pub fn new(rng: R) -> Self {
        Generator { rng }
    }

    /// 生成 `2 * count` 个相互独立的 64 位有符号整数。
    ///
    /// 偶数下标的元素作为键，紧随其后的奇数下标元素是与之配对的值。
    pub fn pairs(&mut self, count: usize) -> Vec<i64> {
        let rng = &mut self.rng;
        (0..count * 2).map(|_| rng.gen()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn pairs_has_two_values_per_count() {
        let mut generator = Generator::new(StdRng::seed_from_u64(7));
        assert_eq!(generator.pairs(0).len(), 0);
        assert_eq!(generator.pairs(1).len(), 2);
        assert_eq!(generator.pairs(1000).len(), 2000);
    }

    #[test]
    fn same_seed_same_pairs() {
        let a = Generator::new(StdRng::seed_from_u64(42)).pairs(64);
        let b = Generator::new(StdRng::seed_from_u64(42)).pairs(64);
        assert_eq!(a, b);
    }

    #[test]
    fn successive_calls_draw_fresh_values() {
        let mut generator = Generator::new(StdRng::seed_from_u64(42));
        let first = generator.pairs(64);
        let second = generator.pairs(64);
        assert_ne!(first, second);
    }

    #[test]
    fn entropy_seeded_generators_differ() {
        let a = Generator::from_entropy().pairs(16);
        let b = Generator::from_entropy().pairs(16);
        assert_ne!(a, b);
    }
}
