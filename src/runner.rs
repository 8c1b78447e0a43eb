use std::io::Write;
use std::time::Instant;

use rand::Rng;

use crate::maps::{IntMap, StdIntMap};
use crate::report;
use crate::sample::Generator;
use crate::{BenchError, Result};

/// 一次插入/查找基准测试的测量结果。
#[derive(Clone, Debug, PartialEq)]
pub struct Measurement {
    /// 被测哈希表的名称
    pub label: String,
    /// 键值对数量
    pub count: usize,
    /// 插入阶段耗时（毫秒）
    pub insert_ms: u64,
    /// 查找阶段耗时（毫秒）
    pub lookup_ms: u64,
}

impl Measurement {
    /// 平均每次插入的纳秒数
    pub fn insert_ns_per_op(&self) -> f64 {
        report::ns_per_op(self.insert_ms, self.count)
    }

    /// 平均每次查找的纳秒数
    pub fn lookup_ns_per_op(&self) -> f64 {
        report::ns_per_op(self.lookup_ms, self.count)
    }

    /// 把插入和查找两行结果写入 `out`。
    pub fn write_to<W: Write>(&self, out: &mut W) -> Result<()> {
        let rows = report::timing_rows(&self.label, self.insert_ms, self.lookup_ms, self.count);
        for line in rows.iter() {
            writeln!(out, "{}", line)?;
        }
        out.flush()?;
        Ok(())
    }
}

/// `map[i & spread] += 1` 基准测试的测量结果。
#[derive(Clone, Debug, PartialEq)]
pub struct SpreadMeasurement {
    /// 被测哈希表的名称
    pub label: String,
    /// 键的掩码，决定了不同键的数量
    pub spread: u64,
    /// 自增操作次数
    pub count: usize,
    /// 耗时（毫秒）
    pub elapsed_ms: u64,
}

impl SpreadMeasurement {
    /// 格式化为一个表格行。
    pub fn row(&self) -> String {
        report::row(
            &format!("{}::entry", self.label),
            &self.spread.to_string(),
            self.count,
            report::ns_per_op(self.elapsed_ms, self.count),
        )
    }
}

/// 执行一次基准测试：生成 `2 * count` 个随机整数，测量插入与带校验的查找。
///
/// `do_print` 为 false 时只做预热，测量结果被丢弃。
///
/// # 错误
///
/// 查找到的值与插入的值不一致时返回 `BenchError::IntegrityViolation`，
/// 此时不会写出任何结果。
pub fn run<W: Write>(count: usize, do_print: bool, out: &mut W) -> Result<()> {
    let mut generator = Generator::from_entropy();
    run_with::<StdIntMap, _, _>(&mut generator, count, do_print, out).map(|_| ())
}

/// 与 [`run`] 相同，但由调用方指定被测哈希表类型和随机数来源。
pub fn run_with<M, R, W>(
    generator: &mut Generator<R>,
    count: usize,
    do_print: bool,
    out: &mut W,
) -> Result<Option<Measurement>>
where
    M: IntMap,
    R: Rng,
    W: Write,
{
    if do_print {
        info!("Benchmarking {} with {} random pairs", M::NAME, count);
    } else {
        info!("Warming up {} with {} random pairs", M::NAME, count);
    }
    let data = generator.pairs(count);
    let measurement = bench_map::<M>(&data)?;
    if !do_print {
        return Ok(None);
    }
    measurement.write_to(out)?;
    Ok(Some(measurement))
}

/// 用给定的样本数据测量 `M` 的插入与查找。
///
/// `data` 中偶数下标的元素是键，紧随其后的是值；末尾落单的元素被忽略。
/// 重复的键以最后一次配对的值为准。
pub fn bench_map<M: IntMap>(data: &[i64]) -> Result<Measurement> {
    let count = data.len() / 2;
    let mut map = M::new();

    let t1 = Instant::now();
    insert_phase(&mut map, data);
    let t2 = Instant::now();
    lookup_phase(&map, data)?;
    let t3 = Instant::now();

    debug!("{} holds {} keys after {} inserts", M::NAME, map.len(), count);
    Ok(Measurement {
        label: M::NAME.to_owned(),
        count,
        insert_ms: (t2 - t1).as_millis() as u64,
        lookup_ms: (t3 - t2).as_millis() as u64,
    })
}

/// 测量 `count` 次 `map[i & spread] += 1`。
pub fn bench_spread<M: IntMap>(count: usize, spread: u64) -> SpreadMeasurement {
    let mut map = M::new();

    let start = Instant::now();
    spread_phase(&mut map, count, spread);
    let elapsed = start.elapsed();

    debug!("{} holds {} keys after spread {}", M::NAME, map.len(), spread);
    SpreadMeasurement {
        label: M::NAME.to_owned(),
        spread,
        count,
        elapsed_ms: elapsed.as_millis() as u64,
    }
}

fn insert_phase<M: IntMap>(map: &mut M, data: &[i64]) {
    for pair in data.chunks_exact(2) {
        map.insert(pair[0], pair[1]);
    }
}

fn lookup_phase<M: IntMap>(map: &M, data: &[i64]) -> Result<()> {
    for (i, pair) in data.chunks_exact(2).enumerate() {
        let (key, value) = (pair[0], pair[1]);
        let found = map.get(key);
        if found == Some(value) {
            continue;
        }
        // 同一个键可能在后面被再次插入，此时应以最后一次的值为准
        let expected = last_value_of(&data[(i + 1) * 2..], key).unwrap_or(value);
        if found != Some(expected) {
            return Err(BenchError::IntegrityViolation {
                key,
                expected,
                found,
            });
        }
    }
    Ok(())
}

fn last_value_of(data: &[i64], key: i64) -> Option<i64> {
    data.chunks_exact(2)
        .rev()
        .find(|pair| pair[0] == key)
        .map(|pair| pair[1])
}

fn spread_phase<M: IntMap>(map: &mut M, count: usize, spread: u64) {
    for i in 0..count as u64 {
        map.increment((i & spread) as i64);
    }
}
