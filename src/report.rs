//! 结果表格的格式化。
//!
//! 每一行都是固定宽度的 markdown 表格行：
//!
//! ```text
//! |<label:30>|<tag:>8>|<count:>12>|<ns/op:>8.1>|
//! ```

use std::io::{self, Write};

/// 对随机键数据做基准测试时写入第二列的标签
pub const RANDOM_TAG: &str = "random";

/// 把毫秒耗时换算为每次操作的纳秒数。
///
/// `count` 为 0 时返回 `0.0`，不做除零运算。
pub fn ns_per_op(elapsed_ms: u64, count: usize) -> f64 {
    if count == 0 {
        return 0.0;
    }
    elapsed_ms as f64 * 1_000_000.0 / count as f64
}

/// 格式化单个表格行。
pub fn row(label: &str, tag: &str, count: usize, ns_per_op: f64) -> String {
    format!("|{:<30}|{:>8}|{:>12}|{:>8.1}|", label, tag, count, ns_per_op)
}

/// 格式化插入和查找两行结果。
pub fn timing_rows(label: &str, insert_ms: u64, lookup_ms: u64, count: usize) -> [String; 2] {
    [
        row(
            &format!("{}::insert", label),
            RANDOM_TAG,
            count,
            ns_per_op(insert_ms, count),
        ),
        row(
            &format!("{}::lookup", label),
            RANDOM_TAG,
            count,
            ns_per_op(lookup_ms, count),
        ),
    ]
}

/// 根据三个毫秒时间戳（开始、插入完成、查找完成）写出两行结果。
pub fn print_timings<W: Write>(
    out: &mut W,
    label: &str,
    t1: u64,
    t2: u64,
    t3: u64,
    count: usize,
) -> io::Result<()> {
    for line in timing_rows(label, t2 - t1, t3 - t2, count).iter() {
        writeln!(out, "{}", line)?;
    }
    Ok(())
}

/// 表头及对齐行。
pub fn heading_rows() -> [String; 2] {
    [
        format!(
            "|{:<30}|{:>8}|{:>12}|{:>8}|",
            "container", "spread", "count", "time_ns"
        ),
        format!(
            "|{:<30}|{:>8}|{:>12}|{:>8}|",
            ":-----------------------------", "-----:", "----:", "------:"
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timings_from_timestamps() {
        let mut out = Vec::new();
        print_timings(&mut out, "TestMap", 1000, 1500, 1800, 1_000_000).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text,
            "|TestMap::insert               |  random|     1000000|   500.0|\n\
             |TestMap::lookup               |  random|     1000000|   300.0|\n"
        );
    }

    #[test]
    fn rows_have_fixed_width() {
        let rows = timing_rows("m", 3, 4, 7);
        for row in rows.iter() {
            assert_eq!(row.len(), 1 + 30 + 1 + 8 + 1 + 12 + 1 + 8 + 1);
        }
        let heading = heading_rows();
        assert_eq!(heading[0].len(), rows[0].len());
        assert_eq!(heading[1].len(), rows[0].len());
    }

    #[test]
    fn zero_count_reports_zero() {
        assert_eq!(ns_per_op(250, 0), 0.0);
        let rows = timing_rows("Empty", 0, 0, 0);
        assert_eq!(rows[0], "|Empty::insert                 |  random|           0|     0.0|");
        assert_eq!(rows[1], "|Empty::lookup                 |  random|           0|     0.0|");
    }

    #[test]
    fn one_decimal_place() {
        // 1 ms / 3 ops = 333333.33... ns
        assert_eq!(ns_per_op(1, 3), 1_000_000.0 / 3.0);
        assert!(row("x", RANDOM_TAG, 3, ns_per_op(1, 3)).ends_with("|333333.3|"));
        assert!(row("x", RANDOM_TAG, 4, ns_per_op(1, 4)).ends_with("|250000.0|"));
    }

    #[test]
    fn long_labels_are_not_truncated() {
        let label = "a::very::long::container::name::insert";
        assert!(row(label, RANDOM_TAG, 1, 1.0).starts_with(&format!("|{}|", label)));
    }
}
