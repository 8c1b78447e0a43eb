use failure::Fail;
use std::io;

/// mapbench 的错误类型
#[derive(Fail, Debug)]
pub enum BenchError {
    /// 查找到的值与插入时配对的值不一致
    /// 这说明被测的哈希表实现有缺陷，本次测量结果没有意义
    #[fail(
        display = "Integrity violation: key {} expected {}, found {:?}",
        key, expected, found
    )]
    IntegrityViolation {
        /// 出错的键
        key: i64,
        /// 最后一次与该键配对的值
        expected: i64,
        /// 哈希表实际返回的值
        found: Option<i64>,
    },
    /// 写出结果时的 IO 错误
    #[fail(display = "IO error: {}", _0)]
    Io(#[cause] io::Error),
}

impl From<io::Error> for BenchError {
    fn from(err: io::Error) -> BenchError {
        BenchError::Io(err)
    }
}

/// mapbench 的 Result 类型，简化了 BenchError 的返回
pub type Result<T> = std::result::Result<T, BenchError>;
