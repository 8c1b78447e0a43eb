#![deny(missing_docs)]
//! 一个测量哈希表插入与查找吞吐量的基准测试库。

#[macro_use]
extern crate log;

// 重新导出核心组件，方便外部使用
pub use error::{BenchError, Result};
pub use maps::{IntMap, StdIntMap};
pub use runner::{bench_map, bench_spread, run, run_with, Measurement, SpreadMeasurement};
pub use sample::Generator;

mod error;
mod maps;
pub mod report;
mod runner;
mod sample;
