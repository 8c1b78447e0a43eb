use clap::App;
use log::error;
use log::LevelFilter;
use mapbench::{run, Result};
use std::io;
use std::process::exit;

const COUNT: usize = 1_000_000;

fn main() {
    // 默认只输出警告及以上级别的日志，保证标准输出只有结果表格
    env_logger::builder().filter_level(LevelFilter::Warn).init();
    App::new(env!("CARGO_PKG_NAME"))
        .version(env!("CARGO_PKG_VERSION"))
        .author(env!("CARGO_PKG_AUTHORS"))
        .about(env!("CARGO_PKG_DESCRIPTION"))
        .get_matches();

    if let Err(e) = bench() {
        error!("{}", e);
        exit(1);
    }
}

fn bench() -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    // 预热
    run(COUNT, false, &mut out)?;
    run(COUNT, true, &mut out)
}
