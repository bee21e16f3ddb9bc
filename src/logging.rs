//! # 日志初始化模块
//!
//! 日志统一输出到标准错误，标准输出只用于打印恢复的消息。

use env_logger::Builder;
use log::LevelFilter;
use std::io::Write;

/// 根据 `-v` 的次数选择默认日志级别。
pub fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    }
}

/// 初始化全局日志器。`RUST_LOG` 环境变量优先于命令行给出的级别。
pub fn init_logger(verbosity: u8) {
    let _ = Builder::new()
        .format(|buf, record| {
            writeln!(
                buf,
                "[{}] [{}] [{}] {}",
                buf.timestamp(),
                record.level(),
                record.target(),
                record.args()
            )
        })
        .filter_level(level_for(verbosity))
        .parse_default_env()
        .try_init();
}
