use clap::Parser;

use lsb_text::{
    cli::{Cli, Commands},
    handler::{handle_capacity, handle_decode, handle_encode},
    logging::init_logger,
};

/// 程序的主入口点
///
/// 负责解析命令行参数、初始化日志与颜色设置，并根据指定的子命令
/// 将执行分派到相应的处理函数
fn main() -> anyhow::Result<()> {
    // 解析命令行参数
    let cli = Cli::parse();

    init_logger(cli.verbose);
    if cli.no_color {
        colored::control::set_override(false);
    }

    // 根据子命令调用相应的处理函数
    match cli.command {
        Commands::Encode(args) => handle_encode(args),
        Commands::Decode(args) => handle_decode(args),
        Commands::Capacity(args) => handle_capacity(args),
    }
}
