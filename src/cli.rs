//! # 命令行接口模块
//!
//! 使用 `clap` 定义了程序的命令行结构，包括子命令和参数。
//! 所有用户通过命令行与程序交互的入口点都在此模块中定义。

use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// 一款基于 LSB (最低有效位) 隐写术的命令行工具，用于在无损格式图像 (如 PNG, BMP) 中隐藏或恢复文本消息。
#[derive(Parser, Debug)]
#[command(
    version,
    about,
    long_about = "一款基于 LSB (最低有效位) 隐写术的命令行工具，用于在无损格式图像 (如 PNG, BMP) 中隐藏或恢复文本消息。\n消息以 \"<EOF>\" 结尾，逐比特写入每个像素 R、G、B 通道的最低位。"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 输出更详细的日志 (-v 为 info，-vv 为 debug)。
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// 禁用彩色输出。
    #[arg(long, global = true)]
    pub no_color: bool,
}

/// 可用的子命令：encode (隐藏)、decode (恢复) 和 capacity (容量查询)。
#[derive(Parser, Debug)]
pub enum Commands {
    /// 在无损格式图像 (如 PNG, BMP) 中隐藏一条文本消息。
    Encode(EncodeArgs),

    /// 从经过隐写的图像中恢复隐藏的消息。
    Decode(DecodeArgs),

    /// 查询图像最多能隐藏多少个字符。
    Capacity(CapacityArgs),
}

/// 'encode' 命令所需的参数。
#[derive(Parser, Debug)]
pub struct EncodeArgs {
    /// 用于隐写的输入图像文件路径 (如 PNG, BMP)。
    #[arg(short, long)]
    pub input: PathBuf,

    /// 要隐藏的消息文本，每个字符必须位于 U+0000..=U+00FF 范围内。
    #[arg(short, long, conflicts_with = "text", required_unless_present = "text")]
    pub message: Option<String>,

    /// 从文件读取要隐藏的消息，每个字节视为一个字符。
    #[arg(short, long)]
    pub text: Option<PathBuf>,

    /// 隐写完成后，保存结果图像的输出路径。
    /// 默认保存在输入图像旁，文件名前加 "doctored_"。
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// 输出文件已存在时强制覆盖。
    #[arg(short, long)]
    pub force: bool,
}

/// 'decode' 命令所需的参数。
#[derive(Parser, Debug)]
pub struct DecodeArgs {
    /// 已隐藏消息的图像文件路径。
    #[arg(short, long)]
    pub input: PathBuf,

    /// 将恢复的消息保存到该文件 (每个字符写为一个字节)。
    /// 未指定时直接打印到标准输出。
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// 输出文件已存在时强制覆盖。
    #[arg(short, long)]
    pub force: bool,
}

/// 'capacity' 命令所需的参数。
#[derive(Parser, Debug)]
pub struct CapacityArgs {
    /// 要查询的图像文件路径。
    #[arg(short, long)]
    pub input: PathBuf,
}
