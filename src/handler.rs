//! # 命令处理逻辑模块
//!
//! 包含处理 `encode`、`decode` 和 `capacity` 子命令的高级业务逻辑。
//! 本模块负责协调文件 I/O、调用核心隐写算法以及向用户报告结果。

use crate::cli::{CapacityArgs, DecodeArgs, EncodeArgs};
use crate::constants::DOCTORED_PREFIX;
use crate::image_io::{self, Carrier};
use crate::steganography::{from_single_byte, to_single_byte};
use anyhow::{Context, Result};
use colored::Colorize;
use log::info;
use std::fs;
use std::path::{Path, PathBuf};

/// 处理 'Encode' 命令的执行逻辑。
///
/// 负责读取图像和消息、检查输出路径、调用隐写核心函数隐藏消息，
/// 最后将结果写入目标图像文件。原图像永远不会被原地修改。
///
/// # Arguments
///
/// * `args` - 包含输入/输出路径与消息来源的 `EncodeArgs` 结构体。
///
/// # Errors
///
/// 如果发生以下任一情况，将返回错误：
/// * 无法读取输入的图像或文本文件。
/// * 输出路径已存在且未指定 `--force`，或输出路径与输入图像相同。
/// * 消息包含单字节范围以外的字符，或图像没有足够的空间来隐藏消息。
/// * 无法写入到目标图像文件。
pub fn handle_encode(args: EncodeArgs) -> Result<()> {
    let dest = match args.output {
        Some(path) => path,
        None => default_output_path(&args.input)?,
    };
    check_output(&args.input, &dest, args.force)?;
    image_io::lossless_format(&dest)?;

    let message = match (&args.message, &args.text) {
        (Some(message), _) => message.clone(),
        (None, Some(text)) => {
            let bytes = fs::read(text).with_context(|| {
                format!(
                    "Unable to read text file: {}",
                    text.to_string_lossy().red().bold()
                )
            })?;
            from_single_byte(&bytes)
        }
        (None, None) => anyhow::bail!("Either --message or --text must be given."),
    };

    let carrier = load_carrier(&args.input)?;

    let stego = carrier.embed(&message).with_context(|| {
        format!(
            "Failed to hide the message in: {}",
            args.input.to_string_lossy().red().bold()
        )
    })?;

    image_io::save(&stego, &dest).with_context(|| {
        format!(
            "Unable to write to target image file: {}",
            dest.to_string_lossy().red().bold()
        )
    })?;

    info!(
        "hid {} characters in {}",
        message.chars().count(),
        dest.display()
    );
    println!(
        "The message has been successfully hidden and saved: {}",
        dest.to_string_lossy().green().bold()
    );

    Ok(())
}

/// 处理 'Decode' 命令的执行逻辑。
///
/// 负责读取经过隐写的图像文件并恢复隐藏的消息。
/// 指定了输出路径时将消息写入文件，否则打印到标准输出。
///
/// # Arguments
///
/// * `args` - 包含输入/输出路径的 `DecodeArgs` 结构体。
///
/// # Errors
///
/// 如果发生以下任一情况，将返回错误：
/// * 无法读取输入的图像文件。
/// * 输出路径已存在且未指定 `--force`。
/// * 无法写入到目标文本文件。
pub fn handle_decode(args: DecodeArgs) -> Result<()> {
    if let Some(dest) = &args.output {
        check_output(&args.input, dest, args.force)?;
    }

    let carrier = load_carrier(&args.input)?;
    let message = carrier.extract();
    info!(
        "recovered {} characters from {}",
        message.chars().count(),
        args.input.display()
    );

    match &args.output {
        Some(dest) => {
            let bytes = to_single_byte(&message)?;
            fs::write(dest, bytes).with_context(|| {
                format!(
                    "Unable to write to target text file: {}",
                    dest.to_string_lossy().red().bold()
                )
            })?;

            println!(
                "The message has been successfully recovered and saved: {}",
                dest.to_string_lossy().green().bold()
            );
        }
        None => println!("{message}"),
    }

    Ok(())
}

/// 处理 'Capacity' 命令的执行逻辑。
///
/// 报告图像的尺寸、可承载的比特数以及最多能隐藏的字符数。
pub fn handle_capacity(args: CapacityArgs) -> Result<()> {
    let carrier = load_carrier(&args.input)?;
    let (width, height) = carrier.dimensions();

    println!(
        "{}: {}x{}, {} bits available, up to {} characters",
        args.input.to_string_lossy().bold(),
        width,
        height,
        carrier.capacity_bits().to_string().green().bold(),
        carrier.max_message_len().to_string().green().bold()
    );

    Ok(())
}

fn load_carrier(path: &Path) -> Result<Carrier> {
    image_io::load(path).with_context(|| {
        format!(
            "Unable to read image file: {}",
            path.to_string_lossy().red().bold()
        )
    })
}

/// 在输入图像旁生成默认输出路径，例如 `dir/cat.png` -> `dir/doctored_cat.png`。
fn default_output_path(input: &Path) -> Result<PathBuf> {
    let file_name = input.file_name().with_context(|| {
        format!(
            "Input path has no file name: {}",
            input.to_string_lossy().red().bold()
        )
    })?;

    Ok(input.with_file_name(format!(
        "{DOCTORED_PREFIX}{}",
        file_name.to_string_lossy()
    )))
}

/// 确认输出路径可以写入：不能是输入文件本身，已存在时需要 `--force`。
fn check_output(input: &Path, dest: &Path, force: bool) -> Result<()> {
    if !dest.exists() {
        return Ok(());
    }

    let same_file = match (fs::canonicalize(input), fs::canonicalize(dest)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    };
    anyhow::ensure!(
        !same_file,
        "Output path points to the input image: {}. \nThe original image is never modified in place.",
        dest.to_string_lossy().red().bold()
    );

    anyhow::ensure!(
        force,
        "Output file already exists: {}. \nUse --force to overwrite it.",
        dest.to_string_lossy().red().bold()
    );

    Ok(())
}
