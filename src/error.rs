//! # 错误类型模块
//!
//! 编解码器与图像适配层共用的错误分类。命令行边界层再用 `anyhow` 为其附加上下文。

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StegoError {
    /// 消息中出现了无法用单字节表示的字符。
    #[error("Character {ch:?} at index {index} is outside the single-byte range (U+0000..=U+00FF).")]
    Encoding { ch: char, index: usize },

    /// 消息本身包含终止标记，解码时会被提前截断。
    #[error("The message contains the reserved end-of-message marker at index {index}.")]
    SentinelInMessage { index: usize },

    /// 载荷所需的比特数超过了图像可承载的比特数。
    #[error("Not enough space in the image to hide the text. \nRequired: {required} bits, Available: {available} bits")]
    CapacityExceeded { required: usize, available: usize },

    #[error("Unsupported output format for '{}'. \nOnly lossless formats (png, bmp, tiff, webp, qoi) keep the hidden bits intact.", path.display())]
    UnsupportedFormat { path: PathBuf },

    #[error(transparent)]
    ImageFormat(#[from] image::ImageError),
}
