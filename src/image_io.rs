//! # 图像读写模块
//!
//! 负责在图像文件与有序像素序列之间转换。像素按行优先顺序排列，
//! 读入后再写出时保持宽高、通道数与像素顺序不变。

use crate::constants::LOSSLESS_FORMATS;
use crate::error::StegoError;
use crate::steganography::{capacity_bits, decode, encode, max_message_len};
use image::{ImageBuffer, ImageFormat, Pixel, Rgb, Rgba};
use log::{debug, info};
use std::path::Path;

/// 行优先顺序的像素序列，附带还原图像所需的宽高。
#[derive(Debug, Clone, PartialEq)]
pub struct PixelSequence<P> {
    width: u32,
    height: u32,
    pixels: Vec<P>,
}

impl<P: Pixel<Subpixel = u8>> PixelSequence<P> {
    pub fn from_buffer(buffer: &ImageBuffer<P, Vec<u8>>) -> Self {
        let (width, height) = buffer.dimensions();
        Self {
            width,
            height,
            pixels: buffer.pixels().copied().collect(),
        }
    }

    pub fn pixels(&self) -> &[P] {
        &self.pixels
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// 以同样的宽高替换像素内容。编解码器保证像素数量不变。
    fn with_pixels(&self, pixels: Vec<P>) -> Self {
        debug_assert_eq!(pixels.len(), self.pixels.len());
        Self {
            width: self.width,
            height: self.height,
            pixels,
        }
    }

    pub fn to_buffer(&self) -> ImageBuffer<P, Vec<u8>> {
        let width = self.width as usize;
        ImageBuffer::from_fn(self.width, self.height, |x, y| {
            self.pixels[y as usize * width + x as usize]
        })
    }
}

/// 读入后的载体图像。带 Alpha 通道的图像保持 RGBA，其余一律转为 RGB。
#[derive(Debug, Clone, PartialEq)]
pub enum Carrier {
    Rgb(PixelSequence<Rgb<u8>>),
    Rgba(PixelSequence<Rgba<u8>>),
}

impl Carrier {
    pub fn dimensions(&self) -> (u32, u32) {
        match self {
            Carrier::Rgb(seq) => seq.dimensions(),
            Carrier::Rgba(seq) => seq.dimensions(),
        }
    }

    pub fn capacity_bits(&self) -> usize {
        match self {
            Carrier::Rgb(seq) => capacity_bits(seq.pixels()),
            Carrier::Rgba(seq) => capacity_bits(seq.pixels()),
        }
    }

    pub fn max_message_len(&self) -> usize {
        match self {
            Carrier::Rgb(seq) => max_message_len(seq.pixels()),
            Carrier::Rgba(seq) => max_message_len(seq.pixels()),
        }
    }

    /// 返回隐藏了 `message` 的新载体，原载体不变。
    pub fn embed(&self, message: &str) -> Result<Carrier, StegoError> {
        Ok(match self {
            Carrier::Rgb(seq) => Carrier::Rgb(seq.with_pixels(encode(seq.pixels(), message)?)),
            Carrier::Rgba(seq) => Carrier::Rgba(seq.with_pixels(encode(seq.pixels(), message)?)),
        })
    }

    pub fn extract(&self) -> String {
        match self {
            Carrier::Rgb(seq) => decode(seq.pixels()),
            Carrier::Rgba(seq) => decode(seq.pixels()),
        }
    }
}

/// 根据文件扩展名确定输出格式，仅接受无损格式。
pub fn lossless_format(path: &Path) -> Result<ImageFormat, StegoError> {
    ImageFormat::from_path(path)
        .ok()
        .filter(|format| LOSSLESS_FORMATS.contains(format))
        .ok_or_else(|| StegoError::UnsupportedFormat {
            path: path.to_path_buf(),
        })
}

/// 从文件读入像素序列。
///
/// # Errors
///
/// 文件无法读取或格式无法识别时返回 [`StegoError::ImageFormat`]。
pub fn load(path: &Path) -> Result<Carrier, StegoError> {
    let image = image::open(path)?;
    debug!(
        "loaded {} ({}x{}, {:?})",
        path.display(),
        image.width(),
        image.height(),
        image.color()
    );

    let carrier = if image.color().has_alpha() {
        Carrier::Rgba(PixelSequence::from_buffer(&image.to_rgba8()))
    } else {
        Carrier::Rgb(PixelSequence::from_buffer(&image.to_rgb8()))
    };
    Ok(carrier)
}

/// 将像素序列按扩展名对应的无损格式写入文件。
///
/// # Errors
///
/// * [`StegoError::UnsupportedFormat`] - 扩展名不是受支持的无损格式，此时不会写入任何内容。
/// * [`StegoError::ImageFormat`] - 编码或写入失败。
pub fn save(carrier: &Carrier, path: &Path) -> Result<(), StegoError> {
    let format = lossless_format(path)?;

    match carrier {
        Carrier::Rgb(seq) => seq.to_buffer().save_with_format(path, format)?,
        Carrier::Rgba(seq) => seq.to_buffer().save_with_format(path, format)?,
    }

    info!("saved {} as {:?}", path.display(), format);
    Ok(())
}
