//! # 隐写编解码模块
//!
//! 纯函数实现：把 (消息 + 终止标记) 展开为高位在前的比特流，
//! 按像素顺序依次写入每个像素 R、G、B 通道的最低有效位；解码则反向读取。
//! 本模块不持有任何状态，也不接触文件。

use crate::constants::{BITS_PER_CHAR, CARRIER_CHANNELS, SENTINEL};
use crate::error::StegoError;
use image::Pixel;
use log::debug;

/// 每个像素中可承载数据的通道数。
pub fn carrier_channels<P: Pixel<Subpixel = u8>>() -> usize {
    CARRIER_CHANNELS.min(P::CHANNEL_COUNT as usize)
}

/// 像素序列可承载的总比特数。
pub fn capacity_bits<P: Pixel<Subpixel = u8>>(pixels: &[P]) -> usize {
    pixels.len().saturating_mul(carrier_channels::<P>())
}

/// 在扣除终止标记后，像素序列最多能隐藏的字符数。
pub fn max_message_len<P: Pixel<Subpixel = u8>>(pixels: &[P]) -> usize {
    (capacity_bits(pixels) / BITS_PER_CHAR).saturating_sub(SENTINEL.len())
}

/// 将文本按单字节语义转换为字节序列。
///
/// # Errors
///
/// 任一字符的码位大于 `U+00FF` 时返回 [`StegoError::Encoding`]。
pub fn to_single_byte(text: &str) -> Result<Vec<u8>, StegoError> {
    text.chars()
        .enumerate()
        .map(|(index, ch)| u8::try_from(ch).map_err(|_| StegoError::Encoding { ch, index }))
        .collect()
}

/// 将字节序列逐字节映射为 `U+0000..=U+00FF` 的字符。
pub fn from_single_byte(bytes: &[u8]) -> String {
    bytes.iter().copied().map(char::from).collect()
}

fn bitstream(bytes: &[u8]) -> impl Iterator<Item = u8> + '_ {
    bytes
        .iter()
        .flat_map(|&byte| (0..BITS_PER_CHAR).rev().map(move |shift| (byte >> shift) & 1))
}

/// 将消息隐藏到像素序列中，返回一个新的像素序列。
///
/// 输入序列不会被修改。所有校验都在复制像素之前完成，失败时不会产生任何部分结果。
/// 比特流耗尽后剩余的通道和像素原样保留，Alpha 通道始终保持不变。
///
/// # Errors
///
/// * [`StegoError::Encoding`] - 消息包含单字节范围以外的字符。
/// * [`StegoError::SentinelInMessage`] - 消息本身包含终止标记。
/// * [`StegoError::CapacityExceeded`] - 载荷比特数超过 `capacity_bits(pixels)`。
pub fn encode<P>(pixels: &[P], message: &str) -> Result<Vec<P>, StegoError>
where
    P: Pixel<Subpixel = u8>,
{
    let mut payload = to_single_byte(message)?;

    if let Some(index) = message.find(SENTINEL) {
        return Err(StegoError::SentinelInMessage {
            index: message[..index].chars().count(),
        });
    }

    payload.extend_from_slice(SENTINEL.as_bytes());

    let required = payload.len() * BITS_PER_CHAR;
    let available = capacity_bits(pixels);
    if required > available {
        return Err(StegoError::CapacityExceeded {
            required,
            available,
        });
    }

    debug!(
        "embedding {} bits into {} pixels ({} bits available)",
        required,
        pixels.len(),
        available
    );

    let per_pixel = carrier_channels::<P>();
    let mut bits = bitstream(&payload);
    let mut output = pixels.to_vec();

    'embed: for pixel in output.iter_mut() {
        for channel in pixel.channels_mut().iter_mut().take(per_pixel) {
            let Some(bit) = bits.next() else {
                break 'embed;
            };
            *channel = (*channel & 0xFE) | bit;
        }
    }

    Ok(output)
}

/// 从像素序列中恢复隐藏的消息。
///
/// 每凑满 8 个比特得到一个字符；一旦已解码的内容以终止标记结尾，立即停止并截去标记。
/// 如果直到像素耗尽都没有遇到终止标记，则返回全部已解码的内容，末尾不足 8 比特的部分被丢弃。
/// 该函数不会失败，对未经隐写的图像只会得到无意义的文本。
pub fn decode<P>(pixels: &[P]) -> String
where
    P: Pixel<Subpixel = u8>,
{
    let per_pixel = carrier_channels::<P>();
    let sentinel = SENTINEL.as_bytes();

    let mut bits = pixels
        .iter()
        .flat_map(move |pixel| pixel.channels().iter().take(per_pixel).map(|c| c & 1));

    let mut decoded = Vec::with_capacity(capacity_bits(pixels) / BITS_PER_CHAR);

    loop {
        let mut byte = 0u8;
        for _ in 0..BITS_PER_CHAR {
            match bits.next() {
                Some(bit) => byte = (byte << 1) | bit,
                None => {
                    debug!(
                        "no end-of-message marker found, returning {} raw characters",
                        decoded.len()
                    );
                    return from_single_byte(&decoded);
                }
            }
        }

        decoded.push(byte);

        if decoded.ends_with(sentinel) {
            decoded.truncate(decoded.len() - sentinel.len());
            debug!("end-of-message marker found after {} characters", decoded.len());
            return from_single_byte(&decoded);
        }
    }
}
