use image::ImageFormat;

/// 追加在每条消息末尾的终止标记。
/// 解码时一旦输出以该标记结尾即停止，并将其截去。
pub const SENTINEL: &str = "<EOF>";

/// 每个字符按 `u8` (8 bits) 展开，高位在前。
pub const BITS_PER_CHAR: usize = 8;

/// 每个像素中承载数据的通道数 (R, G, B)。
/// Alpha 等其余通道永远不会被修改。
pub const CARRIER_CHANNELS: usize = 3;

/// 未指定输出路径时，隐写结果图像的文件名前缀。
pub const DOCTORED_PREFIX: &str = "doctored_";

/// 允许写出的无损格式。有损格式会破坏最低有效位，因此一律拒绝。
pub const LOSSLESS_FORMATS: &[ImageFormat] = &[
    ImageFormat::Png,
    ImageFormat::Bmp,
    ImageFormat::Tiff,
    ImageFormat::WebP,
    ImageFormat::Qoi,
];
