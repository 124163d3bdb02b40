//! # 解码流水线模块
//!
//! ## 设计思路
//!
//! 将“字节 → PNG 头 → 像素”的过程集中管理，并在完整解码前做资源上限控制。
//!
//! ## 实现思路
//!
//! 1. 校验签名确实是 PNG
//! 2. 用 `png` 读取头部与辅助块（颜色类型、位深、调色板、tRNS）
//! 3. 按像素 / 内存上限快速拒绝
//! 4. 用 `image` 完整解码
//! 5. 校验解码尺寸与头部一致

use std::io::Cursor;

use image::{GenericImageView, ImageFormat};
use png::BitDepth;

use super::source::{DecodedImage, PngHeader};
use super::{AlphaProbe, ProbeError};

const PNG_MIME: &str = "image/png";

/// 8 位及以下：解码为 RGBA8（4 字节/像素）。
const RGBA8_BYTES_PER_PIXEL: u64 = 4;
/// 16 位：解码为 RGBA16（8 字节/像素），提取透明平面时再转换出 RGBA8（4 字节/像素）。
const RGBA16_PEAK_BYTES_PER_PIXEL: u64 = 8 + 4;

impl AlphaProbe {
    /// 将原始字节解码为带头信息的图片。
    pub fn decode_png(&self, bytes: &[u8]) -> Result<DecodedImage, ProbeError> {
        Self::ensure_png_signature(bytes)?;

        let header = Self::read_png_header(bytes)?;
        self.validate_pixel_limits(header.width, header.height)?;
        self.validate_decoded_memory_limits(&header)?;

        let pixels = image::load_from_memory_with_format(bytes, ImageFormat::Png)
            .map_err(|e| ProbeError::Decode(format!("图片解码失败：{}", e)))?;

        let (width, height) = pixels.dimensions();
        if (width, height) != (header.width, header.height) {
            return Err(ProbeError::Decode(format!(
                "解码尺寸 {}x{} 与文件头 {}x{} 不一致",
                width, height, header.width, header.height
            )));
        }

        log::debug!(
            "✅ 图片解码成功 - 尺寸: {}x{} 颜色类型: {:?} 位深: {:?} tRNS: {}",
            width,
            height,
            header.color_type,
            header.bit_depth,
            header.has_trns
        );

        Ok(DecodedImage { header, pixels })
    }

    fn ensure_png_signature(bytes: &[u8]) -> Result<(), ProbeError> {
        match infer::get(bytes) {
            Some(kind) if kind.mime_type() == PNG_MIME => Ok(()),
            Some(kind) => Err(ProbeError::InvalidFormat(format!(
                "不是 PNG 文件：{}",
                kind.mime_type()
            ))),
            None => Err(ProbeError::InvalidFormat("无法识别图片类型".to_string())),
        }
    }

    /// 仅读取 PNG 头部与首个 IDAT 之前的辅助块。
    fn read_png_header(bytes: &[u8]) -> Result<PngHeader, ProbeError> {
        let decoder = png::Decoder::new(Cursor::new(bytes));
        let reader = decoder
            .read_info()
            .map_err(|e| ProbeError::Decode(format!("无法读取 PNG 头：{}", e)))?;

        Ok(PngHeader::from_info(reader.info()))
    }

    fn validate_pixel_limits(&self, width: u32, height: u32) -> Result<(), ProbeError> {
        let pixels = (width as u64)
            .checked_mul(height as u64)
            .ok_or_else(|| ProbeError::ResourceLimit("图片像素数溢出".to_string()))?;

        if pixels > self.config.max_decoded_pixels {
            return Err(ProbeError::ResourceLimit(format!(
                "图片像素过大：{} 像素（限制：{} 像素）",
                pixels, self.config.max_decoded_pixels
            )));
        }

        Ok(())
    }

    /// 按位深估算解码与透明平面提取期间的峰值内存。
    fn validate_decoded_memory_limits(&self, header: &PngHeader) -> Result<(), ProbeError> {
        let bytes_per_pixel = match header.bit_depth {
            BitDepth::Sixteen => RGBA16_PEAK_BYTES_PER_PIXEL,
            _ => RGBA8_BYTES_PER_PIXEL,
        };
        let estimated = (header.width as u64)
            .checked_mul(header.height as u64)
            .and_then(|pixels| pixels.checked_mul(bytes_per_pixel))
            .ok_or_else(|| ProbeError::ResourceLimit("图片解码内存估算溢出".to_string()))?;

        if estimated > self.config.max_decoded_bytes {
            return Err(ProbeError::ResourceLimit(format!(
                "图片解码预计内存过大：{:.2} MB（限制：{:.2} MB）",
                estimated as f64 / 1024.0 / 1024.0,
                self.config.max_decoded_bytes as f64 / 1024.0 / 1024.0
            )));
        }

        Ok(())
    }
}
