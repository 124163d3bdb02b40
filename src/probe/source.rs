//! # 数据模型
//!
//! ## 设计思路
//!
//! 将“文件头信息”和“解码后的像素”解耦：
//! - `PngHeader` 只来自 PNG 头部与辅助块，不需要完整解码
//! - `DecodedImage` 在头信息之上携带完整像素，并负责按颜色模式提取透明平面

use image::DynamicImage;
use png::{BitDepth, ColorType};

use super::color_mode::{self, ColorMode};

/// PNG 头部信息。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PngHeader {
    /// 图像宽度（像素）。
    pub width: u32,
    /// 图像高度（像素）。
    pub height: u32,
    /// PNG 颜色类型。
    pub color_type: ColorType,
    /// 每个通道的位深。
    pub bit_depth: BitDepth,
    /// 调色板条目数（仅调色板图有值）。
    pub palette_len: Option<usize>,
    /// 是否存在 tRNS 块。
    pub has_trns: bool,
}

impl PngHeader {
    pub(crate) fn from_info(info: &png::Info<'_>) -> Self {
        Self {
            width: info.width,
            height: info.height,
            color_type: info.color_type,
            bit_depth: info.bit_depth,
            palette_len: info.palette.as_ref().map(|palette| palette.len() / 3),
            has_trns: info.trns.is_some(),
        }
    }

    pub fn color_mode(&self) -> ColorMode {
        ColorMode::from_png(self.color_type, self.has_trns)
    }

    pub fn mode_label(&self) -> &'static str {
        color_mode::mode_label(self.color_type, self.has_trns)
    }

    /// 调色板颜色数；非调色板图返回 `None`。
    pub fn palette_colors(&self) -> Option<usize> {
        match self.color_type {
            ColorType::Indexed => self.palette_len,
            _ => None,
        }
    }
}

/// 解码完成的图片：头信息 + 像素。
pub struct DecodedImage {
    pub(crate) header: PngHeader,
    pub(crate) pixels: DynamicImage,
}

impl DecodedImage {
    pub fn header(&self) -> &PngHeader {
        &self.header
    }

    pub fn color_mode(&self) -> ColorMode {
        self.header.color_mode()
    }

    /// 提取 8 位透明平面，长度为 `width * height`。
    ///
    /// 没有透明通道时返回 `None`。已是 8 位 LA / RGBA 的像素直接借用读取，
    /// 其余格式先转换。16 位透明值在转换时四舍五入降为 8 位，
    /// 因此 1..=128（满量程 65535）会被计为完全透明，微弱的 16 位渐变可能被判为纯遮罩。
    pub fn alpha_plane(&self) -> Option<Vec<u8>> {
        match self.color_mode() {
            ColorMode::NoAlpha => None,
            ColorMode::GrayAlpha => Some(match self.pixels.as_luma_alpha8() {
                Some(buffer) => buffer.pixels().map(|pixel| pixel[1]).collect(),
                None => self
                    .pixels
                    .to_luma_alpha8()
                    .pixels()
                    .map(|pixel| pixel[1])
                    .collect(),
            }),
            ColorMode::PaletteAlpha | ColorMode::RgbAlpha => Some(match self.pixels.as_rgba8() {
                Some(buffer) => buffer.pixels().map(|pixel| pixel[3]).collect(),
                None => self
                    .pixels
                    .to_rgba8()
                    .pixels()
                    .map(|pixel| pixel[3])
                    .collect(),
            }),
        }
    }
}
