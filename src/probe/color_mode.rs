//! # 颜色模式
//!
//! PNG 的五种颜色类型加上 tRNS 块，归并为一个封闭的“是否带透明通道”枚举。
//! 透明通道提取按该枚举 `match` 分派，而不是对模式字符串做运行时判断。

use png::ColorType;

/// 与透明度相关的颜色模式。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    /// 没有透明通道（L / RGB / 不带 tRNS 的调色板图）。
    NoAlpha,
    /// 灰度 + 透明（LA，或带 tRNS 色键的灰度图）。
    GrayAlpha,
    /// 调色板 + 透明（带 tRNS 的调色板图）。
    PaletteAlpha,
    /// RGB + 透明（RGBA，或带 tRNS 色键的 RGB 图）。
    RgbAlpha,
}

impl ColorMode {
    /// 由 PNG 头中的颜色类型与 tRNS 是否存在推导颜色模式。
    pub fn from_png(color_type: ColorType, has_trns: bool) -> Self {
        match (color_type, has_trns) {
            (ColorType::GrayscaleAlpha, _) | (ColorType::Grayscale, true) => Self::GrayAlpha,
            (ColorType::Indexed, true) => Self::PaletteAlpha,
            (ColorType::Rgba, _) | (ColorType::Rgb, true) => Self::RgbAlpha,
            (ColorType::Grayscale, false)
            | (ColorType::Indexed, false)
            | (ColorType::Rgb, false) => Self::NoAlpha,
        }
    }

    pub fn has_alpha(self) -> bool {
        !matches!(self, Self::NoAlpha)
    }
}

/// 报告中展示的短模式名（L、LA、RGB、RGBA、P、PA）。
pub fn mode_label(color_type: ColorType, has_trns: bool) -> &'static str {
    match (color_type, has_trns) {
        (ColorType::Grayscale, false) => "L",
        (ColorType::Grayscale, true) | (ColorType::GrayscaleAlpha, _) => "LA",
        (ColorType::Rgb, false) => "RGB",
        (ColorType::Rgb, true) | (ColorType::Rgba, _) => "RGBA",
        (ColorType::Indexed, false) => "P",
        (ColorType::Indexed, true) => "PA",
    }
}
