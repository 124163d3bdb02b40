//! # 透明通道分类
//!
//! ## 设计思路
//!
//! 判断一张图片的透明信息是“二值遮罩”（只有 0 与 255）还是“装饰性背景”（含中间值），
//! 并汇总透明度分布。纯函数，不做 I/O。
//!
//! ## 实现思路
//!
//! 单次遍历透明平面，用 256 格直方图同时得到最值、总和、各区间计数与不同取值个数。

use super::source::DecodedImage;

/// 完全透明。
pub const ALPHA_TRANSPARENT: u8 = 0;
/// 完全不透明。
pub const ALPHA_OPAQUE: u8 = 255;

/// 一张图片透明通道的分类结果。
///
/// 比例字段均为百分比（0..=100）。
#[derive(Debug, Clone, PartialEq)]
pub struct AlphaClassification {
    /// 透明值是否只取 0 与 255。
    pub is_pure_mask: bool,
    /// 出现过的不同透明值个数。
    pub distinct_value_count: usize,
    pub sample_count: usize,
    pub transparent_count: usize,
    pub semi_transparent_count: usize,
    pub opaque_count: usize,
    pub transparent_ratio: f64,
    pub semi_transparent_ratio: f64,
    pub opaque_ratio: f64,
    pub min: u8,
    pub max: u8,
    pub mean: f64,
}

impl AlphaClassification {
    /// 对透明采样序列做统计。
    ///
    /// 空序列返回 `None`（比例无定义）。
    ///
    /// # 示例
    /// ```rust
    /// use png_alpha_probe::probe::AlphaClassification;
    ///
    /// let result = AlphaClassification::from_samples(&[0, 0, 255, 255]).unwrap();
    /// assert!(result.is_pure_mask);
    /// assert_eq!(result.transparent_ratio, 50.0);
    /// ```
    pub fn from_samples(samples: &[u8]) -> Option<Self> {
        if samples.is_empty() {
            return None;
        }

        let mut histogram = [0usize; 256];
        let mut sum: u64 = 0;
        for &sample in samples {
            histogram[sample as usize] += 1;
            sum += u64::from(sample);
        }

        let min = (0..=255u8).find(|&v| histogram[v as usize] > 0)?;
        let max = (0..=255u8).rev().find(|&v| histogram[v as usize] > 0)?;
        let distinct_value_count = histogram.iter().filter(|&&count| count > 0).count();

        let sample_count = samples.len();
        let transparent_count = histogram[ALPHA_TRANSPARENT as usize];
        let opaque_count = histogram[ALPHA_OPAQUE as usize];
        let semi_transparent_count = sample_count - transparent_count - opaque_count;

        let percent = |count: usize| count as f64 / sample_count as f64 * 100.0;

        Some(Self {
            is_pure_mask: semi_transparent_count == 0,
            distinct_value_count,
            sample_count,
            transparent_count,
            semi_transparent_count,
            opaque_count,
            transparent_ratio: percent(transparent_count),
            semi_transparent_ratio: percent(semi_transparent_count),
            opaque_ratio: percent(opaque_count),
            min,
            max,
            mean: sum as f64 / sample_count as f64,
        })
    }
}

/// 对已解码图片做透明通道分类。
///
/// 颜色模式不含透明通道时返回 `None`，这是正常结果而非错误。
pub fn classify(image: &DecodedImage) -> Option<AlphaClassification> {
    let plane = image.alpha_plane()?;
    AlphaClassification::from_samples(&plane)
}
