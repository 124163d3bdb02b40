//! # 文本报告
//!
//! 所有渲染函数只返回 `String`，由二进制入口负责打印到标准输出。

use std::fmt::Write as _;

use super::classifier::AlphaClassification;
use super::handler::{Comparison, FileOutcome, PngReport};

const WIDE_RULE: usize = 80;
const NARROW_RULE: usize = 60;

pub fn analysis_header() -> String {
    format!("🔍 PNG 图片结构分析报告\n{}", "=".repeat(NARROW_RULE))
}

pub fn analysis_footer() -> String {
    let mut out = String::new();
    let _ = writeln!(out, "\n{}", "=".repeat(NARROW_RULE));
    let _ = writeln!(out, "📌 分析完成！");
    let _ = writeln!(out, "\n关键发现:");
    let _ = writeln!(out, "  • 带透明通道 + 含中间透明值 = 装饰性背景（不是纯遮罩）");
    let _ = write!(out, "  • 带透明通道 + 只有 0 或 255 = 纯遮罩");
    out
}

/// 渲染 analyze_png 的单文件段落。
pub fn render_analysis(outcome: &FileOutcome) -> String {
    match outcome {
        FileOutcome::Missing(path) => format!("❌ 文件不存在: {}", path.display()),
        FileOutcome::Failed { path, error } => {
            format!("❌ 分析失败 ({}): {}", path.display(), error)
        }
        FileOutcome::Analyzed(report) => render_report(report),
    }
}

fn render_report(report: &PngReport) -> String {
    let header = &report.header;
    let mut out = String::new();

    let _ = writeln!(out, "\n📄 {}", report.file_name);
    let _ = writeln!(out, "  {}", "=".repeat(NARROW_RULE));
    let _ = writeln!(out, "  尺寸: {} × {}", header.width, header.height);
    let _ = writeln!(out, "  模式: {}", header.mode_label());
    let _ = writeln!(out, "  格式: PNG");

    match &report.classification {
        Some(alpha) => {
            let _ = writeln!(out, "  ✓ 有透明通道 (Alpha Channel)");
            let _ = writeln!(out, "  Alpha 值范围: {} - {}", alpha.min, alpha.max);
            let _ = writeln!(out, "  Alpha 平均值: {:.1}", alpha.mean);
            let _ = writeln!(
                out,
                "  透明像素 (α=0): {} ({:.1}%)",
                alpha.transparent_count, alpha.transparent_ratio
            );
            let _ = writeln!(
                out,
                "  半透明像素 (0<α<255): {} ({:.1}%)",
                alpha.semi_transparent_count, alpha.semi_transparent_ratio
            );
            let _ = writeln!(
                out,
                "  不透明像素 (α=255): {} ({:.1}%)",
                alpha.opaque_count, alpha.opaque_ratio
            );
        }
        None => {
            let _ = writeln!(out, "  ✗ 没有透明通道");
        }
    }

    if let Some(colors) = header.palette_colors() {
        let _ = writeln!(out, "  调色板颜色数: {}", colors);
    }

    out.trim_end().to_string()
}

pub fn comparison_header() -> String {
    format!("🔍 原项目 vs 新项目 PNG 对比\n{}", "=".repeat(WIDE_RULE))
}

pub fn comparison_footer() -> String {
    let mut out = String::new();
    let _ = writeln!(out, "\n{}", "=".repeat(WIDE_RULE));
    let _ = writeln!(out, "📌 结论:");
    let _ = writeln!(out, "  如果 background0/1/2/3.png 都是装饰性背景（不是纯遮罩），");
    let _ = write!(out, "  那么每个 background*.png 都需要走遮罩处理！");
    out
}

/// 渲染 compare_images 的单文件对比段落。
pub fn render_comparison(row: &Comparison) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "\n📄 {}", row.name);
    let _ = writeln!(out, "{}", "-".repeat(WIDE_RULE));
    let _ = writeln!(out, "{}", render_side("原项目", &row.original));
    let _ = write!(out, "{}", render_side("新项目", &row.new));
    out
}

fn render_side(label: &str, outcome: &FileOutcome) -> String {
    match outcome {
        FileOutcome::Missing(_) => format!("  {}: ❌ 不存在", label),
        FileOutcome::Failed { error, .. } => format!("  {}: ❌ 读取失败 ({})", label, error),
        FileOutcome::Analyzed(report) => match &report.classification {
            None => format!("  {}: ✗ 没有透明通道 ({})", label, report.header.mode_label()),
            Some(alpha) => format!(
                "  {}: {}\n           透明: {:.1}% | 不透明: {:.1}%",
                label,
                mask_verdict(alpha),
                alpha.transparent_ratio,
                alpha.opaque_ratio
            ),
        },
    }
}

fn mask_verdict(alpha: &AlphaClassification) -> String {
    if alpha.is_pure_mask {
        "✓ 纯遮罩 (只有 0 和 255)".to_string()
    } else {
        format!("✗ 装饰性背景 ({} 种 Alpha 值)", alpha.distinct_value_count)
    }
}
