//! # PNG 透明通道探测模块（probe）
//!
//! ## 设计思路
//!
//! 该模块将“文件加载校验 → PNG 解码 → 透明通道分类 → 文本报告”
//! 按职责拆分为多个子模块，两个命令行工具共享同一条链路。
//!
//! - `handler`：编排逐文件处理、目录扫描与双目录对比
//! - `loader`：负责文件存在性、体积与签名校验
//! - `pipeline`：负责 PNG 头读取、像素限制与完整解码
//! - `classifier`：透明平面统计与纯遮罩判定（纯函数）
//! - `report`：文本渲染
//! - `config/error/source/color_mode`：配置、错误、中间数据模型
//!
//! ## 调用链
//!
//! ```text
//! bin/analyze_png.rs / bin/compare_images.rs
//!    ↓
//! handler.rs（逐文件边界，捕获 ProbeError）
//!    ├─ loader.rs（存在性 + 体积 + 签名）
//!    ├─ pipeline.rs（PNG 头 + 像素限制 + 解码）
//!    └─ classifier.rs（透明通道统计）
//!    ↓
//! report.rs（渲染文本）
//! ```

mod classifier;
mod color_mode;
mod config;
mod error;
mod handler;
mod loader;
mod pipeline;
pub mod report;
mod source;

pub use classifier::{ALPHA_OPAQUE, ALPHA_TRANSPARENT, AlphaClassification, classify};
pub use color_mode::ColorMode;
pub use config::{DEFAULT_ASSETS_DIR, DEFAULT_COMPARE_NAMES, DEFAULT_ORIGINAL_DIR, ProbeConfig};
pub use error::ProbeError;
pub use handler::{AlphaProbe, Comparison, FileOutcome, PngReport, list_png_files};
pub use source::{DecodedImage, PngHeader};
