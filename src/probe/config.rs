//! # 配置模块
//!
//! ## 设计思路
//!
//! 将所有“可调参数”集中到 `ProbeConfig`：两个资源目录、需要对比的文件名清单，
//! 以及加载 / 解码阶段的资源上限。
//!
//! ## 实现思路
//!
//! - `Default` 即编译期内置配置，两个工具不接受命令行参数。
//! - 所有字段都带 `#[serde(default)]`，JSON 覆盖文件只需写出要改的字段（见 `crate::settings`）。

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// 新项目资源目录（analyze_png 扫描目录，也是对比的“新项目”一侧）。
pub const DEFAULT_ASSETS_DIR: &str = "assets/image";

/// 原项目资源目录（对比的“原项目”一侧）。
pub const DEFAULT_ORIGINAL_DIR: &str = "starimg";

/// 两个项目共有、需要逐一对比的背景图。
pub const DEFAULT_COMPARE_NAMES: [&str; 6] = [
    "background.png",
    "background0.png",
    "background1.png",
    "background2.png",
    "background3.png",
    "background5.png",
];

/// 探测配置。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProbeConfig {
    /// 新项目资源目录。
    pub assets_dir: PathBuf,
    /// 原项目资源目录。
    pub original_dir: PathBuf,
    /// 需要在两个目录之间对比的文件名。
    pub compare_names: Vec<String>,
    /// 读取原始字节时允许的最大文件体积（字节）。
    pub max_file_size: u64,
    /// 解码后的像素上限（`width * height`）。
    pub max_decoded_pixels: u64,
    /// 解码阶段允许的预计内存上限（按 RGBA 估算，字节）。
    pub max_decoded_bytes: u64,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            assets_dir: PathBuf::from(DEFAULT_ASSETS_DIR),
            original_dir: PathBuf::from(DEFAULT_ORIGINAL_DIR),
            compare_names: DEFAULT_COMPARE_NAMES
                .iter()
                .map(|name| name.to_string())
                .collect(),
            max_file_size: 50 * 1024 * 1024,
            max_decoded_pixels: 40_000_000,
            max_decoded_bytes: 160 * 1024 * 1024,
        }
    }
}
