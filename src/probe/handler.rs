//! # 核心编排模块
//!
//! ## 设计思路
//!
//! `AlphaProbe` 只负责流程编排与配置持有，逐文件处理链路固定为：
//! 1. 加载原始字节（`loader`）
//! 2. 解码并读取头信息（`pipeline`）
//! 3. 透明通道分类（`classifier`）
//!
//! ## 实现思路
//!
//! - 逐文件边界只捕获 `ProbeError`，转换为 `FileOutcome::Failed` 后继续处理下一个文件。
//! - 文件不存在单独表达为 `FileOutcome::Missing`，此时不会调用分类器。
//! - 目录本身不可用属于整次运行的失败，以 `AppError` 返回。
//! - 每个文件的字节与像素缓冲在 `inspect_file` 返回时释放。

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use crate::error::AppError;

use super::classifier::{self, AlphaClassification};
use super::source::PngHeader;
use super::{ColorMode, ProbeConfig, ProbeError};

/// PNG 透明通道探测器。
pub struct AlphaProbe {
    pub(super) config: ProbeConfig,
}

/// 单个文件的分析报告。
#[derive(Debug, Clone, PartialEq)]
pub struct PngReport {
    /// 文件名（不含目录）。
    pub file_name: String,
    pub header: PngHeader,
    /// 没有透明通道时为 `None`。
    pub classification: Option<AlphaClassification>,
}

impl PngReport {
    pub fn color_mode(&self) -> ColorMode {
        self.header.color_mode()
    }
}

/// 单个文件的处理结果。
#[derive(Debug)]
pub enum FileOutcome {
    /// 文件不存在，分类器未被调用。
    Missing(PathBuf),
    /// 加载、解码或提取失败。
    Failed { path: PathBuf, error: ProbeError },
    /// 分析完成。
    Analyzed(PngReport),
}

impl FileOutcome {
    pub fn report(&self) -> Option<&PngReport> {
        match self {
            Self::Analyzed(report) => Some(report),
            _ => None,
        }
    }
}

/// 同名文件在两个目录中的对比结果。
#[derive(Debug)]
pub struct Comparison {
    pub name: String,
    pub original: FileOutcome,
    pub new: FileOutcome,
}

impl AlphaProbe {
    /// 根据配置创建探测器。
    ///
    /// # 示例
    /// ```rust
    /// use png_alpha_probe::probe::{AlphaProbe, ProbeConfig};
    ///
    /// let probe = AlphaProbe::new(ProbeConfig::default());
    /// assert_eq!(probe.config().compare_names.len(), 6);
    /// ```
    pub fn new(config: ProbeConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ProbeConfig {
        &self.config
    }

    /// 分析单个文件。不会返回错误，也不会 panic。
    pub fn inspect_file(&self, path: &Path) -> FileOutcome {
        match self.analyze(path) {
            Ok(report) => FileOutcome::Analyzed(report),
            Err(ProbeError::Missing(path)) => {
                log::warn!("文件不存在: {}", path.display());
                FileOutcome::Missing(path)
            }
            Err(error) => {
                log::warn!("分析失败 {}: {}", path.display(), error);
                FileOutcome::Failed {
                    path: path.to_path_buf(),
                    error,
                }
            }
        }
    }

    fn analyze(&self, path: &Path) -> Result<PngReport, ProbeError> {
        let bytes = self.load_file(path)?;
        let decoded = self.decode_png(&bytes)?;
        let classification = classifier::classify(&decoded);

        log::info!(
            "🔍 {} - {}x{} {} 透明通道: {}",
            path.display(),
            decoded.header().width,
            decoded.header().height,
            decoded.header().mode_label(),
            match &classification {
                Some(c) if c.is_pure_mask => "纯遮罩",
                Some(_) => "渐变",
                None => "无",
            }
        );

        Ok(PngReport {
            file_name: display_name(path),
            header: decoded.header().clone(),
            classification,
        })
    }

    /// 分析目录下所有 PNG 文件（按文件名排序）。
    pub fn analyze_directory(&self, dir: &Path) -> Result<Vec<FileOutcome>, AppError> {
        let files = list_png_files(dir)?;
        log::info!("在 {} 中找到 {} 个 PNG 文件", dir.display(), files.len());

        Ok(files.iter().map(|path| self.inspect_file(path)).collect())
    }

    /// 按文件名清单逐一对比两个目录中的同名文件。
    pub fn compare_directories<S: AsRef<str>>(
        &self,
        original_dir: &Path,
        new_dir: &Path,
        names: &[S],
    ) -> Vec<Comparison> {
        names
            .iter()
            .map(|name| {
                let name = name.as_ref();
                Comparison {
                    name: name.to_string(),
                    original: self.inspect_file(&original_dir.join(name)),
                    new: self.inspect_file(&new_dir.join(name)),
                }
            })
            .collect()
    }
}

/// 列出目录中扩展名为 `png`（不区分大小写）的普通文件，按文件名排序。
pub fn list_png_files(dir: &Path) -> Result<Vec<PathBuf>, AppError> {
    if !dir.is_dir() {
        return Err(AppError::Directory(format!(
            "资源目录不存在或不是目录: {}",
            dir.display()
        )));
    }

    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        let is_png = path
            .extension()
            .and_then(OsStr::to_str)
            .is_some_and(|ext| ext.eq_ignore_ascii_case("png"));
        if is_png && path.is_file() {
            files.push(path);
        }
    }

    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
