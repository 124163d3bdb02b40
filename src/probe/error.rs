//! # 错误模型模块
//!
//! ## 设计思路
//!
//! 使用单一错误枚举承载单个 PNG 文件探测链路中的所有错误来源，避免字符串拼接式错误处理。
//! 通过 `thiserror` 保持人类可读错误，同时让调用侧可按分支匹配。
//!
//! “没有透明通道”不是错误，不在此枚举中出现。

use std::path::PathBuf;

/// 单文件探测错误类型。
///
/// 该类型在逐文件边界被捕获并报告，不会中断整批处理。
#[derive(Debug, thiserror::Error)]
pub enum ProbeError {
    #[error("文件不存在：{}", .0.display())]
    Missing(PathBuf),

    #[error("文件错误：{0}")]
    FileSystem(String),

    #[error("格式错误：{0}")]
    InvalidFormat(String),

    #[error("解码错误：{0}")]
    Decode(String),

    #[error("资源限制：{0}")]
    ResourceLimit(String),
}

