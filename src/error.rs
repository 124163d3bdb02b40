//! 统一错误类型模块
//!
//! # 设计思路
//!
//! 错误分两层：
//! - 单个文件的加载 / 解码失败由 `ProbeError` 表达，在逐文件边界被捕获并打印，批处理继续。
//! - 整次运行无法继续的情况（目录不存在、配置文件无法解析）由 `AppError` 表达，
//!   直接从二进制入口 `main` 返回。
//!
//! # 实现思路
//!
//! - 使用 `thiserror` 派生可读错误消息。
//! - 为 `std::io::Error` 提供 `From` 转换，目录遍历时直接使用 `?`。

/// 应用级统一错误类型
///
/// 两个命令行入口均返回 `Result<(), AppError>`。
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// 文件系统 I/O 错误
    #[error("文件系统错误: {0}")]
    Io(#[from] std::io::Error),

    /// 配置文件读取或解析失败
    #[error("配置错误: {0}")]
    Config(String),

    /// 资源目录不可用
    #[error("目录不可用: {0}")]
    Directory(String),
}
