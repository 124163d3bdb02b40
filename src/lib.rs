//! # PNG 透明通道探测工具 — 库入口
//!
//! ## 架构总览
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │  bin/analyze_png       扫描目录，逐个输出结构分析报告     │
//! │  bin/compare_images    两个目录同名文件逐一对比           │
//! └───────┬──────────────────────────────────────────────────┘
//!         ↓ Result<(), AppError>
//! ┌───────┼──────────────────────────────────────────────────┐
//! │  ┌─ error ────── AppError (整次运行级错误)                │
//! │  ├─ settings ─── 内置默认配置 + JSON 覆盖文件             │
//! │  └─ probe ────── 加载 · 解码 · 透明通道分类 · 报告        │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! ## 模块职责
//!
//! | 模块 | 职责 |
//! |------|------|
//! | [`error`] | 统一错误类型 `AppError`，两个入口的返回类型 |
//! | [`settings`] | 从环境变量指定的 JSON 文件加载 `ProbeConfig` 覆盖 |
//! | [`probe`] | PNG 加载校验、解码、透明通道分类与文本报告 |

pub mod error;
pub mod probe;
pub mod settings;
