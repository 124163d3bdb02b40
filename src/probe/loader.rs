//! # 加载与校验模块
//!
//! ## 设计思路
//!
//! 在“尽可能早”的阶段执行输入校验：存在性、体积上限、文件签名。
//! 目标是尽快失败，减少不必要的内存与 CPU 消耗。

use std::path::Path;

use super::{AlphaProbe, ProbeError};

impl AlphaProbe {
    /// 从本地路径加载图片原始字节。
    pub fn load_file(&self, path: &Path) -> Result<Vec<u8>, ProbeError> {
        log::debug!("📁 读取本地图片 - 路径: {}", path.display());

        if !path.exists() {
            return Err(ProbeError::Missing(path.to_path_buf()));
        }

        let metadata = std::fs::metadata(path)
            .map_err(|e| ProbeError::FileSystem(format!("无法读取文件信息：{}", e)))?;

        if !metadata.is_file() {
            return Err(ProbeError::FileSystem(format!(
                "不是普通文件：{}",
                path.display()
            )));
        }

        if metadata.len() > self.config.max_file_size {
            return Err(ProbeError::ResourceLimit(format!(
                "文件过大：{:.2} MB（限制：{:.2} MB）",
                metadata.len() as f64 / 1024.0 / 1024.0,
                self.config.max_file_size as f64 / 1024.0 / 1024.0
            )));
        }

        let bytes = std::fs::read(path)
            .map_err(|e| ProbeError::FileSystem(format!("无法读取图片文件：{}", e)))?;
        Self::validate_image_signature(&bytes)?;

        Ok(bytes)
    }

    fn validate_image_signature(bytes: &[u8]) -> Result<(), ProbeError> {
        if bytes.is_empty() {
            return Err(ProbeError::InvalidFormat("图片内容为空".to_string()));
        }

        let kind = infer::get(bytes)
            .ok_or_else(|| ProbeError::InvalidFormat("无法识别图片类型".to_string()))?;

        if kind.matcher_type() != infer::MatcherType::Image {
            return Err(ProbeError::InvalidFormat(format!(
                "文件签名不是图片类型：{}",
                kind.mime_type()
            )));
        }

        Ok(())
    }
}
