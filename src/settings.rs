//! 配置覆盖文件
//!
//! 编译期内置的 `ProbeConfig::default()` 是主配置。若环境变量 `PNG_ALPHA_PROBE_CONFIG`
//! 指向一个 JSON 文件，则读取它覆盖默认值：文件不存在时回退默认配置，
//! 文件存在但无法解析时视为致命错误。

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::AppError;
use crate::probe::ProbeConfig;

/// 指定配置覆盖文件路径的环境变量。
pub const CONFIG_ENV_VAR: &str = "PNG_ALPHA_PROBE_CONFIG";

fn config_path_from_env() -> Option<PathBuf> {
    std::env::var_os(CONFIG_ENV_VAR)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

pub(crate) fn load_config_from_path(config_path: Option<&Path>) -> Result<ProbeConfig, AppError> {
    let Some(config_path) = config_path else {
        return Ok(ProbeConfig::default());
    };

    if !config_path.exists() {
        log::warn!(
            "配置文件不存在，使用内置默认配置: {}",
            config_path.display()
        );
        return Ok(ProbeConfig::default());
    }

    let content = fs::read_to_string(config_path).map_err(|e| {
        AppError::Config(format!("读取配置文件失败 {}: {}", config_path.display(), e))
    })?;
    let config = serde_json::from_str::<ProbeConfig>(&content).map_err(|e| {
        AppError::Config(format!("解析配置文件失败 {}: {}", config_path.display(), e))
    })?;

    log::info!("已加载配置文件: {}", config_path.display());
    Ok(config)
}

/// 加载运行配置：内置默认值 + 可选的 JSON 覆盖文件。
pub fn load_config() -> Result<ProbeConfig, AppError> {
    load_config_from_path(config_path_from_env().as_deref())
}
