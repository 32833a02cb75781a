use std::path::PathBuf;

use anyhow::{Context, Result};
use gr_core::config::StorageConfig;

/// Get the Granular application data root directory.
///
/// 获取 Granular 应用数据根目录。
///
/// # Platform-specific Paths / 平台特定路径
/// - macOS: ~/Library/Application Support/granular
/// - Windows: %LOCALAPPDATA%\granular
/// - Linux: $XDG_DATA_HOME/granular or ~/.local/share/granular
///
/// # Behavior / 行为
/// - This function does not create the directory.
/// - 此函数不自动创建目录。
pub fn app_data_dir() -> Result<PathBuf> {
    let base_dir = dirs::data_local_dir().context("Failed to get platform-specific data directory")?;
    Ok(base_dir.join("granular"))
}

/// Path of the key-value store file: configured data dir, else [`app_data_dir`].
pub fn record_file_path(config: &StorageConfig) -> Result<PathBuf> {
    let dir = match &config.data_dir {
        Some(dir) => dir.clone(),
        None => app_data_dir()?,
    };
    Ok(dir.join(&config.record_file))
}
