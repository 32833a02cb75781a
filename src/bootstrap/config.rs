//! # Configuration Loader / 配置加载器
//!
//! ## Responsibilities / 职责
//!
//! - ✅ Read TOML configuration files / 读取 TOML 配置文件
//! - ✅ Parse TOML into AppConfig DTO / 将 TOML 解析为 AppConfig DTO
//! - ✅ Report I/O and parsing errors with context / 报告带上下文的 I/O 和解析错误
//!
//! ## Prohibited / 禁止事项
//!
//! ❌ **No validation logic / 禁止验证逻辑**
//! ❌ **No business rules / 禁止业务规则**
//!
//! Missing sections and fields take the defaults declared on the DTOs.
//! 缺失的部分和字段使用 DTO 上声明的默认值。

use std::path::PathBuf;

use anyhow::Context;
use gr_core::config::AppConfig;

/// Load configuration from a TOML file
/// 从 TOML 文件加载配置
///
/// # Errors / 错误
///
/// Returns error if:
/// - File cannot be read (I/O error)
/// - Content is not valid TOML or does not map onto `AppConfig`
/// 在以下情况下返回错误：
/// - 无法读取文件（I/O 错误）
/// - 内容不是有效的 TOML 或结构不匹配
pub fn load_config(config_path: PathBuf) -> anyhow::Result<AppConfig> {
    let content = std::fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse config as TOML: {}", config_path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(content: &str) -> NamedTempFile {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(content.as_bytes()).unwrap();
        temp_file
    }

    /// Test that valid TOML is parsed correctly
    /// 测试有效 TOML 被正确解析
    #[test]
    fn test_load_config_reads_valid_toml() {
        let temp_file = write_config(
            r#"
            [storage]
            data_dir = "/path/to/data"
            record_file = "store.json"

            [preview]
            default_panel_width = 400.0
            target_height = 200.0
            max_scale = 1.5

            [logging]
            filter = "granular=trace"
        "#,
        );

        let config = load_config(temp_file.path().to_path_buf()).unwrap();

        assert_eq!(config.storage.data_dir, Some(PathBuf::from("/path/to/data")));
        assert_eq!(config.storage.record_file, "store.json");
        assert_eq!(config.preview.default_panel_width, 400.0);
        assert_eq!(config.preview.target_height, 200.0);
        assert_eq!(config.preview.max_scale, 1.5);
        assert_eq!(config.logging.filter.as_deref(), Some("granular=trace"));
    }

    /// Test that missing values result in default values
    /// 测试缺失的值导致默认值
    #[test]
    fn test_load_config_returns_defaults_when_missing() {
        let temp_file = write_config(
            r#"
            [preview]
            # only the height is set
            target_height = 300.0
        "#,
        );

        let config = load_config(temp_file.path().to_path_buf()).unwrap();

        assert_eq!(config.preview.target_height, 300.0);
        assert_eq!(config.preview.default_panel_width, 320.0);
        assert_eq!(config.storage, AppConfig::default().storage);
        assert!(config.logging.filter.is_none());
    }

    #[test]
    fn test_load_config_empty_file_is_default() {
        let temp_file = write_config("");
        let config = load_config(temp_file.path().to_path_buf()).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    /// Test that invalid TOML returns error
    /// 测试无效 TOML 返回错误
    #[test]
    fn test_load_config_returns_error_on_invalid_toml() {
        let temp_file = write_config("this is not [valid toml");

        let result = load_config(temp_file.path().to_path_buf());
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Failed to parse config as TOML"));
    }

    /// Test that missing file returns IO error
    /// 测试缺失文件返回 IO 错误
    #[test]
    fn test_load_config_returns_io_error_on_missing_file() {
        let result = load_config(PathBuf::from("/nonexistent/path/config.toml"));
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Failed to read config file"));
    }
}
