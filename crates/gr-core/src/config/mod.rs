//! # Configuration DTOs / 配置数据结构
//!
//! Plain data mapped from the TOML file. Loading and path resolution live in
//! the bootstrap layer and `gr-infra`.
//! 此模块只包含数据结构；加载与路径解析在 bootstrap 层和 `gr-infra` 中完成。

mod app_config;

pub use app_config::{AppConfig, LoggingConfig, PreviewConfig, StorageConfig};
