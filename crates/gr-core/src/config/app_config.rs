//! Application configuration domain model

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::preview::PreviewTarget;

/// Application configuration
///
/// Every section is optional in the file; missing sections and fields take
/// their defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Where the copied record is kept
    pub storage: StorageConfig,

    /// Preview export settings
    pub preview: PreviewConfig,

    /// Log filter override
    pub logging: LoggingConfig,
}

/// Storage configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Data directory; the platform data dir is used when unset
    pub data_dir: Option<PathBuf>,

    /// File name of the key-value store inside the data directory
    pub record_file: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            record_file: "granular.json".to_string(),
        }
    }
}

/// Preview configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreviewConfig {
    /// Panel width assumed until the host reports one
    pub default_panel_width: f64,

    /// Height of the preview box in pixels
    pub target_height: f64,

    /// Upper bound of the export scale
    pub max_scale: f64,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            default_panel_width: 320.0,
            target_height: 240.0,
            max_scale: 2.0,
        }
    }
}

impl PreviewConfig {
    pub fn target_for_panel(&self, panel_width: f64) -> PreviewTarget {
        PreviewTarget::for_panel(panel_width, self.target_height, self.max_scale)
    }
}

/// Logging configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` directives, overridden by `RUST_LOG`
    pub filter: Option<String>,
}
