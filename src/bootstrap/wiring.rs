//! # Dependency Injection / 依赖注入模块
//!
//! ## Responsibilities / 职责
//!
//! - ✅ Create the key-value store from configuration / 根据配置创建键值存储
//! - ✅ Combine it with the host's ports into [`AppDeps`] / 与宿主端口组合为 AppDeps
//!
//! ## Prohibited / 禁止事项
//!
//! ❌ **No business logic / 禁止包含任何业务逻辑**
//! ❌ **No configuration validation / 禁止做配置验证**
//!
//! > **This is the only place allowed to depend on gr-infra + gr-app simultaneously.**
//! > **这是唯一允许同时依赖 gr-infra 和 gr-app 的地方。**

use std::sync::Arc;

use gr_app::AppDeps;
use gr_core::config::AppConfig;
use gr_core::ports::*;
use gr_infra::fs::record_file_path;
use gr_infra::FileKeyValueStore;
use tracing::info;

/// Result type for wiring operations
pub type WiringResult<T> = Result<T, WiringError>;

/// Errors during dependency injection
/// 依赖注入错误
#[derive(Debug, thiserror::Error)]
pub enum WiringError {
    #[error("Storage location could not be resolved: {0}")]
    StoragePath(String),
}

/// Ports provided by the host design tool.
/// 宿主设计工具提供的端口。
pub struct HostPorts {
    pub selection: Arc<dyn SelectionPort>,
    pub styles: Arc<dyn StyleRegistryPort>,
    pub variables: Arc<dyn VariableRegistryPort>,
    pub fonts: Arc<dyn FontLoaderPort>,
    pub notifier: Arc<dyn NotifierPort>,
}

/// Wire host ports and a file-backed store into [`AppDeps`].
/// 将宿主端口和文件存储组装为 AppDeps。
pub fn wire_dependencies(config: &AppConfig, host: HostPorts) -> WiringResult<AppDeps> {
    let store_path = record_file_path(&config.storage)
        .map_err(|e| WiringError::StoragePath(format!("{e:#}")))?;
    info!(path = %store_path.display(), "Using file key-value store");

    let HostPorts {
        selection,
        styles,
        variables,
        fonts,
        notifier,
    } = host;

    Ok(AppDeps {
        selection,
        styles,
        variables,
        fonts,
        store: Arc::new(FileKeyValueStore::new(store_path)),
        notifier,
        preview: config.preview.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use gr_app::{CopyOutcome, UseCases};
    use gr_core::granule::Granule;
    use gr_core::node::NodeKind;
    use gr_infra::document::{
        MemoryFontLoader, MemoryNode, MemorySelection, MemoryStyleRegistry,
        MemoryVariableRegistry, RecordingNotifier,
    };
    use serde_json::json;

    fn memory_host(selection: Arc<MemorySelection>) -> HostPorts {
        HostPorts {
            selection,
            styles: Arc::new(MemoryStyleRegistry::new()),
            variables: Arc::new(MemoryVariableRegistry::new()),
            fonts: Arc::new(MemoryFontLoader::new()),
            notifier: Arc::new(RecordingNotifier::new(false)),
        }
    }

    #[tokio::test]
    async fn test_copied_record_survives_a_new_wiring() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = AppConfig::default();
        config.storage.data_dir = Some(dir.path().to_path_buf());

        let selection = Arc::new(MemorySelection::new());
        let card: Arc<dyn DesignNodePort> = Arc::new(
            MemoryNode::new(NodeKind::Rectangle, "Card").with(Granule::Opacity, json!(0.25)),
        );
        selection.select(vec![card]);

        let deps = wire_dependencies(&config, memory_host(selection)).unwrap();
        let outcome = UseCases::new(&deps).copy_selection().execute().await;
        assert!(matches!(outcome, CopyOutcome::Copied(_)));
        assert!(dir.path().join("granular.json").exists());

        // A later invocation with fresh ports sees the same record.
        let deps = wire_dependencies(&config, memory_host(Arc::new(MemorySelection::new()))).unwrap();
        let record = UseCases::new(&deps).record_store().load().await.unwrap();
        assert_eq!(record.name, "Card");
        assert_eq!(record.get(Granule::Opacity), Some(&json!(0.25)));
    }

    #[test]
    fn test_preview_settings_come_from_config() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = AppConfig::default();
        config.storage.data_dir = Some(dir.path().to_path_buf());
        config.preview.max_scale = 1.0;

        let deps = wire_dependencies(&config, memory_host(Arc::new(MemorySelection::new()))).unwrap();
        assert_eq!(deps.preview.max_scale, 1.0);
    }
}
