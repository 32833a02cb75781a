//! # Application Dependencies / 应用依赖
//!
//! Groups the ports one plugin invocation works with.
//! 此模块定义一次插件调用所需的依赖分组。
//!
//! **Note / 注意**: This is NOT a Builder pattern.
//! **这不是 Builder 模式。**
//! - No build steps / 无构建步骤
//! - No default values / 无默认值
//! - Just parameter grouping / 仅用于参数打包

use std::sync::Arc;

use gr_core::config::PreviewConfig;
use gr_core::ports::*;

/// Application dependency grouping (non-Builder, just parameter grouping)
/// 应用依赖分组（非 Builder，仅参数打包）
///
/// All dependencies are required - no defaults, no optional fields.
/// 所有依赖都是必需的 - 无默认值，无可选字段。
pub struct AppDeps {
    // Host document / 宿主文档
    pub selection: Arc<dyn SelectionPort>,
    pub styles: Arc<dyn StyleRegistryPort>,
    pub variables: Arc<dyn VariableRegistryPort>,
    pub fonts: Arc<dyn FontLoaderPort>,

    // Persistence / 持久化
    pub store: Arc<dyn KeyValueStorePort>,

    // UI / 界面
    pub notifier: Arc<dyn NotifierPort>,

    // Preview settings / 预览设置
    pub preview: PreviewConfig,
}
