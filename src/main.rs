//! Runs one copy and one paste against the in-memory reference host.
//!
//! Usage: `granular [config.toml]`

use std::path::PathBuf;
use std::sync::Arc;

use granular_lib::bootstrap::{init_tracing_subscriber, load_config, wire_dependencies, HostPorts};
use granular_lib::{AppConfig, UseCases};
use gr_core::granule::{Granule, GranuleBundle};
use gr_core::node::NodeKind;
use gr_core::ports::DesignNodePort;
use gr_infra::document::{
    MemoryFontLoader, MemoryNode, MemorySelection, MemoryStyleRegistry, MemoryVariableRegistry,
    RecordingNotifier,
};
use serde_json::json;
use tracing::{error, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = match std::env::args().nth(1) {
        Some(path) => match load_config(PathBuf::from(path)) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("加载配置失败, using defaults: {e:#}");
                AppConfig::default()
            }
        },
        None => AppConfig::default(),
    };
    init_tracing_subscriber(&config.logging)?;

    let selection = Arc::new(MemorySelection::new());
    let notifier = Arc::new(RecordingNotifier::new(true));
    let deps = wire_dependencies(
        &config,
        HostPorts {
            selection: selection.clone(),
            styles: Arc::new(MemoryStyleRegistry::new()),
            variables: Arc::new(MemoryVariableRegistry::new()),
            fonts: Arc::new(MemoryFontLoader::new()),
            notifier: notifier.clone(),
        },
    )?;
    let usecases = UseCases::new(&deps);

    let page: Arc<dyn DesignNodePort> = Arc::new(MemoryNode::new(NodeKind::Page, "Page 1"));
    let source: Arc<dyn DesignNodePort> = Arc::new(
        MemoryNode::new(NodeKind::Rectangle, "Primary button")
            .child_of(page.clone())
            .with(Granule::Width, json!(160.0))
            .with(Granule::Height, json!(40.0))
            .with(Granule::CornerRadius, json!(8))
            .with(
                Granule::Fills,
                json!([{ "type": "SOLID", "color": { "r": 0.1, "g": 0.4, "b": 0.9 } }]),
            ),
    );
    let target: Arc<dyn DesignNodePort> = Arc::new(
        MemoryNode::new(NodeKind::Ellipse, "Badge")
            .child_of(page)
            .with(Granule::Width, json!(24.0))
            .with(Granule::Height, json!(24.0)),
    );

    selection.select(vec![source]);
    usecases.publish_panel_state().execute().await;
    usecases.copy_selection().execute().await;

    selection.select(vec![target.clone()]);
    usecases.publish_panel_state().selection_changed().await;
    usecases
        .paste_to_selection()
        .execute_bundle(GranuleBundle::Fills)
        .await;

    match target.get(Granule::Fills) {
        Some(fills) => info!(fills = ?fills, "Badge fills after paste"),
        None => error!("Badge has no fills after paste"),
    }
    for message in notifier.notifications() {
        println!("{message}");
    }

    Ok(())
}
