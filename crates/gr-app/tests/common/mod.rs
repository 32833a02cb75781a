//! Shared fixtures for the use-case integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use gr_app::{AppDeps, UseCases};
use gr_core::config::PreviewConfig;
use gr_core::granule::Granule;
use gr_core::ids::NodeId;
use gr_core::node::{FontName, NodeKind, NodeValue};
use gr_core::ports::{DesignNodePort, FontLoaderPort, NodeWriteError, ResizeError};
use gr_core::record::PropertyRecord;
use gr_infra::document::{
    MemoryFontLoader, MemorySelection, MemoryStyleRegistry, MemoryVariableRegistry,
    RecordingNotifier,
};
use gr_infra::InMemoryKeyValueStore;
use mockall::mock;
use serde_json::Value;

pub struct Harness {
    pub selection: Arc<MemorySelection>,
    pub store: Arc<InMemoryKeyValueStore>,
    pub notifier: Arc<RecordingNotifier>,
    pub fonts: Arc<MemoryFontLoader>,
    pub deps: AppDeps,
}

impl Harness {
    pub fn new() -> Self {
        Self::with_registries(MemoryStyleRegistry::new(), MemoryVariableRegistry::new())
    }

    pub fn with_registries(styles: MemoryStyleRegistry, variables: MemoryVariableRegistry) -> Self {
        Self::build(styles, variables, MemoryFontLoader::new(), true)
    }

    pub fn with_fonts(fonts: MemoryFontLoader) -> Self {
        Self::build(MemoryStyleRegistry::new(), MemoryVariableRegistry::new(), fonts, true)
    }

    pub fn without_panel() -> Self {
        Self::build(
            MemoryStyleRegistry::new(),
            MemoryVariableRegistry::new(),
            MemoryFontLoader::new(),
            false,
        )
    }

    fn build(
        styles: MemoryStyleRegistry,
        variables: MemoryVariableRegistry,
        fonts: MemoryFontLoader,
        panel_attached: bool,
    ) -> Self {
        let selection = Arc::new(MemorySelection::new());
        let store = Arc::new(InMemoryKeyValueStore::new());
        let notifier = Arc::new(RecordingNotifier::new(panel_attached));
        let fonts = Arc::new(fonts);
        let deps = AppDeps {
            selection: selection.clone(),
            styles: Arc::new(styles),
            variables: Arc::new(variables),
            fonts: fonts.clone(),
            store: store.clone(),
            notifier: notifier.clone(),
            preview: PreviewConfig::default(),
        };
        Self {
            selection,
            store,
            notifier,
            fonts,
            deps,
        }
    }

    pub fn usecases(&self) -> UseCases<'_> {
        UseCases::new(&self.deps)
    }

    pub fn select(&self, nodes: &[Arc<dyn DesignNodePort>]) {
        self.selection.select(nodes.to_vec());
    }

    pub async fn store_record(&self, record: &PropertyRecord) {
        self.usecases().record_store().save(record).await;
    }

    pub async fn stored_record(&self) -> Option<PropertyRecord> {
        self.usecases().record_store().load().await
    }
}

pub fn record_with(values: &[(Granule, Value)]) -> PropertyRecord {
    let mut record = PropertyRecord::new(NodeId::from("source"), "Source");
    for (granule, value) in values {
        record.properties.insert(*granule, value.clone());
    }
    record
}

pub fn value_of(node: &dyn DesignNodePort, granule: Granule) -> Option<Value> {
    node.get(granule).and_then(NodeValue::into_value)
}

mock! {
    pub Node {}

    #[async_trait]
    impl DesignNodePort for Node {
        fn id(&self) -> NodeId;
        fn name(&self) -> String;
        fn kind(&self) -> NodeKind;
        fn parent(&self) -> Option<Arc<dyn DesignNodePort>>;
        fn get(&self, granule: Granule) -> Option<NodeValue>;
        fn set(&self, granule: Granule, value: &Value) -> Result<(), NodeWriteError>;
        fn resize(&self, width: f64, height: f64) -> Result<(), ResizeError>;
        async fn export_png(&self, scale: f64) -> anyhow::Result<Vec<u8>>;
    }
}

mock! {
    pub Fonts {}

    #[async_trait]
    impl FontLoaderPort for Fonts {
        async fn load_font(&self, font: &FontName) -> anyhow::Result<()>;
    }
}
