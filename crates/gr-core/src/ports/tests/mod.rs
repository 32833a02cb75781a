//! Test doubles shared by the unit tests of this crate.


use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::Value;

use crate::granule::Granule;
use crate::ids::NodeId;
use crate::node::{NodeKind, NodeValue, VectorVertex};
use crate::ports::{DesignNodePort, NodeWriteError, ResizeError};

/// Minimal host node backed by a value map.
pub(crate) struct TestNode {
    pub kind: NodeKind,
    pub values: Mutex<HashMap<Granule, NodeValue>>,
    pub vertices: Option<Vec<VectorVertex>>,
    pub ranges: HashMap<Granule, Value>,
    pub parent: Option<Arc<dyn DesignNodePort>>,
}

impl TestNode {
    pub fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            values: Mutex::new(HashMap::new()),
            vertices: None,
            ranges: HashMap::new(),
            parent: None,
        }
    }

    pub fn with(self, granule: Granule, value: impl Into<NodeValue>) -> Self {
        self.values.lock().unwrap().insert(granule, value.into());
        self
    }

    pub fn with_mixed(self, granule: Granule) -> Self {
        self.values.lock().unwrap().insert(granule, NodeValue::Mixed);
        self
    }

    pub fn with_range(mut self, granule: Granule, value: Value) -> Self {
        self.ranges.insert(granule, value);
        self
    }

    pub fn with_vertices(mut self, vertices: Vec<VectorVertex>) -> Self {
        self.vertices = Some(vertices);
        self
    }

    pub fn value(&self, granule: Granule) -> Option<NodeValue> {
        self.values.lock().unwrap().get(&granule).cloned()
    }
}

#[async_trait]
impl DesignNodePort for TestNode {
    fn id(&self) -> NodeId {
        NodeId::from("0:1")
    }

    fn name(&self) -> String {
        format!("{:?}", self.kind)
    }

    fn kind(&self) -> NodeKind {
        self.kind
    }

    fn parent(&self) -> Option<Arc<dyn DesignNodePort>> {
        self.parent.clone()
    }

    fn get(&self, granule: Granule) -> Option<NodeValue> {
        self.value(granule)
    }

    fn set(&self, granule: Granule, value: &Value) -> Result<(), NodeWriteError> {
        if !self.has(granule) {
            return Err(NodeWriteError::Unsupported(granule));
        }
        self.values
            .lock()
            .unwrap()
            .insert(granule, NodeValue::Value(value.clone()));
        Ok(())
    }

    fn vector_vertices(&self) -> Option<Vec<VectorVertex>> {
        self.vertices.clone()
    }

    fn sample_text_range(&self, granule: Granule, start: usize, len: usize) -> Option<Value> {
        assert_eq!((start, len), (0, 1), "only the first character is sampled");
        self.ranges.get(&granule).cloned()
    }

    fn resize(&self, _width: f64, _height: f64) -> Result<(), ResizeError> {
        Ok(())
    }

    async fn export_png(&self, _scale: f64) -> anyhow::Result<Vec<u8>> {
        Ok(Vec::new())
    }
}
