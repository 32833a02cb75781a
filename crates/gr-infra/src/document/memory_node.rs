use std::collections::{BTreeMap, BTreeSet};
use std::sync::{Arc, Mutex};

use anyhow::Result;
use async_trait::async_trait;
use gr_core::granule::Granule;
use gr_core::ids::NodeId;
use gr_core::node::{FontName, NodeKind, NodeValue, VectorVertex};
use gr_core::ports::{DesignNodePort, NodeWriteError, ResizeError};
use serde_json::Value;

use super::{lock, MemoryFontLoader};

/// PNG file signature, prefixed to every exported preview.
const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a];

/// A node of the in-memory host.
///
/// Values are only reported for granules that were set. Writes to granules
/// the kind does not expose fail with [`NodeWriteError::Unsupported`].
pub struct MemoryNode {
    id: NodeId,
    name: String,
    kind: NodeKind,
    parent: Option<Arc<dyn DesignNodePort>>,
    values: Mutex<BTreeMap<Granule, NodeValue>>,
    text_ranges: BTreeMap<Granule, Value>,
    vertices: Option<Vec<VectorVertex>>,
    rejected: BTreeSet<Granule>,
    resize_failure: Option<String>,
    export_failure: Option<String>,
    font_gate: Option<Arc<MemoryFontLoader>>,
    resize_calls: Mutex<Vec<(f64, f64)>>,
    writes: Mutex<Vec<Granule>>,
}

impl MemoryNode {
    pub fn new(kind: NodeKind, name: impl Into<String>) -> Self {
        Self {
            id: NodeId::new(),
            name: name.into(),
            kind,
            parent: None,
            values: Mutex::new(BTreeMap::new()),
            text_ranges: BTreeMap::new(),
            vertices: None,
            rejected: BTreeSet::new(),
            resize_failure: None,
            export_failure: None,
            font_gate: None,
            resize_calls: Mutex::new(Vec::new()),
            writes: Mutex::new(Vec::new()),
        }
    }

    pub fn with_id(mut self, id: impl Into<NodeId>) -> Self {
        self.id = id.into();
        self
    }

    pub fn child_of(mut self, parent: Arc<dyn DesignNodePort>) -> Self {
        self.parent = Some(parent);
        self
    }

    pub fn with(self, granule: Granule, value: Value) -> Self {
        lock(&self.values).insert(granule, NodeValue::Value(value));
        self
    }

    pub fn with_mixed(self, granule: Granule) -> Self {
        lock(&self.values).insert(granule, NodeValue::Mixed);
        self
    }

    /// Value reported for the first character of a text node.
    pub fn with_text_range(mut self, granule: Granule, value: Value) -> Self {
        self.text_ranges.insert(granule, value);
        self
    }

    pub fn with_vertices(mut self, vertices: Vec<VectorVertex>) -> Self {
        self.vertices = Some(vertices);
        self
    }

    /// Writes of `granule` are rejected by the host.
    pub fn rejecting(mut self, granule: Granule) -> Self {
        self.rejected.insert(granule);
        self
    }

    pub fn failing_resize(mut self, reason: impl Into<String>) -> Self {
        self.resize_failure = Some(reason.into());
        self
    }

    pub fn failing_export(mut self, reason: impl Into<String>) -> Self {
        self.export_failure = Some(reason.into());
        self
    }

    /// Text writes fail until the node's font has been loaded through `fonts`.
    pub fn gated_by(mut self, fonts: Arc<MemoryFontLoader>) -> Self {
        self.font_gate = Some(fonts);
        self
    }

    pub fn value(&self, granule: Granule) -> Option<NodeValue> {
        lock(&self.values).get(&granule).cloned()
    }

    pub fn resize_calls(&self) -> Vec<(f64, f64)> {
        lock(&self.resize_calls).clone()
    }

    /// Granules successfully written, in write order.
    pub fn writes(&self) -> Vec<Granule> {
        lock(&self.writes).clone()
    }

    fn font_ready(&self, granule: Granule, value: &Value) -> bool {
        let Some(fonts) = &self.font_gate else {
            return true;
        };
        if !granule.is_text_property() {
            return true;
        }
        // Setting fontName needs the new font; anything else needs the current one.
        let font = if granule == Granule::FontName {
            serde_json::from_value::<FontName>(value.clone()).ok()
        } else {
            self.value(Granule::FontName)
                .and_then(NodeValue::into_value)
                .and_then(|v| serde_json::from_value::<FontName>(v).ok())
        };
        font.map_or(true, |font| fonts.is_loaded(&font))
    }
}

#[async_trait]
impl DesignNodePort for MemoryNode {
    fn id(&self) -> NodeId {
        self.id.clone()
    }

    fn name(&self) -> String {
        self.name.clone()
    }

    fn kind(&self) -> NodeKind {
        self.kind
    }

    fn parent(&self) -> Option<Arc<dyn DesignNodePort>> {
        self.parent.clone()
    }

    fn get(&self, granule: Granule) -> Option<NodeValue> {
        if !self.has(granule) {
            return None;
        }
        self.value(granule)
    }

    fn set(&self, granule: Granule, value: &Value) -> Result<(), NodeWriteError> {
        if !self.has(granule) {
            return Err(NodeWriteError::Unsupported(granule));
        }
        if self.rejected.contains(&granule) {
            return Err(NodeWriteError::Rejected {
                granule,
                reason: "property is read-only".to_string(),
            });
        }
        if !self.font_ready(granule, value) {
            return Err(NodeWriteError::Rejected {
                granule,
                reason: "font not loaded".to_string(),
            });
        }
        lock(&self.values).insert(granule, NodeValue::Value(value.clone()));
        lock(&self.writes).push(granule);
        Ok(())
    }

    fn vector_vertices(&self) -> Option<Vec<VectorVertex>> {
        self.vertices.clone()
    }

    fn sample_text_range(&self, granule: Granule, start: usize, len: usize) -> Option<Value> {
        if !self.kind.is_ranged_text() || len == 0 {
            return None;
        }
        let characters = self
            .value(Granule::Characters)
            .and_then(NodeValue::into_value)
            .and_then(|v| v.as_str().map(|s| s.chars().count()))
            .unwrap_or(0);
        if start + len > characters {
            return None;
        }
        self.text_ranges.get(&granule).cloned()
    }

    fn resize(&self, width: f64, height: f64) -> Result<(), ResizeError> {
        if !self.can_resize() {
            return Err(ResizeError::NotResizable);
        }
        lock(&self.resize_calls).push((width, height));
        if let Some(reason) = &self.resize_failure {
            return Err(ResizeError::Rejected {
                width,
                height,
                reason: reason.clone(),
            });
        }
        let mut values = lock(&self.values);
        values.insert(Granule::Width, NodeValue::Value(Value::from(width)));
        values.insert(Granule::Height, NodeValue::Value(Value::from(height)));
        Ok(())
    }

    async fn export_png(&self, scale: f64) -> Result<Vec<u8>> {
        if let Some(reason) = &self.export_failure {
            anyhow::bail!("export of {} failed: {reason}", self.name);
        }
        let mut bytes = PNG_SIGNATURE.to_vec();
        bytes.extend_from_slice(self.id.as_str().as_bytes());
        bytes.extend_from_slice(&scale.to_le_bytes());
        Ok(bytes)
    }
}
