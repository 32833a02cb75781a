//! Host node port
//!
//! A node of the host scene graph. Reads are synchronous (the host holds the
//! document in memory); only raster export is asynchronous.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use super::errors::{NodeWriteError, ResizeError};
use crate::granule::Granule;
use crate::ids::NodeId;
use crate::node::{Capabilities, NodeKind, NodeValue, VectorVertex};

#[async_trait]
pub trait DesignNodePort: Send + Sync {
    fn id(&self) -> NodeId;

    fn name(&self) -> String;

    fn kind(&self) -> NodeKind;

    fn parent(&self) -> Option<Arc<dyn DesignNodePort>>;

    /// Whether the node exposes `granule` at all.
    fn has(&self, granule: Granule) -> bool {
        self.kind().supports(granule)
    }

    /// Current value of `granule`; `None` when the host reports nothing.
    fn get(&self, granule: Granule) -> Option<NodeValue>;

    fn set(&self, granule: Granule, value: &Value) -> Result<(), NodeWriteError>;

    /// Vertex list, for kinds with a vector network.
    fn vector_vertices(&self) -> Option<Vec<VectorVertex>> {
        None
    }

    /// Value of `granule` over the character range `[start, start + len)`.
    fn sample_text_range(&self, _granule: Granule, _start: usize, _len: usize) -> Option<Value> {
        None
    }

    fn can_resize(&self) -> bool {
        self.kind().capabilities().contains(Capabilities::RESIZE)
    }

    fn resize(&self, width: f64, height: f64) -> Result<(), ResizeError>;

    /// PNG snapshot of the node at `scale`.
    async fn export_png(&self, scale: f64) -> anyhow::Result<Vec<u8>>;
}
