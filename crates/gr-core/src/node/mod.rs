//! Node model: kinds, capabilities and the values a host node reports.

mod kind;
mod value;

pub use kind::{Capabilities, NodeKind};
pub use value::{FontName, LayoutMode, NodeValue, VectorVertex};

use crate::granule::Granule;
use crate::ports::DesignNodePort;

/// Reads a plain numeric property, ignoring mixed or non-numeric values.
pub fn read_number(node: &dyn DesignNodePort, granule: Granule) -> Option<f64> {
    if !node.has(granule) {
        return None;
    }
    node.get(granule)?.as_value()?.as_f64()
}

/// Whether `node` is an auto-layout container (exposes a layout mode other than `NONE`).
pub fn is_auto_layout_container(node: &dyn DesignNodePort) -> bool {
    if !node.has(Granule::LayoutMode) {
        return false;
    }
    node.get(Granule::LayoutMode)
        .and_then(|value| value.into_value())
        .and_then(|value| serde_json::from_value::<LayoutMode>(value).ok())
        .map_or(false, LayoutMode::is_auto_layout)
}
