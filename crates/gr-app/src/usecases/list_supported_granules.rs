use std::sync::Arc;

use gr_core::granule::Granule;
use gr_core::ports::{DesignNodePort, SelectionPort};

/// Granules at least one selected node exposes, in canonical order.
pub struct ListSupportedGranules {
    selection: Arc<dyn SelectionPort>,
}

impl ListSupportedGranules {
    pub fn new(selection: Arc<dyn SelectionPort>) -> Self {
        Self { selection }
    }

    pub fn execute(&self) -> Vec<Granule> {
        supported_by(&self.selection.current_selection())
    }
}

pub fn supported_by(nodes: &[Arc<dyn DesignNodePort>]) -> Vec<Granule> {
    Granule::ALL
        .iter()
        .copied()
        .filter(|granule| nodes.iter().any(|node| node.has(*granule)))
        .collect()
}
