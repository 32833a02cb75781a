use std::sync::{Arc, Mutex};

use gr_core::ports::{DesignNodePort, SelectionPort};

use super::lock;

#[derive(Default)]
pub struct MemorySelection {
    nodes: Mutex<Vec<Arc<dyn DesignNodePort>>>,
}

impl MemorySelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the selection.
    pub fn select(&self, nodes: Vec<Arc<dyn DesignNodePort>>) {
        *lock(&self.nodes) = nodes;
    }

    pub fn clear(&self) {
        lock(&self.nodes).clear();
    }
}

impl SelectionPort for MemorySelection {
    fn current_selection(&self) -> Vec<Arc<dyn DesignNodePort>> {
        lock(&self.nodes).clone()
    }
}
