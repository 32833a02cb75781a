use std::sync::Arc;

use super::DesignNodePort;

/// The user's current selection, in selection order.
pub trait SelectionPort: Send + Sync {
    fn current_selection(&self) -> Vec<Arc<dyn DesignNodePort>>;
}
