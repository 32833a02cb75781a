use serde::{Deserialize, Serialize};

use crate::ids::NodeId;
use crate::ports::DesignNodePort;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AncestorEntry {
    pub name: String,
    pub id: NodeId,
}

/// Path from the outermost container below the page down to the immediate
/// parent of `node`, root first.
pub fn ancestors_of(node: &dyn DesignNodePort) -> Vec<AncestorEntry> {
    let mut ancestors = Vec::new();
    let mut current = node.parent();
    while let Some(parent) = current {
        if parent.kind().is_root_like() {
            break;
        }
        ancestors.push(AncestorEntry {
            name: parent.name(),
            id: parent.id(),
        });
        current = parent.parent();
    }
    ancestors.reverse();
    ancestors
}
