use anyhow::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::ids::VariableId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariableInfo {
    pub id: VariableId,
    pub name: String,
}

/// Lookup of design variables referenced by paint bindings.
#[async_trait]
pub trait VariableRegistryPort: Send + Sync {
    async fn variable_by_id(&self, id: &VariableId) -> Result<Option<VariableInfo>>;
}
