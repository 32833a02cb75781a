use anyhow::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::ids::StyleId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleInfo {
    pub id: StyleId,
    pub name: String,
}

/// Lookup of shared text/paint/effect styles.
#[async_trait]
pub trait StyleRegistryPort: Send + Sync {
    /// `Ok(None)` when no style has this id.
    async fn style_by_id(&self, id: &StyleId) -> Result<Option<StyleInfo>>;
}
