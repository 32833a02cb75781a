use anyhow::Result;
use async_trait::async_trait;

use crate::node::FontName;

/// The host refuses text edits until the affected font is loaded.
#[async_trait]
pub trait FontLoaderPort: Send + Sync {
    async fn load_font(&self, font: &FontName) -> Result<()>;
}
