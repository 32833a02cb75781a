use std::collections::HashSet;
use std::sync::Mutex;

use anyhow::Result;
use async_trait::async_trait;
use gr_core::node::FontName;
use gr_core::ports::FontLoaderPort;
use tracing::debug;

use super::lock;

/// Font loader that knows every font except the ones marked unavailable.
#[derive(Default)]
pub struct MemoryFontLoader {
    unavailable: HashSet<FontName>,
    loaded: Mutex<Vec<FontName>>,
}

impl MemoryFontLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_unavailable(mut self, font: FontName) -> Self {
        self.unavailable.insert(font);
        self
    }

    pub fn is_loaded(&self, font: &FontName) -> bool {
        lock(&self.loaded).contains(font)
    }

    /// Every successful load, in call order.
    pub fn loaded(&self) -> Vec<FontName> {
        lock(&self.loaded).clone()
    }
}

#[async_trait]
impl FontLoaderPort for MemoryFontLoader {
    async fn load_font(&self, font: &FontName) -> Result<()> {
        if self.unavailable.contains(font) {
            anyhow::bail!("font {font} is not available");
        }
        debug!(font = %font, "Font loaded");
        lock(&self.loaded).push(font.clone());
        Ok(())
    }
}
