use std::collections::{HashMap, HashSet};

use anyhow::Result;
use async_trait::async_trait;
use gr_core::ids::{StyleId, VariableId};
use gr_core::ports::{StyleInfo, StyleRegistryPort, VariableInfo, VariableRegistryPort};

#[derive(Default)]
pub struct MemoryStyleRegistry {
    styles: HashMap<StyleId, StyleInfo>,
    failing: HashSet<StyleId>,
}

impl MemoryStyleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_style(mut self, id: impl Into<StyleId>, name: impl Into<String>) -> Self {
        let id = id.into();
        self.styles.insert(
            id.clone(),
            StyleInfo {
                id,
                name: name.into(),
            },
        );
        self
    }

    /// Lookups of `id` return an error.
    pub fn with_failing(mut self, id: impl Into<StyleId>) -> Self {
        self.failing.insert(id.into());
        self
    }
}

#[async_trait]
impl StyleRegistryPort for MemoryStyleRegistry {
    async fn style_by_id(&self, id: &StyleId) -> Result<Option<StyleInfo>> {
        if self.failing.contains(id) {
            anyhow::bail!("style registry failed for {id}");
        }
        Ok(self.styles.get(id).cloned())
    }
}

#[derive(Default)]
pub struct MemoryVariableRegistry {
    variables: HashMap<VariableId, VariableInfo>,
    failing: HashSet<VariableId>,
}

impl MemoryVariableRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_variable(mut self, id: impl Into<VariableId>, name: impl Into<String>) -> Self {
        let id = id.into();
        self.variables.insert(
            id.clone(),
            VariableInfo {
                id,
                name: name.into(),
            },
        );
        self
    }

    pub fn with_failing(mut self, id: impl Into<VariableId>) -> Self {
        self.failing.insert(id.into());
        self
    }
}

#[async_trait]
impl VariableRegistryPort for MemoryVariableRegistry {
    async fn variable_by_id(&self, id: &VariableId) -> Result<Option<VariableInfo>> {
        if self.failing.contains(id) {
            anyhow::bail!("variable registry failed for {id}");
        }
        Ok(self.variables.get(id).cloned())
    }
}
