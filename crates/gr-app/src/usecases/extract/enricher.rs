//! Metadata enrichment for extracted values.
//!
//! Style ids and bound paint variables are opaque ids in the host. The
//! enricher looks their names up so the panel can show something readable.
//! Every lookup failure degrades to "no name".

use std::sync::Arc;

use futures::future::join_all;
use gr_core::granule::Granule;
use gr_core::ids::{StyleId, VariableId};
use gr_core::paint::parse_paints;
use gr_core::ports::{StyleRegistryPort, VariableRegistryPort};
use gr_core::record::{MetadataEntry, PaintChannel, PaintMetadata, PaintMetadataMap, StyleSlot};
use serde_json::Value;
use tracing::{debug, warn};

pub struct MetadataEnricher {
    styles: Arc<dyn StyleRegistryPort>,
    variables: Arc<dyn VariableRegistryPort>,
}

impl MetadataEnricher {
    pub fn new(styles: Arc<dyn StyleRegistryPort>, variables: Arc<dyn VariableRegistryPort>) -> Self {
        Self { styles, variables }
    }

    /// Extra record entries for `granule`; empty when there is nothing to add.
    pub async fn enrich(&self, granule: Granule, value: &Value) -> Vec<MetadataEntry> {
        if let Some(slot) = StyleSlot::from_granule(granule) {
            return self.style_name(slot, value).await.into_iter().collect();
        }
        if let Some(channel) = PaintChannel::from_granule(granule) {
            return self.paint_variables(channel, value).await.into_iter().collect();
        }
        Vec::new()
    }

    async fn style_name(&self, slot: StyleSlot, value: &Value) -> Option<MetadataEntry> {
        let id = value.as_str().filter(|id| !id.is_empty())?;
        match self.styles.style_by_id(&StyleId::from(id)).await {
            Ok(Some(style)) => Some(MetadataEntry::StyleName {
                slot,
                name: style.name,
            }),
            Ok(None) => {
                debug!(style_id = %id, "Style not found");
                None
            }
            Err(e) => {
                warn!(style_id = %id, error = %e, "Failed to look up style");
                None
            }
        }
    }

    async fn paint_variables(&self, channel: PaintChannel, value: &Value) -> Option<MetadataEntry> {
        let paints = parse_paints(value)?;

        let lookups = paints.iter().enumerate().filter_map(|(index, paint)| {
            let id = paint.color_variable()?.id.clone();
            Some(async move { (index, self.variable_name(&id).await) })
        });

        let entries: PaintMetadataMap = join_all(lookups)
            .await
            .into_iter()
            .filter_map(|(index, name)| {
                name.map(|name| {
                    (
                        index,
                        PaintMetadata {
                            variable_name: Some(name),
                        },
                    )
                })
            })
            .collect();

        if entries.is_empty() {
            return None;
        }
        Some(MetadataEntry::PaintVariables { channel, entries })
    }

    async fn variable_name(&self, id: &VariableId) -> Option<String> {
        match self.variables.variable_by_id(id).await {
            Ok(variable) => variable.map(|v| v.name),
            Err(e) => {
                warn!(variable_id = %id, error = %e, "Failed to resolve variable");
                None
            }
        }
    }
}
