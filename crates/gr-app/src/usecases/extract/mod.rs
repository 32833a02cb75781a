//! Granule extraction
//! 属性提取

mod enricher;

use std::collections::HashSet;
use std::sync::Arc;

use futures::future::join_all;
use gr_core::granule::{resolve_mixed, Granule};
use gr_core::node::NodeValue;
use gr_core::ports::{DesignNodePort, StyleRegistryPort, VariableRegistryPort};
use gr_core::record::{ExtractedProperties, MetadataEntry};
use serde_json::Value;
use tracing::{debug, info_span, Instrument};

pub use enricher::MetadataEnricher;

/// Reads a set of granules from one node.
///
/// # Behavior / 行为
/// - Granules the node does not expose are omitted
/// - Mixed values go through the resolver; unresolvable ones are omitted
/// - Style ids and paint arrays are enriched with names
///
/// Every granule is read and enriched concurrently. Extraction never fails;
/// it degrades by omission.
/// 提取永不失败，只会省略无法读取的属性。
pub struct ExtractProperties {
    enricher: MetadataEnricher,
}

struct GranuleReading {
    granule: Granule,
    value: Value,
    metadata: Vec<MetadataEntry>,
}

impl ExtractProperties {
    pub fn new(styles: Arc<dyn StyleRegistryPort>, variables: Arc<dyn VariableRegistryPort>) -> Self {
        Self {
            enricher: MetadataEnricher::new(styles, variables),
        }
    }

    /// Extracts `granules` from `node`. Duplicates are read once.
    pub async fn execute(&self, node: &dyn DesignNodePort, granules: &[Granule]) -> ExtractedProperties {
        let span = info_span!(
            "usecase.extract_properties.execute",
            node = %node.id(),
            requested = granules.len(),
        );

        async {
            let mut seen = HashSet::new();
            let unique: Vec<Granule> = granules
                .iter()
                .copied()
                .filter(|granule| seen.insert(*granule))
                .collect();

            let readings = join_all(unique.into_iter().map(|granule| self.read_granule(node, granule))).await;

            let mut extracted = ExtractedProperties::default();
            for reading in readings.into_iter().flatten() {
                extracted.properties.insert(reading.granule, reading.value);
                extracted.metadata.extend(reading.metadata);
            }

            debug!(
                extracted = extracted.properties.len(),
                metadata = extracted.metadata.len(),
                "Extraction finished"
            );
            extracted
        }
        .instrument(span)
        .await
    }

    async fn read_granule(&self, node: &dyn DesignNodePort, granule: Granule) -> Option<GranuleReading> {
        if !node.has(granule) {
            return None;
        }

        let value = match node.get(granule)? {
            NodeValue::Value(value) => value,
            NodeValue::Mixed => {
                let resolved = resolve_mixed(node, granule);
                if resolved.is_none() {
                    debug!(granule = %granule, "Mixed value unresolved, omitting");
                }
                resolved?
            }
        };

        let metadata = self.enricher.enrich(granule, &value).await;
        Some(GranuleReading {
            granule,
            value,
            metadata,
        })
    }
}
