//! Property record: the snapshot a copy produces and a paste consumes.

mod ancestor;
mod metadata;

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::granule::Granule;
use crate::ids::NodeId;
use crate::node::FontName;
use crate::paint::{parse_paints, Paint};
use crate::preview::PreviewLabel;

pub use ancestor::{ancestors_of, AncestorEntry};
pub use metadata::{MetadataEntry, PaintChannel, PaintMetadata, PaintMetadataMap, StyleSlot};

/// Persistence key of the single stored record.
pub const RECORD_STORAGE_KEY: &str = "granular_copy_data";

/// Output of the extraction engine before identity and preview are attached.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExtractedProperties {
    pub properties: BTreeMap<Granule, Value>,
    pub metadata: Vec<MetadataEntry>,
}

impl ExtractedProperties {
    pub fn get(&self, granule: Granule) -> Option<&Value> {
        self.properties.get(&granule)
    }

    pub fn metadata_for(&self, key: &str) -> Option<&MetadataEntry> {
        self.metadata.iter().find(|entry| entry.key() == key)
    }
}

/// The copied snapshot.
///
/// Serializes as one flat object: granule keys next to `name`, `id`,
/// `ancestors`, `preview`, `previewLabel` and the metadata keys
/// (`textStyleName`, `fillMetadata`, ...). None of the non-granule keys is a
/// granule name, so the namespace is collision free.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyRecord {
    pub id: NodeId,
    pub name: String,
    #[serde(default)]
    pub ancestors: Vec<AncestorEntry>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preview: Option<Vec<u8>>,
    #[serde(default)]
    pub preview_label: PreviewLabel,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_style_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill_style_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stroke_style_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub effect_style_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill_metadata: Option<PaintMetadataMap>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stroke_metadata: Option<PaintMetadataMap>,

    #[serde(flatten, deserialize_with = "known_granules")]
    pub properties: BTreeMap<Granule, Value>,
}

/// Keeps the granule keys of a stored record. Keys no granule claims, such as
/// ones written by other plugin versions, are dropped.
fn known_granules<'de, D>(deserializer: D) -> Result<BTreeMap<Granule, Value>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = BTreeMap::<String, Value>::deserialize(deserializer)?;
    Ok(raw
        .into_iter()
        .filter_map(|(key, value)| key.parse::<Granule>().ok().map(|granule| (granule, value)))
        .collect())
}

impl PropertyRecord {
    pub fn new(id: NodeId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            ancestors: Vec::new(),
            preview: None,
            preview_label: PreviewLabel::default(),
            text_style_name: None,
            fill_style_name: None,
            stroke_style_name: None,
            effect_style_name: None,
            fill_metadata: None,
            stroke_metadata: None,
            properties: BTreeMap::new(),
        }
    }

    /// Builds a record from an extraction, merging its metadata side channels.
    pub fn from_extraction(id: NodeId, name: impl Into<String>, extracted: ExtractedProperties) -> Self {
        let mut record = Self::new(id, name);
        record.properties = extracted.properties;
        for entry in extracted.metadata {
            record.merge_metadata(entry);
        }
        record
    }

    pub fn merge_metadata(&mut self, entry: MetadataEntry) {
        match entry {
            MetadataEntry::StyleName { slot, name } => {
                *self.style_name_slot(slot) = Some(name);
            }
            MetadataEntry::PaintVariables { channel, entries } => {
                if entries.is_empty() {
                    return;
                }
                match channel {
                    PaintChannel::Fill => self.fill_metadata = Some(entries),
                    PaintChannel::Stroke => self.stroke_metadata = Some(entries),
                }
            }
        }
    }

    fn style_name_slot(&mut self, slot: StyleSlot) -> &mut Option<String> {
        match slot {
            StyleSlot::Text => &mut self.text_style_name,
            StyleSlot::Fill => &mut self.fill_style_name,
            StyleSlot::Stroke => &mut self.stroke_style_name,
            StyleSlot::Effect => &mut self.effect_style_name,
        }
    }

    pub fn style_name(&self, slot: StyleSlot) -> Option<&str> {
        match slot {
            StyleSlot::Text => self.text_style_name.as_deref(),
            StyleSlot::Fill => self.fill_style_name.as_deref(),
            StyleSlot::Stroke => self.stroke_style_name.as_deref(),
            StyleSlot::Effect => self.effect_style_name.as_deref(),
        }
    }

    pub fn paint_metadata(&self, channel: PaintChannel) -> Option<&PaintMetadataMap> {
        match channel {
            PaintChannel::Fill => self.fill_metadata.as_ref(),
            PaintChannel::Stroke => self.stroke_metadata.as_ref(),
        }
    }

    pub fn get(&self, granule: Granule) -> Option<&Value> {
        self.properties.get(&granule)
    }

    pub fn has(&self, granule: Granule) -> bool {
        self.properties.contains_key(&granule)
    }

    pub fn number(&self, granule: Granule) -> Option<f64> {
        self.get(granule).and_then(Value::as_f64)
    }

    pub fn font_name(&self) -> Option<FontName> {
        self.get(Granule::FontName)
            .and_then(|value| serde_json::from_value(value.clone()).ok())
    }

    pub fn fills(&self) -> Option<Vec<Paint>> {
        self.get(Granule::Fills).and_then(parse_paints)
    }

    /// Whether the record carries auto-layout sizing modes.
    pub fn has_sizing_modes(&self) -> bool {
        self.has(Granule::PrimaryAxisSizingMode) || self.has(Granule::CounterAxisSizingMode)
    }
}
