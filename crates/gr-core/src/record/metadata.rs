use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::granule::Granule;

/// Which style-id granule a style name belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleSlot {
    Text,
    Fill,
    Stroke,
    Effect,
}

impl StyleSlot {
    pub fn from_granule(granule: Granule) -> Option<Self> {
        match granule {
            Granule::TextStyleId => Some(StyleSlot::Text),
            Granule::FillStyleId => Some(StyleSlot::Fill),
            Granule::StrokeStyleId => Some(StyleSlot::Stroke),
            Granule::EffectStyleId => Some(StyleSlot::Effect),
            _ => None,
        }
    }

    /// Record key the resolved name is stored under.
    pub fn name_key(self) -> &'static str {
        match self {
            StyleSlot::Text => "textStyleName",
            StyleSlot::Fill => "fillStyleName",
            StyleSlot::Stroke => "strokeStyleName",
            StyleSlot::Effect => "effectStyleName",
        }
    }
}

/// Which paint array a metadata map describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaintChannel {
    Fill,
    Stroke,
}

impl PaintChannel {
    pub fn from_granule(granule: Granule) -> Option<Self> {
        match granule {
            Granule::Fills => Some(PaintChannel::Fill),
            Granule::Strokes => Some(PaintChannel::Stroke),
            _ => None,
        }
    }

    pub fn metadata_key(self) -> &'static str {
        match self {
            PaintChannel::Fill => "fillMetadata",
            PaintChannel::Stroke => "strokeMetadata",
        }
    }
}

/// Side-channel data for one paint of a fills/strokes array.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaintMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variable_name: Option<String>,
}

/// Paint index -> metadata.
pub type PaintMetadataMap = BTreeMap<usize, PaintMetadata>;

/// Extra record entry produced by enrichment.
#[derive(Debug, Clone, PartialEq)]
pub enum MetadataEntry {
    StyleName { slot: StyleSlot, name: String },
    PaintVariables { channel: PaintChannel, entries: PaintMetadataMap },
}

impl MetadataEntry {
    pub fn key(&self) -> &'static str {
        match self {
            MetadataEntry::StyleName { slot, .. } => slot.name_key(),
            MetadataEntry::PaintVariables { channel, .. } => channel.metadata_key(),
        }
    }
}
