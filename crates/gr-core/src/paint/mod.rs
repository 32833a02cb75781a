//! Typed view over host paint arrays (fills / strokes).
//!
//! Records keep the host's raw JSON so paste writes back exactly what was
//! read. These types are parsed from that JSON when the engine needs to
//! reason about a paint: bound variables, visibility, solid color.
//!
//! Index 0 of a paint array is the topmost paint.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::ids::VariableId;

/// Alias type tag the host uses for variable bindings.
pub const VARIABLE_ALIAS: &str = "VARIABLE_ALIAS";

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub a: Option<f64>,
}

impl Color {
    pub fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b, a: None }
    }

    /// Relative luminance, `0.2126 r + 0.7152 g + 0.0722 b`.
    pub fn luminance(&self) -> f64 {
        0.2126 * self.r + 0.7152 * self.g + 0.0722 * self.b
    }
}

/// Reference from a paint channel to an external design variable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariableAlias {
    #[serde(rename = "type")]
    pub alias_type: String,
    pub id: VariableId,
}

impl VariableAlias {
    pub fn new(id: impl Into<VariableId>) -> Self {
        Self {
            alias_type: VARIABLE_ALIAS.to_string(),
            id: id.into(),
        }
    }

    pub fn is_variable_alias(&self) -> bool {
        self.alias_type == VARIABLE_ALIAS
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PaintBoundVariables {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<VariableAlias>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SolidPaint {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visible: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bound_variables: Option<PaintBoundVariables>,
}

impl SolidPaint {
    pub fn new(color: Color) -> Self {
        Self {
            color: Some(color),
            opacity: None,
            visible: None,
            bound_variables: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorStop {
    pub position: f64,
    pub color: Color,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GradientPaint {
    #[serde(default)]
    pub gradient_stops: Vec<ColorStop>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gradient_transform: Option<[[f64; 3]; 2]>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visible: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImagePaint {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_hash: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scale_mode: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visible: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoPaint {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_hash: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visible: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatternPaint {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_node_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visible: Option<bool>,
}

/// A fill or stroke source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Paint {
    Solid(SolidPaint),
    GradientLinear(GradientPaint),
    GradientRadial(GradientPaint),
    GradientAngular(GradientPaint),
    GradientDiamond(GradientPaint),
    Image(ImagePaint),
    Video(VideoPaint),
    Pattern(PatternPaint),
}

impl Paint {
    /// Paints are visible unless the host explicitly says `visible: false`.
    pub fn is_visible(&self) -> bool {
        let visible = match self {
            Paint::Solid(p) => p.visible,
            Paint::GradientLinear(p)
            | Paint::GradientRadial(p)
            | Paint::GradientAngular(p)
            | Paint::GradientDiamond(p) => p.visible,
            Paint::Image(p) => p.visible,
            Paint::Video(p) => p.visible,
            Paint::Pattern(p) => p.visible,
        };
        visible != Some(false)
    }

    /// Variable bound to the paint's color channel, if any.
    pub fn color_variable(&self) -> Option<&VariableAlias> {
        match self {
            Paint::Solid(p) => p
                .bound_variables
                .as_ref()
                .and_then(|bound| bound.color.as_ref())
                .filter(|alias| alias.is_variable_alias()),
            _ => None,
        }
    }

    pub fn solid_color(&self) -> Option<&Color> {
        match self {
            Paint::Solid(p) => p.color.as_ref(),
            _ => None,
        }
    }
}

/// Parses a raw paint array. Returns `None` when the value is not a paint array.
pub fn parse_paints(value: &Value) -> Option<Vec<Paint>> {
    serde_json::from_value(value.clone()).ok()
}
