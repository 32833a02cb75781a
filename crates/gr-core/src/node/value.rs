use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A property value as reported by the host.
///
/// `Mixed` means the property differs across the node's sub-ranges. It only
/// exists on the read side; records store plain [`Value`]s, so a mixed value
/// cannot be persisted.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeValue {
    Mixed,
    Value(Value),
}

impl NodeValue {
    pub fn is_mixed(&self) -> bool {
        matches!(self, NodeValue::Mixed)
    }

    pub fn as_value(&self) -> Option<&Value> {
        match self {
            NodeValue::Value(value) => Some(value),
            NodeValue::Mixed => None,
        }
    }

    pub fn into_value(self) -> Option<Value> {
        match self {
            NodeValue::Value(value) => Some(value),
            NodeValue::Mixed => None,
        }
    }
}

impl From<Value> for NodeValue {
    fn from(value: Value) -> Self {
        NodeValue::Value(value)
    }
}

/// One vertex of a vector network.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VectorVertex {
    pub x: f64,
    pub y: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub corner_radius: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FontName {
    pub family: String,
    pub style: String,
}

impl FontName {
    pub fn new(family: impl Into<String>, style: impl Into<String>) -> Self {
        Self {
            family: family.into(),
            style: style.into(),
        }
    }
}

impl std::fmt::Display for FontName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.family, self.style)
    }
}

/// Layout mode of a frame-like node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LayoutMode {
    None,
    Horizontal,
    Vertical,
    Grid,
    #[serde(other)]
    Other,
}

impl LayoutMode {
    pub fn is_auto_layout(self) -> bool {
        !matches!(self, LayoutMode::None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_mixed_has_no_value() {
        assert!(NodeValue::Mixed.is_mixed());
        assert_eq!(NodeValue::Mixed.into_value(), None);
        assert_eq!(NodeValue::from(json!(3)).into_value(), Some(json!(3)));
    }

    #[test]
    fn test_layout_mode_parsing() {
        let none: LayoutMode = serde_json::from_value(json!("NONE")).unwrap();
        assert!(!none.is_auto_layout());
        let horizontal: LayoutMode = serde_json::from_value(json!("HORIZONTAL")).unwrap();
        assert!(horizontal.is_auto_layout());
        let future: LayoutMode = serde_json::from_value(json!("MASONRY")).unwrap();
        assert_eq!(future, LayoutMode::Other);
    }

    #[test]
    fn test_font_name_shape() {
        let font: FontName =
            serde_json::from_value(json!({ "family": "Inter", "style": "Bold" })).unwrap();
        assert_eq!(font, FontName::new("Inter", "Bold"));
        assert_eq!(font.to_string(), "Inter Bold");
    }
}
