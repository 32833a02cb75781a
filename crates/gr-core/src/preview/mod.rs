//! Preview math for the copy panel: raster scale selection and the
//! light/dark hint used to pick a contrasting checkerboard.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::paint::{parse_paints, Paint};

/// Export scales tried from largest to smallest.
pub const PREVIEW_SCALE_LADDER: [f64; 6] = [2.0, 1.5, 1.0, 0.5, 0.25, 0.1];

/// Luminance at or below which a fill counts as dark.
const DARK_LUMINANCE_THRESHOLD: f64 = 0.5;

/// Persistence key of the last known panel size.
pub const PANEL_SIZE_STORAGE_KEY: &str = "plugin_window_size";

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PanelSize {
    pub width: f64,
    pub height: f64,
}

/// Pixel box the preview should fit into.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PreviewTarget {
    pub width: f64,
    pub height: f64,
    pub max_scale: f64,
}

impl PreviewTarget {
    /// Target for a panel of `panel_width` logical pixels (rendered at 2x).
    pub fn for_panel(panel_width: f64, target_height: f64, max_scale: f64) -> Self {
        Self {
            width: panel_width * 2.0,
            height: target_height,
            max_scale,
        }
    }
}

/// Picks the export scale for a node of the given size.
///
/// The limit is `min(max_scale, width / node_width, height / node_height)`.
/// A node dimension that is missing or not positive does not constrain it.
/// Returns the largest ladder entry not above the limit, or the raw limit
/// when even the smallest entry is too large.
pub fn preview_scale(node_width: Option<f64>, node_height: Option<f64>, target: PreviewTarget) -> f64 {
    let mut limit = target.max_scale;
    if let Some(w) = node_width.filter(|w| *w > 0.0) {
        limit = limit.min(target.width / w);
    }
    if let Some(h) = node_height.filter(|h| *h > 0.0) {
        limit = limit.min(target.height / h);
    }

    PREVIEW_SCALE_LADDER
        .iter()
        .copied()
        .find(|scale| *scale <= limit)
        .unwrap_or(limit)
}

/// Contrast hint stored next to the preview.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PreviewLabel {
    #[default]
    Light,
    Dark,
}

impl PreviewLabel {
    /// Label from the first visible paint. Only a solid paint can be dark.
    pub fn from_fills(fills: &[Paint]) -> Self {
        let top = fills.iter().find(|paint| paint.is_visible());
        match top.and_then(Paint::solid_color) {
            Some(color) if color.luminance() <= DARK_LUMINANCE_THRESHOLD => PreviewLabel::Dark,
            _ => PreviewLabel::Light,
        }
    }

    /// Label from a raw `fills` value; anything that is not a paint array is light.
    pub fn from_raw_fills(fills: Option<&Value>) -> Self {
        fills
            .and_then(parse_paints)
            .map_or(PreviewLabel::Light, |paints| PreviewLabel::from_fills(&paints))
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PreviewLabel::Light => "light",
            PreviewLabel::Dark => "dark",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn panel(width: f64) -> PreviewTarget {
        PreviewTarget::for_panel(width, 240.0, 2.0)
    }

    #[test]
    fn test_small_node_caps_at_max_scale() {
        assert_eq!(preview_scale(Some(100.0), None, panel(300.0)), 2.0);
        assert_eq!(preview_scale(Some(10.0), Some(10.0), panel(320.0)), 2.0);
    }

    #[test]
    fn test_huge_node_falls_back_to_raw_limit() {
        let scale = preview_scale(Some(10000.0), Some(10000.0), panel(320.0));
        assert!((scale - 0.024).abs() < 1e-9, "{scale}");
    }

    #[test]
    fn test_exact_ladder_hit() {
        assert_eq!(preview_scale(Some(6400.0), None, panel(320.0)), 0.1);
        assert_eq!(preview_scale(Some(640.0), Some(240.0), panel(320.0)), 1.0);
    }

    #[test]
    fn test_picks_largest_entry_below_limit() {
        // 640 / 500 = 1.28
        assert_eq!(preview_scale(Some(500.0), None, panel(320.0)), 1.0);
        // 240 / 200 = 1.2, height dominates
        assert_eq!(preview_scale(Some(10.0), Some(200.0), panel(320.0)), 1.0);
    }

    #[test]
    fn test_non_positive_dimensions_are_ignored() {
        assert_eq!(preview_scale(Some(0.0), Some(-5.0), panel(320.0)), 2.0);
        assert_eq!(preview_scale(None, None, panel(320.0)), 2.0);
    }

    #[test]
    fn test_label_threshold_is_inclusive() {
        let grey = json!([{ "type": "SOLID", "color": { "r": 0.5, "g": 0.5, "b": 0.5 } }]);
        assert_eq!(PreviewLabel::from_raw_fills(Some(&grey)), PreviewLabel::Dark);

        let white = json!([{ "type": "SOLID", "color": { "r": 1.0, "g": 1.0, "b": 1.0 } }]);
        assert_eq!(PreviewLabel::from_raw_fills(Some(&white)), PreviewLabel::Light);
    }

    #[test]
    fn test_label_uses_first_visible_paint() {
        let fills = json!([
            { "type": "SOLID", "color": { "r": 1.0, "g": 1.0, "b": 1.0 }, "visible": false },
            { "type": "SOLID", "color": { "r": 0.0, "g": 0.0, "b": 0.0 } }
        ]);
        assert_eq!(PreviewLabel::from_raw_fills(Some(&fills)), PreviewLabel::Dark);
    }

    #[test]
    fn test_label_defaults_to_light() {
        let gradient = json!([
            { "type": "GRADIENT_LINEAR", "gradientStops": [] },
            { "type": "SOLID", "color": { "r": 0.0, "g": 0.0, "b": 0.0 } }
        ]);
        assert_eq!(PreviewLabel::from_raw_fills(Some(&gradient)), PreviewLabel::Light);
        assert_eq!(PreviewLabel::from_raw_fills(Some(&json!([]))), PreviewLabel::Light);
        assert_eq!(PreviewLabel::from_raw_fills(None), PreviewLabel::Light);
        assert_eq!(PreviewLabel::Dark.as_str(), "dark");
    }
}
