use bitflags::bitflags;
use serde::{Deserialize, Serialize};

use crate::granule::Granule;

bitflags! {
    /// Property groups a node kind exposes.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Capabilities: u32 {
        /// opacity, blendMode, effects, effectStyleId
        const BLEND = 1 << 0;
        /// fills, strokes and stroke sub-properties, fill/stroke style ids
        const GEOMETRY = 1 << 1;
        /// cornerRadius
        const CORNER = 1 << 2;
        /// topLeftRadius .. bottomRightRadius
        const RECTANGLE_CORNERS = 1 << 3;
        const VECTOR_NETWORK = 1 << 4;
        /// layoutMode, paddings, spacing, sizing and alignment of children
        const AUTO_LAYOUT = 1 << 5;
        /// layoutAlign, layoutGrow
        const LAYOUT_CHILD = 1 << 6;
        const TEXT = 1 << 7;
        const EXPORT = 1 << 8;
        const CONSTRAINTS = 1 << 9;
        /// x, y, width, height, rotation
        const DIMENSION = 1 << 10;
        const RESIZE = 1 << 11;
        const LAYOUT_GRIDS = 1 << 12;
    }
}

/// Node kinds of the host scene graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NodeKind {
    Document,
    Page,
    Frame,
    Group,
    Component,
    ComponentSet,
    Instance,
    Section,
    Rectangle,
    Ellipse,
    Polygon,
    Star,
    Line,
    Vector,
    BooleanOperation,
    Text,
    Slice,
}

impl NodeKind {
    pub fn capabilities(self) -> Capabilities {
        type C = Capabilities;
        let shape = C::BLEND | C::GEOMETRY | C::LAYOUT_CHILD | C::EXPORT | C::DIMENSION;
        match self {
            NodeKind::Document | NodeKind::Page => C::empty(),
            NodeKind::Frame | NodeKind::Component | NodeKind::ComponentSet | NodeKind::Instance => {
                shape
                    | C::CORNER
                    | C::RECTANGLE_CORNERS
                    | C::AUTO_LAYOUT
                    | C::CONSTRAINTS
                    | C::RESIZE
                    | C::LAYOUT_GRIDS
            }
            NodeKind::Group => C::BLEND | C::LAYOUT_CHILD | C::EXPORT | C::DIMENSION | C::RESIZE,
            NodeKind::Section => C::GEOMETRY | C::DIMENSION | C::RESIZE,
            NodeKind::Rectangle => {
                shape | C::CORNER | C::RECTANGLE_CORNERS | C::CONSTRAINTS | C::RESIZE
            }
            NodeKind::Ellipse | NodeKind::Polygon | NodeKind::Star => {
                shape | C::CORNER | C::CONSTRAINTS | C::RESIZE
            }
            NodeKind::Line => shape | C::CONSTRAINTS | C::RESIZE,
            NodeKind::Vector => {
                shape | C::CORNER | C::VECTOR_NETWORK | C::CONSTRAINTS | C::RESIZE
            }
            NodeKind::BooleanOperation => shape | C::CORNER,
            NodeKind::Text => shape | C::TEXT | C::CONSTRAINTS | C::RESIZE,
            NodeKind::Slice => C::EXPORT | C::CONSTRAINTS | C::DIMENSION | C::RESIZE,
        }
    }

    /// Whether nodes of this kind expose `granule`.
    pub fn supports(self, granule: Granule) -> bool {
        self.capabilities().contains(granule.required_capability())
    }

    /// Granules nodes of this kind expose, in canonical order.
    pub fn supported_granules(self) -> Vec<Granule> {
        Granule::ALL
            .iter()
            .copied()
            .filter(|granule| self.supports(*granule))
            .collect()
    }

    /// Containers where the ancestor walk stops.
    pub fn is_root_like(self) -> bool {
        matches!(self, NodeKind::Document | NodeKind::Page)
    }

    /// Kinds whose properties can differ per character range.
    pub fn is_ranged_text(self) -> bool {
        matches!(self, NodeKind::Text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rectangle_exposes_individual_corners_but_vector_does_not() {
        assert!(NodeKind::Rectangle.supports(Granule::TopLeftRadius));
        assert!(NodeKind::Rectangle.supports(Granule::CornerRadius));
        assert!(!NodeKind::Vector.supports(Granule::TopLeftRadius));
        assert!(NodeKind::Vector.supports(Granule::CornerRadius));
        assert!(NodeKind::Vector.capabilities().contains(Capabilities::VECTOR_NETWORK));
    }

    #[test]
    fn test_text_properties_only_on_text_nodes() {
        for kind in [NodeKind::Frame, NodeKind::Rectangle, NodeKind::Group] {
            assert!(!kind.supports(Granule::FontSize), "{kind:?}");
        }
        assert!(NodeKind::Text.supports(Granule::FontSize));
        assert!(NodeKind::Text.supports(Granule::Fills));
    }

    #[test]
    fn test_auto_layout_granules_only_on_frame_like_kinds() {
        assert!(NodeKind::Frame.supports(Granule::PrimaryAxisSizingMode));
        assert!(NodeKind::Instance.supports(Granule::LayoutWrap));
        assert!(!NodeKind::Rectangle.supports(Granule::LayoutMode));
    }

    #[test]
    fn test_pages_expose_nothing() {
        assert!(NodeKind::Page.supported_granules().is_empty());
        assert!(NodeKind::Page.is_root_like());
        assert!(!NodeKind::Frame.is_root_like());
    }

    #[test]
    fn test_group_has_no_fills() {
        assert!(!NodeKind::Group.supports(Granule::Fills));
        assert!(NodeKind::Group.supports(Granule::Opacity));
    }

    #[test]
    fn test_kind_serializes_like_host_type_tag() {
        assert_eq!(
            serde_json::to_value(NodeKind::BooleanOperation).unwrap(),
            serde_json::json!("BOOLEAN_OPERATION")
        );
    }
}
