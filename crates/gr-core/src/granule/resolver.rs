//! Mixed-value resolution.
//!
//! A node reports [`NodeValue::Mixed`](crate::node::NodeValue::Mixed) when a
//! property differs across its sub-ranges. The resolver picks a single
//! representative value where a rule exists, otherwise the granule is left
//! out of the extraction.

use serde_json::Value;
use tracing::debug;

use super::Granule;
use crate::node::Capabilities;
use crate::ports::DesignNodePort;

/// Resolves a mixed `granule` on `node` to one value, or `None` when no rule applies.
///
/// - Text nodes: the value of the first character, for range-sampled
///   granules. Empty text has no range and does not resolve.
/// - `cornerRadius` on a vector network: the first vertex's radius.
///   Kinds with per-corner radii are never resolved; their corners are
///   copied individually.
pub fn resolve_mixed(node: &dyn DesignNodePort, granule: Granule) -> Option<Value> {
    let kind = node.kind();

    if kind.is_ranged_text() && granule.is_range_sampled() {
        let has_text = node
            .get(Granule::Characters)
            .and_then(|value| value.into_value())
            .and_then(|value| value.as_str().map(|text| !text.is_empty()))
            .unwrap_or(false);
        if !has_text {
            debug!(granule = %granule, "mixed text value on empty text, omitting");
            return None;
        }
        return node.sample_text_range(granule, 0, 1);
    }

    if granule == Granule::CornerRadius {
        if node.has(Granule::TopLeftRadius) {
            debug!("mixed cornerRadius on node with individual corners, omitting");
            return None;
        }
        if kind.capabilities().contains(Capabilities::VECTOR_NETWORK) {
            return node
                .vector_vertices()
                .and_then(|vertices| vertices.first().and_then(|v| v.corner_radius))
                .map(Value::from);
        }
    }

    debug!(granule = %granule, kind = ?kind, "no rule for mixed value");
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::{NodeKind, VectorVertex};
    use crate::ports::tests::TestNode;
    use serde_json::json;

    fn vertex(radius: Option<f64>) -> VectorVertex {
        VectorVertex {
            x: 0.0,
            y: 0.0,
            corner_radius: radius,
        }
    }

    #[test]
    fn test_text_samples_first_character() {
        let node = TestNode::new(NodeKind::Text)
            .with(Granule::Characters, json!("Hello"))
            .with_mixed(Granule::FontSize)
            .with_range(Granule::FontSize, json!(12));

        assert_eq!(resolve_mixed(&node, Granule::FontSize), Some(json!(12)));
    }

    #[test]
    fn test_empty_text_is_unresolvable() {
        let node = TestNode::new(NodeKind::Text)
            .with(Granule::Characters, json!(""))
            .with_range(Granule::FontSize, json!(12));

        assert_eq!(resolve_mixed(&node, Granule::FontSize), None);
    }

    #[test]
    fn test_text_granule_outside_sampled_set_is_unresolvable() {
        let node = TestNode::new(NodeKind::Text)
            .with(Granule::Characters, json!("Hello"))
            .with_range(Granule::Opacity, json!(0.5));

        assert_eq!(resolve_mixed(&node, Granule::Opacity), None);
    }

    #[test]
    fn test_vector_corner_radius_from_first_vertex() {
        let node = TestNode::new(NodeKind::Vector)
            .with_vertices(vec![vertex(Some(8.0)), vertex(Some(2.0))]);
        assert_eq!(resolve_mixed(&node, Granule::CornerRadius), Some(json!(8.0)));

        let empty = TestNode::new(NodeKind::Vector).with_vertices(vec![]);
        assert_eq!(resolve_mixed(&empty, Granule::CornerRadius), None);

        let no_radius = TestNode::new(NodeKind::Vector).with_vertices(vec![vertex(None)]);
        assert_eq!(resolve_mixed(&no_radius, Granule::CornerRadius), None);
    }

    #[test]
    fn test_rectangle_corner_radius_is_never_resolved() {
        let node = TestNode::new(NodeKind::Rectangle).with_vertices(vec![vertex(Some(4.0))]);
        assert_eq!(resolve_mixed(&node, Granule::CornerRadius), None);
    }

    #[test]
    fn test_other_combinations_are_unresolvable() {
        let node = TestNode::new(NodeKind::Frame);
        assert_eq!(resolve_mixed(&node, Granule::Fills), None);
        assert_eq!(resolve_mixed(&node, Granule::CornerRadius), None);
    }
}
