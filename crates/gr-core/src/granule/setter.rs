//! Granule setter dispatch table.
//!
//! Each [`ValueShape`] has one typed setter that validates a stored value
//! before handing it to the host, so a malformed record fails per granule
//! instead of reaching the host as an arbitrary write.

use serde_json::Value;
use thiserror::Error;

use super::{Granule, ValueShape};
use crate::node::FontName;
use crate::paint::parse_paints;
use crate::ports::{DesignNodePort, NodeWriteError};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApplyError {
    #[error("value for {granule} is not a {expected}")]
    ShapeMismatch { granule: Granule, expected: ValueShape },

    #[error(transparent)]
    Write(#[from] NodeWriteError),
}

pub type Setter = fn(&dyn DesignNodePort, Granule, &Value) -> Result<(), ApplyError>;

/// Setter responsible for `granule`.
pub fn setter_for(granule: Granule) -> Setter {
    match granule.shape() {
        ValueShape::Number => set_number,
        ValueShape::Keyword => set_keyword,
        ValueShape::Text => set_text,
        ValueShape::Paints => set_paints,
        ValueShape::NumberList => set_number_list,
        ValueShape::List => set_list,
        ValueShape::Object => set_object,
        ValueShape::FontName => set_font_name,
    }
}

/// Validates `value` for `granule` and writes it to `node`.
pub fn apply_granule(node: &dyn DesignNodePort, granule: Granule, value: &Value) -> Result<(), ApplyError> {
    setter_for(granule)(node, granule, value)
}

fn mismatch(granule: Granule) -> ApplyError {
    ApplyError::ShapeMismatch {
        granule,
        expected: granule.shape(),
    }
}

fn write(node: &dyn DesignNodePort, granule: Granule, value: &Value) -> Result<(), ApplyError> {
    node.set(granule, value).map_err(ApplyError::from)
}

fn set_number(node: &dyn DesignNodePort, granule: Granule, value: &Value) -> Result<(), ApplyError> {
    match value.as_f64() {
        Some(n) if n.is_finite() => write(node, granule, value),
        _ => Err(mismatch(granule)),
    }
}

fn set_keyword(node: &dyn DesignNodePort, granule: Granule, value: &Value) -> Result<(), ApplyError> {
    match value.as_str() {
        Some(s) if !s.is_empty() => write(node, granule, value),
        _ => Err(mismatch(granule)),
    }
}

fn set_text(node: &dyn DesignNodePort, granule: Granule, value: &Value) -> Result<(), ApplyError> {
    if !value.is_string() {
        return Err(mismatch(granule));
    }
    write(node, granule, value)
}

fn set_paints(node: &dyn DesignNodePort, granule: Granule, value: &Value) -> Result<(), ApplyError> {
    if parse_paints(value).is_none() {
        return Err(mismatch(granule));
    }
    write(node, granule, value)
}

fn set_number_list(node: &dyn DesignNodePort, granule: Granule, value: &Value) -> Result<(), ApplyError> {
    let numeric = value
        .as_array()
        .map_or(false, |items| items.iter().all(Value::is_number));
    if !numeric {
        return Err(mismatch(granule));
    }
    write(node, granule, value)
}

fn set_list(node: &dyn DesignNodePort, granule: Granule, value: &Value) -> Result<(), ApplyError> {
    if !value.is_array() {
        return Err(mismatch(granule));
    }
    write(node, granule, value)
}

fn set_object(node: &dyn DesignNodePort, granule: Granule, value: &Value) -> Result<(), ApplyError> {
    if !value.is_object() {
        return Err(mismatch(granule));
    }
    write(node, granule, value)
}

fn set_font_name(node: &dyn DesignNodePort, granule: Granule, value: &Value) -> Result<(), ApplyError> {
    if serde_json::from_value::<FontName>(value.clone()).is_err() {
        return Err(mismatch(granule));
    }
    write(node, granule, value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::{NodeKind, NodeValue};
    use crate::ports::tests::mock_ports::MockNode;
    use crate::ports::tests::TestNode;
    use serde_json::json;

    #[test]
    fn test_valid_values_are_written() {
        let node = TestNode::new(NodeKind::Text);
        let cases = [
            (Granule::Opacity, json!(0.4)),
            (Granule::StrokeAlign, json!("INSIDE")),
            (Granule::Characters, json!("")),
            (Granule::Fills, json!([{ "type": "SOLID", "color": { "r": 0.1, "g": 0.2, "b": 0.3 } }])),
            (Granule::DashPattern, json!([4, 2])),
            (Granule::Effects, json!([{ "type": "DROP_SHADOW", "radius": 4 }])),
            (Granule::LineHeight, json!({ "unit": "PIXELS", "value": 20 })),
            (Granule::FontName, json!({ "family": "Inter", "style": "Bold" })),
        ];

        for (granule, value) in cases {
            apply_granule(&node, granule, &value).unwrap();
            assert_eq!(node.value(granule), Some(NodeValue::Value(value)));
        }
    }

    #[test]
    fn test_shape_mismatch_is_reported() {
        let node = TestNode::new(NodeKind::Text);
        let cases = [
            (Granule::Opacity, json!("0.4")),
            (Granule::StrokeAlign, json!("")),
            (Granule::Characters, json!(12)),
            (Granule::Fills, json!([{ "type": "NOT_A_PAINT" }])),
            (Granule::DashPattern, json!([4, "2"])),
            (Granule::Effects, json!({})),
            (Granule::LineHeight, json!(20)),
            (Granule::FontName, json!({ "family": "Inter" })),
        ];

        for (granule, value) in cases {
            let err = apply_granule(&node, granule, &value).unwrap_err();
            assert_eq!(
                err,
                ApplyError::ShapeMismatch {
                    granule,
                    expected: granule.shape()
                }
            );
            assert_eq!(node.value(granule), None, "{granule} was written");
        }
    }

    #[test]
    fn test_shape_mismatch_never_reaches_host() {
        let mut node = MockNode::new();
        node.expect_set().times(0);

        let result = apply_granule(&node, Granule::Rotation, &json!(null));
        assert!(matches!(result, Err(ApplyError::ShapeMismatch { .. })));
    }

    #[test]
    fn test_host_rejection_is_propagated() {
        let mut node = MockNode::new();
        node.expect_set()
            .withf(|granule, value| *granule == Granule::Opacity && *value == json!(0.5))
            .times(1)
            .returning(|granule, _| {
                Err(NodeWriteError::Rejected {
                    granule,
                    reason: "locked".into(),
                })
            });

        let err = apply_granule(&node, Granule::Opacity, &json!(0.5)).unwrap_err();
        assert!(matches!(err, ApplyError::Write(NodeWriteError::Rejected { .. })));
        assert_eq!(err.to_string(), "host rejected opacity: locked");
    }

    #[test]
    fn test_every_granule_setter_rejects_the_wrong_shape() {
        let node = TestNode::new(NodeKind::Frame);
        for granule in Granule::ALL.iter().copied() {
            let wrong = match granule.shape() {
                ValueShape::Number => json!("12"),
                ValueShape::Keyword | ValueShape::Text => json!(12),
                ValueShape::Paints => json!({ "type": "SOLID" }),
                ValueShape::NumberList => json!(["4", "2"]),
                ValueShape::List => json!({}),
                ValueShape::Object => json!([]),
                ValueShape::FontName => json!("Inter"),
            };

            assert_eq!(
                setter_for(granule)(&node, granule, &wrong),
                Err(ApplyError::ShapeMismatch {
                    granule,
                    expected: granule.shape(),
                }),
                "{granule} accepted {wrong}"
            );
            assert_eq!(node.value(granule), None);
        }
    }
}
