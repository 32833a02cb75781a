//! ID type wrappers for type safety.

mod id_macro;

use serde::{Deserialize, Serialize};

use id_macro::impl_id;

/// Host-assigned node identifier (e.g. `"12:34"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(String);

/// Identifier of a shared style in the host's style registry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct StyleId(String);

/// Identifier of a design variable in the host's variable registry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct VariableId(String);

impl_id!(NodeId, StyleId, VariableId);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_serialize_as_plain_strings() {
        let id = NodeId::from("12:34");
        assert_eq!(serde_json::to_value(&id).unwrap(), serde_json::json!("12:34"));

        let style: StyleId = serde_json::from_value(serde_json::json!("S:abc,")).unwrap();
        assert_eq!(style.as_str(), "S:abc,");
    }

    #[test]
    fn test_generated_ids_are_unique_and_non_empty() {
        let a = VariableId::new();
        let b = VariableId::new();
        assert_ne!(a, b);
        assert!(!a.is_empty());
        assert!(StyleId::from("").is_empty());
    }
}
