//! User notification port
//!
//! `notify` shows a short toast. `post_ui_message` pushes structured data to
//! the panel; it is best effort and callers ignore its failures.

use anyhow::Result;
use async_trait::async_trait;
use serde::Serialize;

use crate::granule::Granule;
use crate::record::PropertyRecord;

/// Messages pushed to the panel UI.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum UiMessage {
    /// A copy finished and produced `data`.
    CopyCompleted { data: Box<PropertyRecord> },
    /// Current stored record, or `None` when nothing was copied yet.
    DataUpdate { data: Option<Box<PropertyRecord>> },
    /// Selection changed.
    #[serde(rename_all = "camelCase")]
    SelectionUpdate {
        count: usize,
        supported_granules: Vec<Granule>,
    },
}

#[async_trait]
pub trait NotifierPort: Send + Sync {
    fn notify(&self, message: &str);

    async fn post_ui_message(&self, message: UiMessage) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::NodeId;
    use serde_json::json;

    #[test]
    fn test_ui_messages_are_type_tagged() {
        let message = UiMessage::SelectionUpdate {
            count: 2,
            supported_granules: vec![Granule::Opacity],
        };
        assert_eq!(
            serde_json::to_value(message).unwrap(),
            json!({ "type": "selection-update", "count": 2, "supportedGranules": ["opacity"] })
        );

        let copied = UiMessage::CopyCompleted {
            data: Box::new(PropertyRecord::new(NodeId::from("1:2"), "Card")),
        };
        let value = serde_json::to_value(copied).unwrap();
        assert_eq!(value["type"], json!("copy-completed"));
        assert_eq!(value["data"]["name"], json!("Card"));
    }
}
