mod common;

use std::sync::Arc;

use common::{record_with, Harness};
use gr_core::granule::Granule;
use gr_core::node::NodeKind;
use gr_core::ports::{DesignNodePort, UiMessage};
use gr_infra::document::MemoryNode;
use serde_json::json;

#[test]
fn test_supported_granules_are_the_union_over_the_selection() {
    let harness = Harness::new();
    let group: Arc<dyn DesignNodePort> = Arc::new(MemoryNode::new(NodeKind::Group, "Group"));
    let text: Arc<dyn DesignNodePort> = Arc::new(MemoryNode::new(NodeKind::Text, "Label"));

    harness.select(&[group.clone()]);
    let group_only = harness.usecases().list_supported_granules().execute();
    assert!(group_only.contains(&Granule::Opacity));
    assert!(!group_only.contains(&Granule::Fills));

    harness.select(&[group, text]);
    let union = harness.usecases().list_supported_granules().execute();
    assert!(union.contains(&Granule::Fills));
    assert!(union.contains(&Granule::FontName));
    assert!(!union.contains(&Granule::LayoutMode));

    let mut sorted = union.clone();
    sorted.sort();
    assert_eq!(union, sorted);
}

#[test]
fn test_empty_selection_supports_nothing() {
    let harness = Harness::new();
    assert!(harness.usecases().list_supported_granules().execute().is_empty());
}

#[tokio::test]
async fn test_panel_open_posts_record_then_selection() {
    let harness = Harness::new();
    let record = record_with(&[(Granule::Opacity, json!(0.5))]);
    harness.store_record(&record).await;
    let rect: Arc<dyn DesignNodePort> = Arc::new(MemoryNode::new(NodeKind::Rectangle, "Rect"));
    harness.select(&[rect]);

    harness.usecases().publish_panel_state().execute().await;

    assert_eq!(
        harness.notifier.ui_messages(),
        vec![
            UiMessage::DataUpdate {
                data: Some(Box::new(record)),
            },
            UiMessage::SelectionUpdate {
                count: 1,
                supported_granules: NodeKind::Rectangle.supported_granules(),
            },
        ]
    );
}

#[tokio::test]
async fn test_panel_open_without_record_posts_empty_data() {
    let harness = Harness::new();

    harness.usecases().publish_panel_state().execute().await;

    assert_eq!(
        harness.notifier.ui_messages(),
        vec![
            UiMessage::DataUpdate { data: None },
            UiMessage::SelectionUpdate {
                count: 0,
                supported_granules: vec![],
            },
        ]
    );
}

#[tokio::test]
async fn test_selection_change_posts_only_selection() {
    let harness = Harness::new();
    let rect: Arc<dyn DesignNodePort> = Arc::new(MemoryNode::new(NodeKind::Rectangle, "Rect"));
    harness.select(&[rect.clone(), rect]);

    harness.usecases().publish_panel_state().selection_changed().await;

    let messages = harness.notifier.ui_messages();
    assert_eq!(messages.len(), 1);
    assert!(matches!(&messages[0], UiMessage::SelectionUpdate { count: 2, .. }));
}

#[tokio::test]
async fn test_closed_panel_drops_messages_quietly() {
    let harness = Harness::without_panel();

    harness.usecases().publish_panel_state().execute().await;

    assert!(harness.notifier.ui_messages().is_empty());
}
