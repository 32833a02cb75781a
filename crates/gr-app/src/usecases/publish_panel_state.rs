//! Pushes the stored record and the selection's granules to the panel.
//! 向面板推送已保存的记录与当前选区支持的属性。

use std::sync::Arc;

use gr_core::ports::{NotifierPort, SelectionPort, UiMessage};
use tracing::{debug, info_span, Instrument};

use super::list_supported_granules::supported_by;
use crate::record_store::ClipboardRecordStore;

/// Sent when the panel opens and whenever the selection changes.
pub struct PublishPanelState {
    selection: Arc<dyn SelectionPort>,
    records: ClipboardRecordStore,
    notifier: Arc<dyn NotifierPort>,
}

impl PublishPanelState {
    pub fn new(
        selection: Arc<dyn SelectionPort>,
        records: ClipboardRecordStore,
        notifier: Arc<dyn NotifierPort>,
    ) -> Self {
        Self {
            selection,
            records,
            notifier,
        }
    }

    /// Posts `DataUpdate` followed by `SelectionUpdate`.
    pub async fn execute(&self) {
        let span = info_span!("usecase.publish_panel_state.execute");

        async {
            let data = self.records.load().await.map(Box::new);
            self.post(UiMessage::DataUpdate { data }).await;
            self.selection_changed().await;
        }
        .instrument(span)
        .await
    }

    /// Posts only `SelectionUpdate`.
    pub async fn selection_changed(&self) {
        let selection = self.selection.current_selection();
        let message = UiMessage::SelectionUpdate {
            count: selection.len(),
            supported_granules: supported_by(&selection),
        };
        self.post(message).await;
    }

    async fn post(&self, message: UiMessage) {
        if let Err(e) = self.notifier.post_ui_message(message).await {
            debug!(error = %e, "Panel not listening, message dropped");
        }
    }
}
