//! Copy: snapshot the single selected node into the stored record.
//! 复制：将唯一选中节点的属性快照保存为记录。

use std::sync::Arc;

use gr_core::config::PreviewConfig;
use gr_core::granule::Granule;
use gr_core::node::read_number;
use gr_core::ports::{DesignNodePort, NotifierPort, SelectionPort, UiMessage};
use gr_core::preview::{preview_scale, PreviewLabel};
use gr_core::record::{ancestors_of, PropertyRecord};
use tracing::{debug, error, info, info_span, Instrument};

use super::ExtractProperties;
use crate::record_store::ClipboardRecordStore;

pub const SELECT_ONE_TO_COPY: &str = "Please select exactly one object to copy.";

#[derive(Debug, Clone, PartialEq)]
pub enum CopyOutcome {
    Copied(Box<PropertyRecord>),
    /// Selection did not contain exactly one node. Nothing was read or saved.
    InvalidSelection { selected: usize },
}

/// Copies every granule of the selected node.
///
/// # Behavior / 行为
/// - Requires exactly one selected node
/// - Extracts all granules, the ancestor path, a preview and its label
/// - Saves the record (last write wins) and notifies the user
/// - Posts `CopyCompleted` to the panel, ignoring failures
pub struct CopySelection {
    selection: Arc<dyn SelectionPort>,
    extract: ExtractProperties,
    records: ClipboardRecordStore,
    notifier: Arc<dyn NotifierPort>,
    preview: PreviewConfig,
}

impl CopySelection {
    pub fn new(
        selection: Arc<dyn SelectionPort>,
        extract: ExtractProperties,
        records: ClipboardRecordStore,
        notifier: Arc<dyn NotifierPort>,
        preview: PreviewConfig,
    ) -> Self {
        Self {
            selection,
            extract,
            records,
            notifier,
            preview,
        }
    }

    pub async fn execute(&self) -> CopyOutcome {
        let span = info_span!("usecase.copy_selection.execute");

        async {
            let selection = self.selection.current_selection();
            let [node] = selection.as_slice() else {
                info!(selected = selection.len(), "Copy rejected: selection is not a single node");
                self.notifier.notify(SELECT_ONE_TO_COPY);
                return CopyOutcome::InvalidSelection {
                    selected: selection.len(),
                };
            };
            let node = node.as_ref();

            let extracted = self.extract.execute(node, Granule::ALL).await;
            let mut record = PropertyRecord::from_extraction(node.id(), node.name(), extracted);
            record.ancestors = ancestors_of(node);
            record.preview = self.render_preview(node).await;
            record.preview_label = PreviewLabel::from_raw_fills(record.get(Granule::Fills));

            self.records.save(&record).await;
            self.notifier
                .notify(&format!("Properties copied from {}", record.name));

            let message = UiMessage::CopyCompleted {
                data: Box::new(record.clone()),
            };
            if let Err(e) = self.notifier.post_ui_message(message).await {
                debug!(error = %e, "Panel not listening, copy notification dropped");
            }

            info!(
                node = %record.id,
                granules = record.properties.len(),
                "Properties copied"
            );
            CopyOutcome::Copied(Box::new(record))
        }
        .instrument(span)
        .await
    }

    async fn render_preview(&self, node: &dyn DesignNodePort) -> Option<Vec<u8>> {
        let panel_width = self.records.panel_width().await;
        let target = self.preview.target_for_panel(panel_width);
        let scale = preview_scale(
            read_number(node, Granule::Width),
            read_number(node, Granule::Height),
            target,
        );

        match node.export_png(scale).await {
            Ok(bytes) => {
                debug!(scale, bytes = bytes.len(), "Preview rendered");
                Some(bytes)
            }
            Err(e) => {
                error!(node = %node.name(), scale, error = %e, "Failed to generate preview");
                None
            }
        }
    }
}
