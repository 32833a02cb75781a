//! Paste: apply the stored record to the current selection.
//! 粘贴：将已保存的记录应用到当前选区。

use std::sync::Arc;

use gr_core::granule::{Granule, GranuleBundle};
use gr_core::ports::{NotifierPort, SelectionPort};
use tracing::{info, info_span, Instrument};

use super::{ApplyProperties, PasteSummary};
use crate::record_store::ClipboardRecordStore;

pub const NOTHING_COPIED: &str = "No properties copied yet. Use Copy first.";
pub const SELECT_TARGETS: &str = "Please select at least one object to paste to.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PasteOutcome {
    Pasted(PasteSummary),
    NothingCopied,
    EmptySelection,
}

pub struct PasteToSelection {
    selection: Arc<dyn SelectionPort>,
    apply: ApplyProperties,
    records: ClipboardRecordStore,
    notifier: Arc<dyn NotifierPort>,
}

impl PasteToSelection {
    pub fn new(
        selection: Arc<dyn SelectionPort>,
        apply: ApplyProperties,
        records: ClipboardRecordStore,
        notifier: Arc<dyn NotifierPort>,
    ) -> Self {
        Self {
            selection,
            apply,
            records,
            notifier,
        }
    }

    /// Pastes `granules` onto every selected node and notifies the summary.
    pub async fn execute(&self, granules: &[Granule]) -> PasteOutcome {
        let span = info_span!("usecase.paste_to_selection.execute", granules = granules.len());

        async {
            let Some(record) = self.records.load().await else {
                info!("Paste rejected: nothing copied");
                self.notifier.notify(NOTHING_COPIED);
                return PasteOutcome::NothingCopied;
            };

            let targets = self.selection.current_selection();
            if targets.is_empty() {
                info!("Paste rejected: empty selection");
                self.notifier.notify(SELECT_TARGETS);
                return PasteOutcome::EmptySelection;
            }

            let summary = self.apply.execute(&record, granules, &targets).await;
            self.notifier.notify(&summary.message(granules));
            PasteOutcome::Pasted(summary)
        }
        .instrument(span)
        .await
    }

    pub async fn execute_bundle(&self, bundle: GranuleBundle) -> PasteOutcome {
        self.execute(bundle.granules()).await
    }
}
