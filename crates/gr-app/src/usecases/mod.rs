//! Business logic use cases
//!
//! ExtractProperties ──► CopySelection ──► ClipboardRecordStore
//!                                              │
//! ApplyProperties ◄── PasteToSelection ◄───────┘

pub mod apply;
pub mod copy_selection;
pub mod extract;
pub mod list_supported_granules;
pub mod paste_to_selection;
pub mod publish_panel_state;

pub use apply::{ApplyProperties, PasteSummary};
pub use copy_selection::{CopyOutcome, CopySelection};
pub use extract::ExtractProperties;
pub use list_supported_granules::ListSupportedGranules;
pub use paste_to_selection::{PasteOutcome, PasteToSelection};
pub use publish_panel_state::PublishPanelState;

use crate::deps::AppDeps;
use crate::record_store::ClipboardRecordStore;

/// Builds use cases from [`AppDeps`].
/// 使用 AppDeps 创建用例。
pub struct UseCases<'a> {
    deps: &'a AppDeps,
}

impl<'a> UseCases<'a> {
    pub fn new(deps: &'a AppDeps) -> Self {
        Self { deps }
    }

    pub fn record_store(&self) -> ClipboardRecordStore {
        ClipboardRecordStore::new(self.deps.store.clone(), self.deps.preview.default_panel_width)
    }

    pub fn extract_properties(&self) -> ExtractProperties {
        ExtractProperties::new(self.deps.styles.clone(), self.deps.variables.clone())
    }

    pub fn apply_properties(&self) -> ApplyProperties {
        ApplyProperties::new(self.deps.fonts.clone())
    }

    pub fn copy_selection(&self) -> CopySelection {
        CopySelection::new(
            self.deps.selection.clone(),
            self.extract_properties(),
            self.record_store(),
            self.deps.notifier.clone(),
            self.deps.preview.clone(),
        )
    }

    pub fn paste_to_selection(&self) -> PasteToSelection {
        PasteToSelection::new(
            self.deps.selection.clone(),
            self.apply_properties(),
            self.record_store(),
            self.deps.notifier.clone(),
        )
    }

    pub fn list_supported_granules(&self) -> ListSupportedGranules {
        ListSupportedGranules::new(self.deps.selection.clone())
    }

    pub fn publish_panel_state(&self) -> PublishPanelState {
        PublishPanelState::new(
            self.deps.selection.clone(),
            self.record_store(),
            self.deps.notifier.clone(),
        )
    }
}
