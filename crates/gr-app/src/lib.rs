//! Granular Application Layer
//!
//! Copy/paste use cases orchestrated over the ports defined in `gr-core`.

pub mod deps;
pub mod record_store;
pub mod usecases;

pub use deps::AppDeps;
pub use record_store::ClipboardRecordStore;
pub use usecases::{
    ApplyProperties, CopyOutcome, CopySelection, ExtractProperties, ListSupportedGranules,
    PasteOutcome, PasteSummary, PasteToSelection, PublishPanelState, UseCases,
};
