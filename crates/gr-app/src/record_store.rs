//! Persistence of the copied record and the panel size.
//! 复制记录与面板尺寸的持久化。

use std::sync::Arc;

use gr_core::ports::KeyValueStorePort;
use gr_core::preview::{PanelSize, PANEL_SIZE_STORAGE_KEY};
use gr_core::record::{PropertyRecord, RECORD_STORAGE_KEY};
use tracing::{debug, error};

/// Single-slot store of the last copied [`PropertyRecord`].
///
/// Storage failures never surface: a failed save is logged, a failed or
/// undecodable load reads as "nothing copied yet".
#[derive(Clone)]
pub struct ClipboardRecordStore {
    store: Arc<dyn KeyValueStorePort>,
    default_panel_width: f64,
}

impl ClipboardRecordStore {
    pub fn new(store: Arc<dyn KeyValueStorePort>, default_panel_width: f64) -> Self {
        Self {
            store,
            default_panel_width,
        }
    }

    /// Replaces the stored record.
    pub async fn save(&self, record: &PropertyRecord) {
        let value = match serde_json::to_value(record) {
            Ok(value) => value,
            Err(e) => {
                error!(error = %e, "Failed to serialize property record");
                return;
            }
        };
        if let Err(e) = self.store.set(RECORD_STORAGE_KEY, value).await {
            error!(error = %e, "Failed to save properties");
        }
    }

    pub async fn load(&self) -> Option<PropertyRecord> {
        let value = match self.store.get(RECORD_STORAGE_KEY).await {
            Ok(Some(value)) => value,
            Ok(None) => return None,
            Err(e) => {
                error!(error = %e, "Failed to load properties");
                return None;
            }
        };
        if value.is_null() {
            return None;
        }
        match serde_json::from_value(value) {
            Ok(record) => Some(record),
            Err(e) => {
                error!(error = %e, "Stored properties are not a valid record");
                None
            }
        }
    }

    /// Last panel width reported by the UI, or the configured default.
    pub async fn panel_width(&self) -> f64 {
        let stored = match self.store.get(PANEL_SIZE_STORAGE_KEY).await {
            Ok(value) => value,
            Err(e) => {
                error!(error = %e, "Failed to load panel size");
                None
            }
        };
        stored
            .and_then(|value| serde_json::from_value::<PanelSize>(value).ok())
            .map(|size| size.width)
            .filter(|width| *width > 0.0)
            .unwrap_or(self.default_panel_width)
    }

    pub async fn save_panel_size(&self, size: PanelSize) {
        let value = match serde_json::to_value(size) {
            Ok(value) => value,
            Err(e) => {
                error!(error = %e, "Failed to serialize panel size");
                return;
            }
        };
        match self.store.set(PANEL_SIZE_STORAGE_KEY, value).await {
            Ok(()) => debug!(width = size.width, height = size.height, "Panel size saved"),
            Err(e) => error!(error = %e, "Failed to save panel size"),
        }
    }
}
