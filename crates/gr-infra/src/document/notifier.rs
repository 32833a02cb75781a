use std::sync::Mutex;

use anyhow::Result;
use async_trait::async_trait;
use gr_core::ports::{NotifierPort, UiMessage};
use tracing::info;

use super::lock;

/// Notifier that logs and keeps every toast and panel message.
///
/// Without an attached panel, `post_ui_message` fails like a host whose UI
/// is closed.
pub struct RecordingNotifier {
    panel_attached: bool,
    notifications: Mutex<Vec<String>>,
    ui_messages: Mutex<Vec<UiMessage>>,
}

impl RecordingNotifier {
    pub fn new(panel_attached: bool) -> Self {
        Self {
            panel_attached,
            notifications: Mutex::new(Vec::new()),
            ui_messages: Mutex::new(Vec::new()),
        }
    }

    pub fn notifications(&self) -> Vec<String> {
        lock(&self.notifications).clone()
    }

    pub fn last_notification(&self) -> Option<String> {
        lock(&self.notifications).last().cloned()
    }

    pub fn ui_messages(&self) -> Vec<UiMessage> {
        lock(&self.ui_messages).clone()
    }
}

#[async_trait]
impl NotifierPort for RecordingNotifier {
    fn notify(&self, message: &str) {
        info!(message, "Notify");
        lock(&self.notifications).push(message.to_string());
    }

    async fn post_ui_message(&self, message: UiMessage) -> Result<()> {
        if !self.panel_attached {
            anyhow::bail!("no panel attached");
        }
        lock(&self.ui_messages).push(message);
        Ok(())
    }
}
