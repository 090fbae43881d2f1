use crate::shared::infrastructure::notifications::NotificationSink;
use std::sync::Mutex;

/// Records every message it receives, in order.
#[derive(Default)]
pub struct InMemoryNotificationSink {
    messages: Mutex<Vec<String>>,
}

impl InMemoryNotificationSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<String> {
        self.messages
            .lock()
            .map(|messages| messages.clone())
            .unwrap_or_default()
    }
}

impl NotificationSink for InMemoryNotificationSink {
    fn error(&self, message: &str) {
        if let Ok(mut messages) = self.messages.lock() {
            messages.push(message.to_string());
        }
    }
}
