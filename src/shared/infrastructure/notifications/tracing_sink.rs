use crate::shared::infrastructure::notifications::NotificationSink;

/// Emits each notification as a `warn` event on the `notifications` target.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotificationSink;

impl NotificationSink for TracingNotificationSink {
    fn error(&self, message: &str) {
        tracing::warn!(target: "notifications", %message, "user notification");
    }
}
