pub mod in_memory;
pub mod tracing_sink;

/// Fire-and-forget channel for user-visible error messages.
pub trait NotificationSink: Send + Sync {
    fn error(&self, message: &str);
}
