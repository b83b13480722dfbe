/// Fire-and-forget sink for advisory log lines emitted by the order processor.
pub trait EventSink: Send + Sync {
    fn record(&self, message: &str);
}

/// Forwards every message to `tracing` at info level.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl EventSink for TracingSink {
    fn record(&self, message: &str) {
        tracing::info!(target: "order_processor", "{message}");
    }
}
