use rhs_core::TelemetrySink;
use rhs_logger as logger;

/// Telemetry sink that writes events to the log.
#[derive(Debug, Default)]
pub struct LogTelemetry {
    sent: usize,
}

impl LogTelemetry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of events tracked so far.
    pub fn sent(&self) -> usize {
        self.sent
    }
}

impl TelemetrySink for LogTelemetry {
    fn track_event(&mut self, category: &str, event: &str) {
        self.sent += 1;
        logger::info(format!("telemetry: {}/{}", category, event));
    }
}
