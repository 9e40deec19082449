//! In-memory transport, primarily for tests

use crate::core::{LogEntry, LoggerError, Result, Transport};
use parking_lot::Mutex;

/// Accumulates delivered entries in memory.
///
/// Entries are cloned on delivery and held behind a mutex so the transport can
/// be shared between a logger and the test inspecting it. `close` seals the
/// buffer; logging to a closed memory transport is an error.
pub struct MemoryTransport {
    entries: Mutex<Vec<LogEntry>>,
    closed: Mutex<bool>,
}

impl MemoryTransport {
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(Vec::new()),
            closed: Mutex::new(false),
        }
    }

    /// Snapshot of accumulated entries
    pub fn entries(&self) -> Vec<LogEntry> {
        self.entries.lock().clone()
    }

    /// Rendered messages of accumulated entries, in delivery order
    pub fn formatted_messages(&self) -> Vec<String> {
        self.entries
            .lock()
            .iter()
            .map(|e| e.formatted_message().to_string())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }

    /// Discard all accumulated entries
    pub fn clear(&self) {
        self.entries.lock().clear();
    }
}

impl Default for MemoryTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for MemoryTransport {
    fn log(&self, entry: &LogEntry) -> Result<()> {
        if *self.closed.lock() {
            return Err(LoggerError::transport_closed(self.name()));
        }
        self.entries.lock().push(entry.clone());
        Ok(())
    }

    fn close(&self) -> Result<()> {
        *self.closed.lock() = true;
        Ok(())
    }

    fn can_close(&self) -> bool {
        true
    }

    fn name(&self) -> &str {
        "memory"
    }
}
