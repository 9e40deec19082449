//! Log entry structure

use super::log_level::LogLevel;
use super::metadata::Metadata;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// A single log record, created fresh per logging call.
///
/// The timestamp is captured once at construction. `formatted` is filled in by
/// the dispatch engine before fan-out so every transport observes the same
/// rendered text.
#[derive(Debug, Clone, Serialize)]
pub struct LogEntry {
    pub level: LogLevel,
    pub symbol: &'static str,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub metadata: Metadata,
    #[serde(skip)]
    pub formatted: Option<String>,
}

impl LogEntry {
    /// Sanitize log message to prevent log injection attacks
    ///
    /// Replaces newlines, carriage returns, and tabs with escape sequences
    /// so a crafted message cannot fake additional log lines.
    fn sanitize_message(message: &str) -> String {
        message
            .replace('\n', "\\n")
            .replace('\r', "\\r")
            .replace('\t', "\\t")
    }

    pub fn new(level: LogLevel, message: String) -> Self {
        Self {
            level,
            symbol: level.symbol(),
            message: Self::sanitize_message(&message),
            timestamp: Utc::now(),
            metadata: Metadata::new(),
            formatted: None,
        }
    }

    /// Build an entry with merged metadata: configuration fields unioned with
    /// call-site fields, call-site winning on key collision.
    pub fn build(
        level: LogLevel,
        message: String,
        config_metadata: &Metadata,
        call_metadata: Option<Metadata>,
    ) -> Self {
        let metadata = match call_metadata {
            Some(call) => config_metadata.merged_with(&call),
            None => config_metadata.clone(),
        };
        Self {
            metadata,
            ..Self::new(level, message)
        }
    }

    /// The pre-rendered dispatch text; falls back to the raw message when the
    /// entry has not passed through the dispatch engine.
    pub fn formatted_message(&self) -> &str {
        self.formatted.as_deref().unwrap_or(&self.message)
    }
}
