//! Output format configuration for log entries
//!
//! Renders a log entry into its final dispatch text. The timestamp arrives
//! already rendered so the same string reaches every format and every sink:
//! - Text: human-readable (default)
//! - Json: machine-readable JSON
//! - Logfmt: key=value pairs for log aggregation tools

use super::log_entry::LogEntry;
use serde::{Deserialize, Serialize};

/// Output format for log entries
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    /// Human-readable text format (default)
    ///
    /// Example: `[2025-01-08 10:30:45] [INFO    ] ℹ Request processed`
    #[default]
    Text,

    /// JSON format for machine processing
    ///
    /// Example: `{"timestamp":"2025-01-08 10:30:45","level":"INFO","message":"Request processed"}`
    Json,

    /// Logfmt format (key=value pairs)
    ///
    /// Example: `timestamp="2025-01-08 10:30:45" level=INFO msg="Request processed"`
    Logfmt,
}

impl OutputFormat {
    /// Render a log entry with an already-formatted timestamp string.
    pub fn format(&self, entry: &LogEntry, timestamp: &str) -> String {
        match self {
            OutputFormat::Text => Self::format_text(entry, timestamp),
            OutputFormat::Json => Self::format_json(entry, timestamp),
            OutputFormat::Logfmt => Self::format_logfmt(entry, timestamp),
        }
    }

    /// Format as human-readable text
    ///
    /// The timestamp bracket is omitted entirely when the rendered timestamp
    /// is empty (the `None` preset).
    fn format_text(entry: &LogEntry, timestamp: &str) -> String {
        let base = if timestamp.is_empty() {
            format!(
                "[{:8}] {} {}",
                entry.level.to_str(),
                entry.symbol,
                entry.message
            )
        } else {
            format!(
                "[{}] [{:8}] {} {}",
                timestamp,
                entry.level.to_str(),
                entry.symbol,
                entry.message
            )
        };

        if entry.metadata.is_empty() {
            base
        } else {
            format!("{} {}", base, entry.metadata.format_fields())
        }
    }

    /// Format as JSON
    fn format_json(entry: &LogEntry, timestamp: &str) -> String {
        let mut json_obj = serde_json::Map::new();

        if !timestamp.is_empty() {
            json_obj.insert(
                "timestamp".to_string(),
                serde_json::Value::String(timestamp.to_string()),
            );
        }
        json_obj.insert(
            "level".to_string(),
            serde_json::Value::String(entry.level.to_str().to_string()),
        );
        json_obj.insert(
            "symbol".to_string(),
            serde_json::Value::String(entry.symbol.to_string()),
        );
        json_obj.insert(
            "message".to_string(),
            serde_json::Value::String(entry.message.clone()),
        );

        for (key, value) in entry.metadata.sorted_fields() {
            json_obj.insert(key.clone(), value.to_json_value());
        }

        serde_json::to_string(&serde_json::Value::Object(json_obj)).unwrap_or_default()
    }

    /// Format as logfmt (key=value pairs)
    fn format_logfmt(entry: &LogEntry, timestamp: &str) -> String {
        let mut parts = Vec::new();

        if !timestamp.is_empty() {
            parts.push(format!("timestamp={}", Self::logfmt_value(timestamp)));
        }
        parts.push(format!("level={}", entry.level.to_str()));
        parts.push(format!("msg={}", Self::logfmt_value(&entry.message)));

        for (key, value) in entry.metadata.sorted_fields() {
            parts.push(format!("{}={}", key, Self::logfmt_value(&value.to_string())));
        }

        parts.join(" ")
    }

    /// Quote a logfmt value when it contains spaces or quotes
    fn logfmt_value(value: &str) -> String {
        if value.contains(' ') || value.contains('"') || value.is_empty() {
            format!("\"{}\"", value.replace('"', "\\\""))
        } else {
            value.to_string()
        }
    }
}
