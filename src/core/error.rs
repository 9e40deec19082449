//! Error types for the logger

use std::sync::Arc;

use super::log_entry::LogEntry;

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// Unknown level name supplied at an untyped boundary
    #[error("Invalid log level: '{value}'")]
    InvalidLevel { value: String },

    /// Transport rejected by the attach-time shape check
    #[error("Transport validation failed for '{name}': {reason}")]
    TransportValidation { name: String, reason: String },

    /// A transport's own write failure, surfaced during dispatch
    #[error("Transport '{transport}' write failed: {message}")]
    TransportWrite { transport: String, message: String },

    /// A transport panicked during dispatch; the panic was contained
    #[error("Transport '{transport}' panicked: {message}")]
    TransportPanic { transport: String, message: String },

    /// Logging attempted against a transport that was explicitly closed
    #[error("Transport '{transport}' is closed")]
    TransportClosed { transport: String },

    /// Generic IO error (sink plumbing)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error (sink plumbing)
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl LoggerError {
    /// Create an invalid level error
    pub fn invalid_level(value: impl Into<String>) -> Self {
        LoggerError::InvalidLevel {
            value: value.into(),
        }
    }

    /// Create a transport validation error
    pub fn transport_validation(name: impl Into<String>, reason: impl Into<String>) -> Self {
        LoggerError::TransportValidation {
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// Create a transport write error
    pub fn transport_write(transport: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::TransportWrite {
            transport: transport.into(),
            message: message.into(),
        }
    }

    /// Create a transport panic error
    pub fn transport_panic(transport: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::TransportPanic {
            transport: transport.into(),
            message: message.into(),
        }
    }

    /// Create a closed transport error
    pub fn transport_closed(transport: impl Into<String>) -> Self {
        LoggerError::TransportClosed {
            transport: transport.into(),
        }
    }

    /// Create a generic error
    pub fn other<S: Into<String>>(msg: S) -> Self {
        LoggerError::Other(msg.into())
    }
}

/// Payload handed to the error callback on every transport failure.
///
/// The callback always runs before any eviction takes effect, so it observes
/// the failing transport, the triggering error, and the entry that was being
/// delivered.
#[derive(Debug)]
pub struct TransportFailure<'a> {
    /// Name of the failing transport
    pub transport: &'a str,
    /// Consecutive failure count including this failure
    pub consecutive_failures: u32,
    /// The error the transport produced
    pub error: &'a LoggerError,
    /// The entry that was being delivered
    pub entry: &'a LogEntry,
}

/// User-supplied callback invoked on each transport failure.
pub type ErrorCallback = Arc<dyn Fn(&TransportFailure<'_>) + Send + Sync>;
