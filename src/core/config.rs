//! Logger configuration model
//!
//! Immutable configuration values with functional derivation. A child
//! configuration is produced by merging a partial patch over a parent; the
//! parent is never mutated. Metadata is the one field that deep-merges (one
//! level of key union) instead of being replaced wholesale.

use std::fmt;
use std::sync::Arc;

use super::error::ErrorCallback;
use super::log_level::LogLevel;
use super::metadata::Metadata;
use super::output_format::OutputFormat;
use super::timestamp::{TimestampFn, TimestampFormat};
use super::transport::{Transport, ValidationPolicy};
use crate::transports::ConsoleTransport;

/// Immutable logger configuration.
///
/// Cloning is cheap where it matters: transports and callbacks are held behind
/// `Arc`, so a clone shares the sinks by reference while every scalar field is
/// copied. A configuration handed to a logger is never mutated afterwards;
/// introspection returns clones.
#[derive(Clone)]
pub struct LoggerConfig {
    /// Minimum level an entry must reach to be dispatched
    pub min_level: LogLevel,
    /// Fields merged into every entry, under call-site fields
    pub metadata: Metadata,
    /// Message formatter applied once per dispatch
    pub output_format: OutputFormat,
    /// Timestamp preset used when no custom callback is configured
    pub timestamp_format: TimestampFormat,
    /// Custom timestamp callback; overrides every preset
    pub timestamp_fn: Option<TimestampFn>,
    /// Ordered transport list installed at construction
    pub transports: Vec<Arc<dyn Transport>>,
    /// Consecutive-failure count at which a transport is evicted.
    /// `None` means failures are reported forever but never evict.
    pub failure_threshold: Option<u32>,
    /// Callback invoked on every transport failure
    pub on_transport_error: Option<ErrorCallback>,
    /// Attach-time transport validation policy
    pub validation: ValidationPolicy,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            min_level: LogLevel::Info,
            metadata: Metadata::new(),
            output_format: OutputFormat::Text,
            timestamp_format: TimestampFormat::DateTime,
            timestamp_fn: None,
            transports: vec![Arc::new(ConsoleTransport::new())],
            failure_threshold: None,
            on_transport_error: None,
            validation: ValidationPolicy::default(),
        }
    }
}

impl LoggerConfig {
    /// Create a configuration with the stated defaults: level `Info`, datetime
    /// timestamps, text output, a single console transport.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_min_level(mut self, level: LogLevel) -> Self {
        self.min_level = level;
        self
    }

    #[must_use]
    pub fn with_metadata(mut self, metadata: Metadata) -> Self {
        self.metadata = metadata;
        self
    }

    #[must_use]
    pub fn with_output_format(mut self, format: OutputFormat) -> Self {
        self.output_format = format;
        self
    }

    #[must_use]
    pub fn with_timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }

    #[must_use]
    pub fn with_timestamp_fn(mut self, f: TimestampFn) -> Self {
        self.timestamp_fn = Some(f);
        self
    }

    /// Replace the transport list
    #[must_use]
    pub fn with_transports(mut self, transports: Vec<Arc<dyn Transport>>) -> Self {
        self.transports = transports;
        self
    }

    /// Append a transport to the list
    #[must_use]
    pub fn with_transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transports.push(transport);
        self
    }

    #[must_use]
    pub fn with_failure_threshold(mut self, threshold: u32) -> Self {
        self.failure_threshold = Some(threshold);
        self
    }

    #[must_use]
    pub fn with_error_callback(mut self, callback: ErrorCallback) -> Self {
        self.on_transport_error = Some(callback);
        self
    }

    #[must_use]
    pub fn with_validation(mut self, policy: ValidationPolicy) -> Self {
        self.validation = policy;
        self
    }

    /// Render an entry timestamp: a configured custom callback wins over the
    /// preset, and it receives the recorded instant exactly once.
    pub fn render_timestamp(&self, timestamp: chrono::DateTime<chrono::Utc>) -> String {
        match &self.timestamp_fn {
            Some(f) => f(timestamp),
            None => self.timestamp_format.format(&timestamp),
        }
    }

    /// Derive a child configuration by merging a patch over this one.
    ///
    /// Every present patch field replaces the parent's whole field, except
    /// `metadata` which is key-unioned with the patch winning on collision.
    /// `self` is untouched; the result is an independent value.
    #[must_use]
    pub fn derive(&self, patch: LoggerConfigPatch) -> LoggerConfig {
        LoggerConfig {
            min_level: patch.min_level.unwrap_or(self.min_level),
            metadata: match patch.metadata {
                Some(extra) => self.metadata.merged_with(&extra),
                None => self.metadata.clone(),
            },
            output_format: patch.output_format.unwrap_or_else(|| self.output_format.clone()),
            timestamp_format: patch
                .timestamp_format
                .unwrap_or_else(|| self.timestamp_format.clone()),
            timestamp_fn: patch.timestamp_fn.or_else(|| self.timestamp_fn.clone()),
            transports: patch.transports.unwrap_or_else(|| self.transports.clone()),
            failure_threshold: patch.failure_threshold.unwrap_or(self.failure_threshold),
            on_transport_error: patch
                .on_transport_error
                .or_else(|| self.on_transport_error.clone()),
            validation: patch.validation.unwrap_or(self.validation),
        }
    }
}

impl fmt::Debug for LoggerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoggerConfig")
            .field("min_level", &self.min_level)
            .field("metadata", &self.metadata)
            .field("output_format", &self.output_format)
            .field("timestamp_format", &self.timestamp_format)
            .field("timestamp_fn", &self.timestamp_fn.as_ref().map(|_| "<fn>"))
            .field(
                "transports",
                &self
                    .transports
                    .iter()
                    .map(|t| t.name().to_string())
                    .collect::<Vec<_>>(),
            )
            .field("failure_threshold", &self.failure_threshold)
            .field(
                "on_transport_error",
                &self.on_transport_error.as_ref().map(|_| "<fn>"),
            )
            .field("validation", &self.validation)
            .finish()
    }
}

/// Partial configuration used for child derivation.
///
/// Absent fields inherit the parent's value verbatim. A present `metadata`
/// field is merged, not substituted.
#[derive(Clone, Default)]
pub struct LoggerConfigPatch {
    pub min_level: Option<LogLevel>,
    pub metadata: Option<Metadata>,
    pub output_format: Option<OutputFormat>,
    pub timestamp_format: Option<TimestampFormat>,
    pub timestamp_fn: Option<TimestampFn>,
    pub transports: Option<Vec<Arc<dyn Transport>>>,
    pub failure_threshold: Option<Option<u32>>,
    pub on_transport_error: Option<ErrorCallback>,
    pub validation: Option<ValidationPolicy>,
}

impl LoggerConfigPatch {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn min_level(mut self, level: LogLevel) -> Self {
        self.min_level = Some(level);
        self
    }

    #[must_use]
    pub fn metadata(mut self, metadata: Metadata) -> Self {
        self.metadata = Some(metadata);
        self
    }

    #[must_use]
    pub fn output_format(mut self, format: OutputFormat) -> Self {
        self.output_format = Some(format);
        self
    }

    #[must_use]
    pub fn timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = Some(format);
        self
    }

    #[must_use]
    pub fn timestamp_fn(mut self, f: TimestampFn) -> Self {
        self.timestamp_fn = Some(f);
        self
    }

    #[must_use]
    pub fn transports(mut self, transports: Vec<Arc<dyn Transport>>) -> Self {
        self.transports = Some(transports);
        self
    }

    #[must_use]
    pub fn failure_threshold(mut self, threshold: u32) -> Self {
        self.failure_threshold = Some(Some(threshold));
        self
    }

    /// Explicitly disable eviction in the child even if the parent has a
    /// threshold configured
    #[must_use]
    pub fn no_failure_threshold(mut self) -> Self {
        self.failure_threshold = Some(None);
        self
    }

    #[must_use]
    pub fn on_transport_error(mut self, callback: ErrorCallback) -> Self {
        self.on_transport_error = Some(callback);
        self
    }

    #[must_use]
    pub fn validation(mut self, policy: ValidationPolicy) -> Self {
        self.validation = Some(policy);
        self
    }
}
