//! Core logger types and traits

pub mod config;
pub mod error;
pub mod log_entry;
pub mod log_level;
pub mod logger;
pub mod metadata;
pub mod output_format;
pub mod timestamp;
pub mod transport;

pub use config::{LoggerConfig, LoggerConfigPatch};
pub use error::{ErrorCallback, LoggerError, Result, TransportFailure};
pub use log_entry::LogEntry;
pub use log_level::LogLevel;
pub use logger::{Logger, LoggerBuilder, TransportStatus};
pub use metadata::{FieldValue, Metadata};
pub use output_format::OutputFormat;
pub use timestamp::{TimestampFn, TimestampFormat};
pub use transport::{check_transport, Transport, TransportCheck, ValidationPolicy};
