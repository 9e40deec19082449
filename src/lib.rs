//! # Fanout Logger
//!
//! A structured, leveled logging library with multi-transport fan-out,
//! per-transport failure tracking, and hierarchical child loggers.
//!
//! ## Features
//!
//! - **Leveled logging**: six ordered levels from `Debug` to `Critical`,
//!   each with its own display symbol
//! - **Multiple transports**: console, in-memory, and custom sinks; every
//!   entry is formatted once and delivered identically to all of them
//! - **Failure recovery**: consecutive failures are tracked per transport
//!   and, past a configurable threshold, evict the sink with an automatic
//!   console fallback
//! - **Child loggers**: derive new loggers that inherit and extend a parent's
//!   configuration without ever mutating it

pub mod core;
pub mod macros;
pub mod transports;

pub mod prelude {
    pub use crate::core::{
        check_transport, ErrorCallback, FieldValue, LogEntry, LogLevel, Logger, LoggerBuilder,
        LoggerConfig, LoggerConfigPatch, LoggerError, Metadata, OutputFormat, Result,
        TimestampFn, TimestampFormat, Transport, TransportCheck, TransportFailure,
        TransportStatus, ValidationPolicy,
    };
    pub use crate::transports::{ConsoleTransport, MemoryTransport};
}

pub use core::{
    check_transport, ErrorCallback, FieldValue, LogEntry, LogLevel, Logger, LoggerBuilder,
    LoggerConfig, LoggerConfigPatch, LoggerError, Metadata, OutputFormat, Result, TimestampFn,
    TimestampFormat, Transport, TransportCheck, TransportFailure, TransportStatus,
    ValidationPolicy,
};
pub use transports::{ConsoleTransport, MemoryTransport};
