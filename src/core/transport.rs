//! Transport trait and attach-time validation

use super::error::Result;
use super::log_entry::LogEntry;

/// Output destination for dispatched log entries.
///
/// `log` takes `&self`; sinks that accumulate state use interior mutability so
/// a single transport can be shared across a logger hierarchy. `close` is for
/// explicit resource cleanup and is never invoked automatically — only
/// [`Logger::close`](crate::core::Logger::close) or a direct caller runs it.
pub trait Transport: Send + Sync {
    /// Deliver one entry. Errors are contained by the dispatch engine and fed
    /// into failure tracking; they never reach the logging caller.
    fn log(&self, entry: &LogEntry) -> Result<()>;

    /// Release any underlying resources. May block.
    fn close(&self) -> Result<()> {
        Ok(())
    }

    /// Whether this transport implements a meaningful `close`.
    ///
    /// Checked by the `require_close` validation policy.
    fn can_close(&self) -> bool {
        false
    }

    fn name(&self) -> &str;
}

/// Attach-time validation policy for transports.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ValidationPolicy {
    /// Reject invalid transports with an error instead of a warning
    pub throw_on_invalid: bool,
    /// Require transports to implement `close`
    pub require_close: bool,
}

impl ValidationPolicy {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_throw_on_invalid(mut self, throw: bool) -> Self {
        self.throw_on_invalid = throw;
        self
    }

    #[must_use]
    pub fn with_require_close(mut self, require: bool) -> Self {
        self.require_close = require;
        self
    }
}

/// Tagged result of the transport shape check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportCheck {
    Valid,
    /// Policy requires `close` but the transport does not support it
    MissingClose,
    /// The transport reports an empty name, which breaks status reporting
    UnnamedTransport,
}

impl TransportCheck {
    pub fn is_valid(&self) -> bool {
        matches!(self, TransportCheck::Valid)
    }

    pub fn reason(&self) -> &'static str {
        match self {
            TransportCheck::Valid => "valid",
            TransportCheck::MissingClose => "close() required by policy but not supported",
            TransportCheck::UnnamedTransport => "transport name must not be empty",
        }
    }
}

/// Explicit shape predicate run when a transport is attached to a logger.
pub fn check_transport(transport: &dyn Transport, policy: &ValidationPolicy) -> TransportCheck {
    if transport.name().is_empty() {
        return TransportCheck::UnnamedTransport;
    }
    if policy.require_close && !transport.can_close() {
        return TransportCheck::MissingClose;
    }
    TransportCheck::Valid
}
