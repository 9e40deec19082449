//! Timestamp formatting presets
//!
//! Pure instant-to-string rendering selected per logger configuration. Every
//! preset always returns a string; the `None` preset returns an empty one.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Custom timestamp formatter callback.
///
/// When configured it overrides every preset and receives the entry's recorded
/// timestamp exactly once per dispatch.
pub type TimestampFn = Arc<dyn Fn(DateTime<Utc>) -> String + Send + Sync>;

/// Timestamp rendering preset.
///
/// # Examples
///
/// ```
/// use fanout_logger::core::TimestampFormat;
/// use chrono::Utc;
///
/// let rendered = TimestampFormat::Short.format(&Utc::now());
/// assert_eq!(rendered.len(), 8); // HH:MM:SS
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimestampFormat {
    /// Time only: `10:30:45`
    Short,

    /// Time with milliseconds: `10:30:45.123`
    TimeMillis,

    /// ISO 8601 with milliseconds: `2025-01-08T10:30:45.123Z`
    Iso8601,

    /// Date only: `2025-01-08`
    Date,

    /// Combined date and time: `2025-01-08 10:30:45`
    ///
    /// This is the default format.
    #[default]
    DateTime,

    /// Compact numeric, no separators: `20250108103045`
    Compact,

    /// Human-relative: `5s ago`, `3m ago`, `2h ago`, `4d ago`
    ///
    /// Thresholds at 60 seconds, 60 minutes, 24 hours. The reference clock is
    /// the *format* call's wall-clock time, not the entry's creation time, so a
    /// deferred format of the same instant yields a different string.
    Relative,

    /// Unix timestamp in seconds: `1736332245`
    Epoch,

    /// Empty string
    None,

    /// Custom strftime format
    ///
    /// ```
    /// use fanout_logger::core::TimestampFormat;
    ///
    /// // Apache log format
    /// let format = TimestampFormat::Custom("%d/%b/%Y:%H:%M:%S %z".to_string());
    /// ```
    Custom(String),
}

impl TimestampFormat {
    /// Format a `DateTime<Utc>` according to this preset.
    #[must_use]
    pub fn format(&self, datetime: &DateTime<Utc>) -> String {
        match self {
            TimestampFormat::Short => datetime.format("%H:%M:%S").to_string(),
            TimestampFormat::TimeMillis => datetime.format("%H:%M:%S%.3f").to_string(),
            TimestampFormat::Iso8601 => datetime.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string(),
            TimestampFormat::Date => datetime.format("%Y-%m-%d").to_string(),
            TimestampFormat::DateTime => datetime.format("%Y-%m-%d %H:%M:%S").to_string(),
            TimestampFormat::Compact => datetime.format("%Y%m%d%H%M%S").to_string(),
            TimestampFormat::Relative => Self::format_relative(datetime, Utc::now()),
            TimestampFormat::Epoch => datetime.timestamp().to_string(),
            TimestampFormat::None => String::new(),
            TimestampFormat::Custom(format_str) => datetime.format(format_str).to_string(),
        }
    }

    /// Render a relative timestamp against an explicit reference instant.
    ///
    /// An instant at or ahead of the reference renders as `0s ago`.
    fn format_relative(datetime: &DateTime<Utc>, now: DateTime<Utc>) -> String {
        let elapsed = (now - *datetime).num_seconds().max(0);
        if elapsed < 60 {
            format!("{}s ago", elapsed)
        } else if elapsed < 60 * 60 {
            format!("{}m ago", elapsed / 60)
        } else if elapsed < 24 * 60 * 60 {
            format!("{}h ago", elapsed / 3600)
        } else {
            format!("{}d ago", elapsed / 86400)
        }
    }
}
