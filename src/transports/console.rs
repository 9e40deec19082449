//! Console transport implementation

use crate::core::{LogEntry, LogLevel, Result, Transport};
use colored::Colorize;

/// Prints pre-rendered entries to the terminal.
///
/// `Error` and `Critical` entries go to stderr, everything else to stdout.
/// This is also the fallback sink installed when failure-driven eviction
/// empties a logger's transport list; a fresh instance is constructed per
/// logger that needs one.
pub struct ConsoleTransport {
    use_colors: bool,
}

impl ConsoleTransport {
    pub fn new() -> Self {
        Self { use_colors: true }
    }

    pub fn with_colors(use_colors: bool) -> Self {
        Self { use_colors }
    }
}

impl Default for ConsoleTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for ConsoleTransport {
    fn log(&self, entry: &LogEntry) -> Result<()> {
        let line = entry.formatted_message();
        let output = if self.use_colors {
            line.color(entry.level.color_code()).to_string()
        } else {
            line.to_string()
        };

        match entry.level {
            LogLevel::Error | LogLevel::Critical => eprintln!("{}", output),
            _ => println!("{}", output),
        }
        Ok(())
    }

    fn close(&self) -> Result<()> {
        use std::io::Write;
        // Flush both streams since we write to both
        std::io::stdout().flush()?;
        std::io::stderr().flush()?;
        Ok(())
    }

    fn can_close(&self) -> bool {
        true
    }

    fn name(&self) -> &str {
        "console"
    }
}
