//! Built-in transport implementations

pub mod console;
pub mod memory;

pub use console::ConsoleTransport;
pub use memory::MemoryTransport;

// Re-export the trait for convenience
pub use crate::core::Transport;
