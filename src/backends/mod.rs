//! Logger backend implementations

pub mod discard;
pub mod file;
pub mod memory;
pub mod stdout;

pub use discard::DiscardLogger;
pub use file::{FileLogger, FileLoggers};
pub use memory::MemoryLogger;
pub use stdout::StdoutLogger;

use crate::core::Prefix;
use colored::Colorize;

/// Render a leveled console line: tag, message, newline
pub(crate) fn format_line(prefix: Prefix, message: &str, use_colors: bool) -> String {
    if use_colors {
        format!("{}{}\n", prefix.tag.color(prefix.color).bold(), message)
    } else {
        format!("{}{}\n", prefix.tag, message)
    }
}
