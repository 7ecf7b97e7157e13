mod core;
mod line_formatter;

pub use core::LogFormatter;
pub use line_formatter::{LineFormatter, LineFormatterConfig};
