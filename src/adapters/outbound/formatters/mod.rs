/// Formatter adapters for the report output formats
mod currency;
mod json_formatter;
mod markdown_formatter;

pub use currency::{format_idr, format_usd};
pub use json_formatter::JsonFormatter;
pub use markdown_formatter::{MarkdownFormatter, DEFAULT_USD_RATE};
