use crate::adapters::outbound::formatters::{JsonFormatter, MarkdownFormatter};
use crate::application::dto::OutputFormat;
use crate::ports::outbound::ReportFormatter;

/// Factory for creating report formatters
///
/// Belongs in the application layer: it picks an infrastructure adapter
/// based on the requested output format.
pub struct FormatterFactory;

impl FormatterFactory {
    /// Creates a formatter for the given format
    ///
    /// # Arguments
    /// * `format` - The requested output format
    /// * `usd_rate` - Rupiah per US dollar, used only for the Markdown estimate
    ///
    /// # Examples
    /// ```
    /// use pc_build_sim::application::dto::OutputFormat;
    /// use pc_build_sim::application::factories::FormatterFactory;
    ///
    /// let formatter = FormatterFactory::create(OutputFormat::Json, 15_000);
    /// ```
    pub fn create(format: OutputFormat, usd_rate: u64) -> Box<dyn ReportFormatter> {
        match format {
            OutputFormat::Markdown => Box::new(MarkdownFormatter::with_usd_rate(usd_rate)),
            OutputFormat::Json => Box::new(JsonFormatter::new()),
        }
    }

    /// Status line shown on stderr before rendering
    pub fn progress_message(format: OutputFormat) -> &'static str {
        match format {
            OutputFormat::Markdown => "📝 Rendering Markdown report...",
            OutputFormat::Json => "📝 Rendering JSON report...",
        }
    }
}
