use super::currency::{format_idr, format_usd};
use crate::application::read_models::{
    BuildLineView, BuildSummaryView, CatalogListingView, ComponentView, QuoteMetadataView,
};
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;

/// Rupiah per US dollar when no rate is configured
pub const DEFAULT_USD_RATE: u64 = 15_000;

/// Markdown table header for a category listing
const LISTING_TABLE_HEADER: &str = "| Brand | Name | Specs | Price | Image |\n";

/// Markdown table separator line for a category listing
const LISTING_TABLE_SEPARATOR: &str = "|-------|------|-------|------:|-------|\n";

/// Markdown table header for a build summary
const BUILD_TABLE_HEADER: &str = "| Slot | Component | Specs | Price |\n";

/// Markdown table separator line for a build summary
const BUILD_TABLE_SEPARATOR: &str = "|------|-----------|-------|------:|\n";

/// MarkdownFormatter adapter rendering listings and quotes as Markdown tables
///
/// Prices are shown in rupiah with `.` grouping. Build summaries with a
/// non-zero total also carry a rough US dollar estimate.
pub struct MarkdownFormatter {
    usd_rate: u64,
}

impl MarkdownFormatter {
    pub fn new() -> Self {
        Self::with_usd_rate(DEFAULT_USD_RATE)
    }

    pub fn with_usd_rate(usd_rate: u64) -> Self {
        Self { usd_rate }
    }

    /// Escapes pipe characters and newlines for safe Markdown table rendering
    fn escape_markdown_table_cell(text: &str) -> String {
        text.replace('\\', "\\\\")
            .replace('|', "\\|")
            .replace("\r\n", " ")
            .replace(['\r', '\n'], " ")
    }

    fn image_cell(component: &ComponentView) -> &'static str {
        if component.image.is_some() {
            "🖼️"
        } else {
            "No image"
        }
    }
}

impl Default for MarkdownFormatter {
    fn default() -> Self {
        Self::new()
    }
}

/// Helper methods for rendering sections
impl MarkdownFormatter {
    fn render_listing_summary(&self, output: &mut String, listing: &CatalogListingView) {
        match &listing.query {
            Some(query) => output.push_str(&format!(
                "Showing {} result(s) for \"{}\" out of {} component(s).\n\n",
                listing.match_count(),
                Self::escape_markdown_table_cell(query),
                listing.total_in_category
            )),
            None => output.push_str(&format!(
                "{} component(s) available.\n\n",
                listing.total_in_category
            )),
        }
    }

    fn render_listing_table(&self, output: &mut String, components: &[ComponentView]) {
        output.push_str(LISTING_TABLE_HEADER);
        output.push_str(LISTING_TABLE_SEPARATOR);

        for component in components {
            output.push_str(&format!(
                "| {} | {} | {} | {} | {} |\n",
                Self::escape_markdown_table_cell(&component.brand),
                Self::escape_markdown_table_cell(&component.name),
                Self::escape_markdown_table_cell(component.specs.as_deref().unwrap_or("")),
                format_idr(component.price),
                Self::image_cell(component)
            ));
        }
        output.push('\n');
    }

    fn render_quote_metadata(&self, output: &mut String, metadata: &QuoteMetadataView) {
        output.push_str(&format!("- Quote ID: `{}`\n", metadata.quote_id));
        output.push_str(&format!("- Generated: {}\n", metadata.timestamp));
        output.push_str(&format!(
            "- Tool: {} {}\n\n",
            metadata.tool_name, metadata.tool_version
        ));
    }

    fn render_build_line(&self, output: &mut String, line: &BuildLineView) {
        let label = Self::escape_markdown_table_cell(&line.label);
        match &line.component {
            Some(component) => output.push_str(&format!(
                "| {} | {} {} | {} | {} |\n",
                label,
                Self::escape_markdown_table_cell(&component.brand),
                Self::escape_markdown_table_cell(&component.name),
                Self::escape_markdown_table_cell(component.specs.as_deref().unwrap_or("")),
                format_idr(component.price)
            )),
            None => output.push_str(&format!("| {} | _Not selected_ |  | - |\n", label)),
        }
    }

    fn render_total(&self, output: &mut String, summary: &BuildSummaryView) {
        output.push_str(&format!(
            "| **TOTAL PRICE** |  |  | **{}** |\n\n",
            format_idr(summary.total)
        ));

        if summary.total > 0 {
            if let Some(usd) = format_usd(summary.total, self.usd_rate) {
                output.push_str(&format!("≈ {} USD\n\n", usd));
            }
        }

        output.push_str(&format!(
            "{} of {} slot(s) selected.\n",
            summary.selected_count,
            summary.slot_count()
        ));
    }
}

impl ReportFormatter for MarkdownFormatter {
    fn format_listing(&self, listing: &CatalogListingView) -> Result<String> {
        let mut output = String::new();
        output.push_str(&format!(
            "# {}\n\n",
            Self::escape_markdown_table_cell(&listing.category_name)
        ));
        self.render_listing_summary(&mut output, listing);

        if listing.components.is_empty() {
            match &listing.query {
                Some(query) => output.push_str(&format!(
                    "No components found matching \"{}\".\n",
                    Self::escape_markdown_table_cell(query)
                )),
                None => output.push_str("No components found.\n"),
            }
        } else {
            self.render_listing_table(&mut output, &listing.components);
        }

        Ok(output)
    }

    fn format_build(&self, summary: &BuildSummaryView) -> Result<String> {
        let mut output = String::new();
        output.push_str("# PC Build Quote\n\n");
        self.render_quote_metadata(&mut output, &summary.metadata);

        output.push_str("## Components\n\n");
        output.push_str(BUILD_TABLE_HEADER);
        output.push_str(BUILD_TABLE_SEPARATOR);
        for line in &summary.lines {
            self.render_build_line(&mut output, line);
        }
        self.render_total(&mut output, summary);

        Ok(output)
    }
}
