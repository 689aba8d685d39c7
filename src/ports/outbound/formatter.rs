use crate::application::read_models::{BuildSummaryView, CatalogListingView};
use crate::shared::Result;

/// ReportFormatter port for rendering read models
///
/// Currency display lives entirely behind this port; read models carry raw
/// integer prices.
pub trait ReportFormatter {
    /// Formats a catalog listing (one category, optionally filtered)
    fn format_listing(&self, listing: &CatalogListingView) -> Result<String>;

    /// Formats a build summary with per-slot lines and the total
    fn format_build(&self, summary: &BuildSummaryView) -> Result<String>;
}
