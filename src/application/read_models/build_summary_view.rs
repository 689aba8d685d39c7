//! Build summary read model

use super::component_view::ComponentView;
use crate::build_planning::domain::Slot;

/// The "your build" panel: one line per slot plus the total
#[derive(Debug, Clone)]
pub struct BuildSummaryView {
    pub metadata: QuoteMetadataView,
    /// Lines in display order (catalog category order, then any slot the catalog lacks)
    pub lines: Vec<BuildLineView>,
    /// Sum of the selected prices in whole rupiah
    pub total: u64,
    pub selected_count: usize,
}

impl BuildSummaryView {
    pub fn slot_count(&self) -> usize {
        self.lines.len()
    }

    pub fn is_complete(&self) -> bool {
        self.selected_count == self.lines.len()
    }
}

/// A single slot of the build summary
#[derive(Debug, Clone)]
pub struct BuildLineView {
    pub slot: Slot,
    pub label: String,
    pub component: Option<ComponentView>,
}

/// View representation of quote metadata
#[derive(Debug, Clone)]
pub struct QuoteMetadataView {
    pub timestamp: String,
    pub tool_name: String,
    pub tool_version: String,
    pub quote_id: String,
}
