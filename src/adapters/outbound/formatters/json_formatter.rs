use crate::application::read_models::{
    BuildSummaryView, CatalogListingView, ComponentView, QuoteMetadataView,
};
use crate::build_planning::domain::Slot;
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;
use serde::Serialize;

#[derive(Debug, Serialize)]
struct ListingDocument<'a> {
    category: &'a str,
    slot: Slot,
    #[serde(skip_serializing_if = "Option::is_none")]
    query: Option<&'a str>,
    total_in_category: usize,
    match_count: usize,
    components: Vec<ComponentRecord<'a>>,
}

#[derive(Debug, Serialize)]
struct ComponentRecord<'a> {
    id: &'a str,
    name: &'a str,
    brand: &'a str,
    price: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    specs: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    image: Option<&'a str>,
}

#[derive(Debug, Serialize)]
struct QuoteDocument<'a> {
    metadata: MetadataRecord<'a>,
    slots: Vec<SlotRecord<'a>>,
    total: u64,
    selected_count: usize,
    complete: bool,
}

#[derive(Debug, Serialize)]
struct MetadataRecord<'a> {
    quote_id: &'a str,
    timestamp: &'a str,
    tool: ToolRecord<'a>,
}

#[derive(Debug, Serialize)]
struct ToolRecord<'a> {
    name: &'a str,
    version: &'a str,
}

#[derive(Debug, Serialize)]
struct SlotRecord<'a> {
    slot: Slot,
    label: &'a str,
    component: Option<ComponentRecord<'a>>,
}

impl<'a> From<&'a ComponentView> for ComponentRecord<'a> {
    fn from(view: &'a ComponentView) -> Self {
        Self {
            id: &view.id,
            name: &view.name,
            brand: &view.brand,
            price: view.price,
            specs: view.specs.as_deref(),
            image: view.image.as_deref(),
        }
    }
}

impl<'a> From<&'a QuoteMetadataView> for MetadataRecord<'a> {
    fn from(view: &'a QuoteMetadataView) -> Self {
        Self {
            quote_id: &view.quote_id,
            timestamp: &view.timestamp,
            tool: ToolRecord {
                name: &view.tool_name,
                version: &view.tool_version,
            },
        }
    }
}

/// JsonFormatter adapter emitting machine-readable listings and quotes
///
/// Prices stay raw integer rupiah; no currency formatting is applied.
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for JsonFormatter {
    fn format_listing(&self, listing: &CatalogListingView) -> Result<String> {
        let document = ListingDocument {
            category: &listing.category_name,
            slot: listing.slot,
            query: listing.query.as_deref(),
            total_in_category: listing.total_in_category,
            match_count: listing.match_count(),
            components: listing.components.iter().map(ComponentRecord::from).collect(),
        };
        Ok(serde_json::to_string_pretty(&document)?)
    }

    fn format_build(&self, summary: &BuildSummaryView) -> Result<String> {
        let document = QuoteDocument {
            metadata: MetadataRecord::from(&summary.metadata),
            slots: summary
                .lines
                .iter()
                .map(|line| SlotRecord {
                    slot: line.slot,
                    label: &line.label,
                    component: line.component.as_ref().map(ComponentRecord::from),
                })
                .collect(),
            total: summary.total,
            selected_count: summary.selected_count,
            complete: summary.is_complete(),
        };
        Ok(serde_json::to_string_pretty(&document)?)
    }
}
