//! Builder for constructing read models from domain objects

use super::build_summary_view::{BuildLineView, BuildSummaryView, QuoteMetadataView};
use super::catalog_listing_view::CatalogListingView;
use super::component_view::ComponentView;
use crate::build_planning::domain::{Build, Catalog, Category, Component, QuoteMetadata, Slot};

/// Transforms domain objects into the views consumed by formatters
pub struct ReadModelBuilder;

impl ReadModelBuilder {
    /// Builds the listing for one category
    ///
    /// # Arguments
    /// * `category` - The category being browsed
    /// * `query` - The raw search text (empty means unfiltered)
    /// * `matches` - Components that passed the filter, in catalog order
    pub fn listing(category: &Category, query: &str, matches: &[&Component]) -> CatalogListingView {
        CatalogListingView {
            category_name: category.name().to_string(),
            slot: category.slot(),
            query: (!query.is_empty()).then(|| query.to_string()),
            total_in_category: category.components().len(),
            components: matches.iter().map(|c| ComponentView::from(*c)).collect(),
        }
    }

    /// Builds the build summary
    ///
    /// Lines follow the catalog's category order; slots the catalog lacks are
    /// appended in canonical order so the summary always covers all eight.
    pub fn build_summary(catalog: &Catalog, build: &Build, metadata: &QuoteMetadata) -> BuildSummaryView {
        let mut order: Vec<Slot> = catalog.categories().iter().map(|c| c.slot()).collect();
        order.extend(Slot::ALL.into_iter().filter(|s| catalog.category(*s).is_none()));

        let lines = order
            .into_iter()
            .map(|slot| BuildLineView {
                slot,
                label: catalog.label_for(slot).to_string(),
                component: build.get(slot).map(ComponentView::from),
            })
            .collect();

        BuildSummaryView {
            metadata: Self::build_metadata(metadata),
            lines,
            total: build.total().amount(),
            selected_count: build.selected_count(),
        }
    }

    fn build_metadata(metadata: &QuoteMetadata) -> QuoteMetadataView {
        QuoteMetadataView {
            timestamp: metadata.timestamp().to_string(),
            tool_name: metadata.tool_name().to_string(),
            tool_version: metadata.tool_version().to_string(),
            quote_id: metadata.quote_id().to_string(),
        }
    }
}
