//! Catalog listing read model

use super::component_view::ComponentView;
use crate::build_planning::domain::Slot;

/// One category of the catalog as shown on the browsing page
#[derive(Debug, Clone)]
pub struct CatalogListingView {
    /// Display name of the category
    pub category_name: String,
    pub slot: Slot,
    /// The search text, `None` when the user has not typed anything
    pub query: Option<String>,
    /// Number of components in the category before filtering
    pub total_in_category: usize,
    /// Matching components, in catalog order
    pub components: Vec<ComponentView>,
}

impl CatalogListingView {
    pub fn match_count(&self) -> usize {
        self.components.len()
    }

    pub fn is_filtered(&self) -> bool {
        self.query.is_some()
    }
}
