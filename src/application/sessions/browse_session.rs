use crate::build_planning::domain::{Catalog, Component, Slot};
use crate::build_planning::services::CatalogFilter;

/// State of the catalog browsing page: the active category tab and search text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrowseSession {
    slot: Slot,
    search_term: String,
}

impl Default for BrowseSession {
    fn default() -> Self {
        Self::new(Slot::Cpu)
    }
}

impl BrowseSession {
    pub fn new(slot: Slot) -> Self {
        Self {
            slot,
            search_term: String::new(),
        }
    }

    pub fn slot(&self) -> Slot {
        self.slot
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    /// Switching tabs always starts a fresh search
    pub fn switch_category(&mut self, slot: Slot) {
        self.slot = slot;
        self.search_term.clear();
    }

    pub fn set_search(&mut self, text: &str) {
        self.search_term = text.to_string();
    }

    pub fn clear_search(&mut self) {
        self.search_term.clear();
    }

    /// Components of the active category matching the search text
    pub fn listing<'a>(&self, catalog: &'a Catalog) -> Vec<&'a Component> {
        catalog
            .category(self.slot)
            .map(|c| CatalogFilter::browsing().apply(c.components(), &self.search_term))
            .unwrap_or_default()
    }
}
