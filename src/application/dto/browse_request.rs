use crate::build_planning::domain::Slot;

/// BrowseRequest - which category to list and the search text to apply
#[derive(Debug, Clone)]
pub struct BrowseRequest {
    pub slot: Slot,
    /// Raw search text; empty lists the whole category
    pub query: String,
}

impl BrowseRequest {
    pub fn new(slot: Slot, query: impl Into<String>) -> Self {
        Self {
            slot,
            query: query.into(),
        }
    }
}
