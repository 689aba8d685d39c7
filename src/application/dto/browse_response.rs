use crate::build_planning::domain::{Category, Component};

/// BrowseResponse - the browsed category and the components that matched
#[derive(Debug, Clone)]
pub struct BrowseResponse {
    pub category: Category,
    pub query: String,
    /// Matching components in catalog order
    pub matches: Vec<Component>,
}

impl BrowseResponse {
    pub fn new(category: Category, query: String, matches: Vec<Component>) -> Self {
        Self {
            category,
            query,
            matches,
        }
    }
}
