use crate::build_planning::domain::Component;

/// How a filter treats an empty query and which fields it matches.
///
/// The catalog page lists everything for an empty query; a selector widget
/// shows nothing until the user types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterMode {
    /// Catalog browsing: empty query returns every component, price text is searchable
    ShowAll,
    /// Selector widget: empty query returns nothing, price is not searched
    ShowOnFocusOnly,
}

impl FilterMode {
    fn matches_price(self) -> bool {
        matches!(self, FilterMode::ShowAll)
    }
}

/// CatalogFilter - case-insensitive free-text search over components
///
/// Matches the query as a substring of name, brand, or specs (when present),
/// plus the plain decimal price in [`FilterMode::ShowAll`]. Results keep the
/// input order.
#[derive(Debug, Clone, Copy)]
pub struct CatalogFilter {
    mode: FilterMode,
}

impl CatalogFilter {
    pub fn new(mode: FilterMode) -> Self {
        Self { mode }
    }

    pub fn browsing() -> Self {
        Self::new(FilterMode::ShowAll)
    }

    pub fn selector() -> Self {
        Self::new(FilterMode::ShowOnFocusOnly)
    }

    pub fn mode(&self) -> FilterMode {
        self.mode
    }

    /// Returns the matching components in their original order
    pub fn apply<'a>(&self, components: &'a [Component], query: &str) -> Vec<&'a Component> {
        let needle = query.to_lowercase();
        components
            .iter()
            .filter(|c| self.matches_lowered(c, query, &needle))
            .collect()
    }

    /// Checks a single component against `query`.
    ///
    /// An empty query matches everything when browsing and nothing in a selector.
    pub fn matches(&self, component: &Component, query: &str) -> bool {
        self.matches_lowered(component, query, &query.to_lowercase())
    }

    fn matches_lowered(&self, component: &Component, raw: &str, needle: &str) -> bool {
        if raw.is_empty() {
            return matches!(self.mode, FilterMode::ShowAll);
        }

        component.name().to_lowercase().contains(needle)
            || component.brand().to_lowercase().contains(needle)
            || component
                .specs()
                .is_some_and(|s| s.to_lowercase().contains(needle))
            || (self.mode.matches_price()
                && component.price().amount().to_string().contains(raw))
    }
}
