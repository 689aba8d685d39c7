use crate::build_planning::domain::Component;
use crate::build_planning::services::CatalogFilter;

/// What a selector widget's dropdown shows for its current state
#[derive(Debug, PartialEq, Eq)]
pub enum Dropdown<'a> {
    /// Dropdown is closed
    Hidden,
    /// Open with no search text: the whole category is listed
    Listing(Vec<&'a Component>),
    /// Open with search text that matched something
    Matches(Vec<&'a Component>),
    /// Open with search text that matched nothing
    NoResults,
}

impl<'a> Dropdown<'a> {
    /// Components offered for picking, empty when hidden or nothing matched
    pub fn items(&self) -> &[&'a Component] {
        match self {
            Dropdown::Listing(items) | Dropdown::Matches(items) => items,
            Dropdown::Hidden | Dropdown::NoResults => &[],
        }
    }
}

/// Local state of one slot's search-and-pick widget.
///
/// Created when the widget mounts and dropped with it. Blur dismisses
/// immediately; there is no pending-click window to wait for outside a UI.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectorSession {
    search_term: String,
    dropdown_open: bool,
}

impl SelectorSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn is_open(&self) -> bool {
        self.dropdown_open
    }

    pub fn focus(&mut self) {
        self.dropdown_open = true;
    }

    pub fn input(&mut self, text: &str) {
        self.search_term = text.to_string();
    }

    pub fn blur(&mut self) {
        self.dismiss();
    }

    pub fn click_outside(&mut self) {
        self.dismiss();
    }

    /// Picks a component: the widget closes and forgets its search text
    pub fn choose(&mut self, component: &Component) -> Component {
        self.dismiss();
        component.clone()
    }

    /// The slot was cleared: reset and take focus again, which reopens the dropdown
    pub fn clear(&mut self) {
        self.dismiss();
        self.focus();
    }

    pub fn dropdown<'a>(&self, components: &'a [Component]) -> Dropdown<'a> {
        if !self.dropdown_open {
            return Dropdown::Hidden;
        }

        if self.search_term.is_empty() {
            return Dropdown::Listing(components.iter().collect());
        }

        let matches = CatalogFilter::selector().apply(components, &self.search_term);
        if matches.is_empty() {
            Dropdown::NoResults
        } else {
            Dropdown::Matches(matches)
        }
    }

    fn dismiss(&mut self) {
        self.dropdown_open = false;
        self.search_term.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn components() -> Vec<Component> {
        vec![
            Component::new("c1".to_string(), "Ryzen 5 7600".to_string(), "AMD".to_string(), 3_200_000)
                .unwrap(),
            Component::new("c2".to_string(), "i5-13400F".to_string(), "Intel".to_string(), 2_900_000)
                .unwrap(),
        ]
    }

    #[test]
    fn test_new_session_is_hidden() {
        let components = components();
        let session = SelectorSession::new();
        assert_eq!(session.dropdown(&components), Dropdown::Hidden);
    }

    #[test]
    fn test_typing_without_focus_stays_hidden() {
        let components = components();
        let mut session = SelectorSession::new();
        session.input("amd");
        assert_eq!(session.dropdown(&components), Dropdown::Hidden);
    }

    #[test]
    fn test_focus_with_empty_text_lists_everything() {
        let components = components();
        let mut session = SelectorSession::new();
        session.focus();

        let dropdown = session.dropdown(&components);
        assert!(matches!(dropdown, Dropdown::Listing(_)));
        assert_eq!(dropdown.items().len(), 2);
    }

    #[test]
    fn test_typing_filters_without_price() {
        let components = components();
        let mut session = SelectorSession::new();
        session.focus();

        session.input("intel");
        let dropdown = session.dropdown(&components);
        assert!(matches!(dropdown, Dropdown::Matches(_)));
        assert_eq!(dropdown.items()[0].id().as_str(), "c2");

        session.input("2900000");
        assert_eq!(session.dropdown(&components), Dropdown::NoResults);
        assert!(session.dropdown(&components).items().is_empty());
    }

    #[test]
    fn test_blur_and_click_outside_reset_state() {
        let components = components();
        let mut session = SelectorSession::new();
        session.focus();
        session.input("amd");
        session.blur();
        assert!(!session.is_open());
        assert_eq!(session.search_term(), "");

        session.focus();
        session.input("amd");
        session.click_outside();
        assert_eq!(session.dropdown(&components), Dropdown::Hidden);
    }

    #[test]
    fn test_choose_returns_component_and_closes() {
        let components = components();
        let mut session = SelectorSession::new();
        session.focus();
        session.input("ryzen");

        let chosen = session.choose(&components[0]);
        assert_eq!(chosen.id().as_str(), "c1");
        assert_eq!(session, SelectorSession::new());
    }

    #[test]
    fn test_clear_reopens_with_empty_text() {
        let components = components();
        let mut session = SelectorSession::new();
        session.focus();
        session.input("amd");

        session.clear();
        assert!(session.is_open());
        assert_eq!(session.search_term(), "");
        assert!(matches!(session.dropdown(&components), Dropdown::Listing(_)));
    }
}
