use super::selector_session::{Dropdown, SelectorSession};
use crate::build_planning::domain::{Build, Catalog, Component, Price, Slot};
use crate::shared::Result;

/// The builder page: the catalog, the current build, and one selector per slot.
///
/// Each event is applied synchronously; derived values such as the total are
/// recomputed from the build on every call.
#[derive(Debug, Clone)]
pub struct BuilderSession {
    catalog: Catalog,
    build: Build,
    selectors: [SelectorSession; 8],
}

impl BuilderSession {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            build: Build::new(),
            selectors: Default::default(),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn build(&self) -> &Build {
        &self.build
    }

    pub fn total(&self) -> Price {
        self.build.total()
    }

    pub fn selector(&self, slot: Slot) -> &SelectorSession {
        &self.selectors[slot.index()]
    }

    /// Focuses the slot's selector and types `text` into it
    pub fn search(&mut self, slot: Slot, text: &str) -> Dropdown<'_> {
        let selector = self.selector_mut(slot);
        selector.focus();
        selector.input(text);

        let components = self
            .catalog
            .category(slot)
            .map(|c| c.components())
            .unwrap_or(&[]);
        self.selectors[slot.index()].dropdown(components)
    }

    /// Selects the component with `id` from the slot's category
    ///
    /// # Errors
    /// Returns an error if the catalog has no category for the slot or the id
    /// is not part of it; the build is left unchanged.
    pub fn select(&mut self, slot: Slot, id: &str) -> Result<&Component> {
        let component = self.catalog.resolve(slot, id)?;

        let chosen = self.selectors[slot.index()].choose(component);
        self.build = self.build.select(slot, chosen);

        Ok(component)
    }

    pub fn clear(&mut self, slot: Slot) {
        self.build = self.build.clear(slot);
        self.selector_mut(slot).clear();
    }

    pub fn reset_all(&mut self) {
        self.build = self.build.reset_all();
        self.selectors = Default::default();
    }

    fn selector_mut(&mut self, slot: Slot) -> &mut SelectorSession {
        &mut self.selectors[slot.index()]
    }
}
