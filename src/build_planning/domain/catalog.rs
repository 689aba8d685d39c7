use super::component::{Component, ComponentId};
use super::slot::Slot;
use crate::shared::error::BuildError;
use crate::shared::Result;
use std::collections::HashSet;

/// A named group of components that all belong to one slot
#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    name: String,
    slot: Slot,
    components: Vec<Component>,
}

impl Category {
    /// Creates a category, rejecting duplicate component ids.
    ///
    /// Ids only need to be unique within a category; two categories may reuse an id.
    pub fn new(name: String, slot: Slot, components: Vec<Component>) -> Result<Self> {
        if name.trim().is_empty() {
            anyhow::bail!("Category name for slot '{}' cannot be empty", slot);
        }

        let mut seen: HashSet<&ComponentId> = HashSet::new();
        for component in &components {
            if !seen.insert(component.id()) {
                anyhow::bail!(
                    "Duplicate component id '{}' in category '{}'",
                    component.id(),
                    name
                );
            }
        }

        Ok(Self {
            name,
            slot,
            components,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn slot(&self) -> Slot {
        self.slot
    }

    pub fn components(&self) -> &[Component] {
        &self.components
    }

    pub fn find(&self, id: &str) -> Option<&Component> {
        self.components.iter().find(|c| c.id().as_str() == id)
    }
}

/// The static, read-only component catalog, grouped by category.
///
/// Category order is the display order.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    categories: Vec<Category>,
}

impl Catalog {
    pub fn new(categories: Vec<Category>) -> Result<Self> {
        let mut seen: HashSet<Slot> = HashSet::new();
        for category in &categories {
            if !seen.insert(category.slot()) {
                anyhow::bail!(
                    "Slot '{}' is assigned to more than one category",
                    category.slot()
                );
            }
        }

        Ok(Self { categories })
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn category(&self, slot: Slot) -> Option<&Category> {
        self.categories.iter().find(|c| c.slot() == slot)
    }

    pub fn find_component(&self, slot: Slot, id: &str) -> Option<&Component> {
        self.category(slot).and_then(|c| c.find(id))
    }

    /// Looks up a selection target, failing with the ids the slot does offer
    ///
    /// # Errors
    /// `CategoryNotInCatalog` when the slot has no category, `UnknownComponent`
    /// when the id is not part of it.
    pub fn resolve(&self, slot: Slot, id: &str) -> Result<&Component> {
        let category = self
            .category(slot)
            .ok_or_else(|| BuildError::CategoryNotInCatalog {
                slot: slot.to_string(),
            })?;

        let component = category.find(id).ok_or_else(|| BuildError::UnknownComponent {
            slot: slot.to_string(),
            component_id: id.to_string(),
            available: category
                .components()
                .iter()
                .map(|c| c.id().as_str())
                .collect::<Vec<_>>()
                .join(", "),
        })?;

        Ok(component)
    }

    /// Display name for a slot, falling back to the slot's default label
    pub fn label_for(&self, slot: Slot) -> &str {
        self.category(slot)
            .map(Category::name)
            .unwrap_or_else(|| slot.default_label())
    }

    pub fn component_count(&self) -> usize {
        self.categories.iter().map(|c| c.components().len()).sum()
    }
}
