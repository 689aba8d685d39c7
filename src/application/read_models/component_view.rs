//! Component view struct for read models

use crate::build_planning::domain::Component;

/// View representation of a catalog component
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentView {
    pub id: String,
    pub name: String,
    pub brand: String,
    /// Price in whole rupiah
    pub price: u64,
    pub specs: Option<String>,
    /// Display asset reference; `None` means the placeholder is shown
    pub image: Option<String>,
}

impl From<&Component> for ComponentView {
    fn from(component: &Component) -> Self {
        Self {
            id: component.id().to_string(),
            name: component.name().to_string(),
            brand: component.brand().to_string(),
            price: component.price().amount(),
            specs: component.specs().map(str::to_string),
            image: component.image().map(str::to_string),
        }
    }
}
