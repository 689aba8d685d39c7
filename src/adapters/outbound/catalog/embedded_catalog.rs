use super::catalog_document::{parse_catalog, CatalogFormat};
use crate::build_planning::domain::Catalog;
use crate::ports::outbound::CatalogReader;
use crate::shared::Result;
use anyhow::Context;

const DEFAULT_CATALOG_JSON: &str = include_str!("default_catalog.json");

/// EmbeddedCatalog adapter serving the catalog compiled into the binary
pub struct EmbeddedCatalog;

impl EmbeddedCatalog {
    pub fn new() -> Self {
        Self
    }
}

impl Default for EmbeddedCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogReader for EmbeddedCatalog {
    fn read_catalog(&self) -> Result<Catalog> {
        parse_catalog(DEFAULT_CATALOG_JSON, CatalogFormat::Json)
            .context("built-in catalog is invalid")
    }

    fn source_description(&self) -> String {
        "built-in catalog".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build_planning::domain::Slot;

    #[test]
    fn test_embedded_catalog_is_valid() {
        let catalog = EmbeddedCatalog::new().read_catalog().unwrap();
        assert_eq!(catalog.categories().len(), 8);
    }

    #[test]
    fn test_embedded_catalog_covers_every_slot() {
        let catalog = EmbeddedCatalog::new().read_catalog().unwrap();
        for slot in Slot::ALL {
            let category = catalog.category(slot).unwrap();
            assert!(!category.components().is_empty(), "{} is empty", slot);
        }
    }

    #[test]
    fn test_embedded_catalog_has_entries_without_image() {
        let catalog = EmbeddedCatalog::new().read_catalog().unwrap();
        let components: Vec<_> = catalog
            .categories()
            .iter()
            .flat_map(|c| c.components())
            .collect();
        assert!(components.iter().any(|c| c.image().is_some()));
        assert!(components.iter().any(|c| c.image().is_none()));
    }

    #[test]
    fn test_source_description() {
        assert_eq!(EmbeddedCatalog::default().source_description(), "built-in catalog");
    }
}
