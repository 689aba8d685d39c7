//! On-disk catalog schema shared by the JSON and TOML readers

use crate::build_planning::domain::{Catalog, Category, Component, Slot};
use crate::shared::Result;
use anyhow::Context;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct CatalogDocument {
    categories: Vec<CategoryRecord>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct CategoryRecord {
    name: String,
    key: Slot,
    #[serde(default)]
    components: Vec<ComponentRecord>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ComponentRecord {
    id: String,
    name: String,
    brand: String,
    price: u64,
    specs: Option<String>,
    image: Option<String>,
}

/// Catalog file encodings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogFormat {
    Json,
    Toml,
}

impl CatalogDocument {
    pub(crate) fn parse(content: &str, format: CatalogFormat) -> Result<Self> {
        match format {
            CatalogFormat::Json => serde_json::from_str(content).context("invalid JSON catalog"),
            CatalogFormat::Toml => toml::from_str(content).context("invalid TOML catalog"),
        }
    }

    /// Converts the raw records into validated domain objects
    pub(crate) fn into_catalog(self) -> Result<Catalog> {
        let categories = self
            .categories
            .into_iter()
            .map(CategoryRecord::into_category)
            .collect::<Result<Vec<_>>>()?;

        Catalog::new(categories)
    }
}

impl CategoryRecord {
    fn into_category(self) -> Result<Category> {
        let slot = self.key;
        let components = self
            .components
            .into_iter()
            .map(ComponentRecord::into_component)
            .collect::<Result<Vec<_>>>()
            .with_context(|| format!("invalid component in category '{}'", slot))?;

        Category::new(self.name, slot, components)
    }
}

impl ComponentRecord {
    fn into_component(self) -> Result<Component> {
        let mut component = Component::new(self.id, self.name, self.brand, self.price)?;
        if let Some(specs) = self.specs {
            component = component.with_specs(specs);
        }
        if let Some(image) = self.image {
            component = component.with_image(image);
        }
        Ok(component)
    }
}

/// Parses and validates a catalog in one step
pub fn parse_catalog(content: &str, format: CatalogFormat) -> Result<Catalog> {
    CatalogDocument::parse(content, format)?.into_catalog()
}

#[cfg(test)]
mod tests {
    use super::*;

    const JSON: &str = r#"{
        "categories": [
            {
                "name": "Processor",
                "key": "cpu",
                "components": [
                    { "id": "c1", "name": "Ryzen 5 7600", "brand": "AMD", "price": 3200000,
                      "specs": "6C/12T", "image": "/images/cpu/7600.png" },
                    { "id": "c2", "name": "i5-13400F", "brand": "Intel", "price": 2900000 }
                ]
            },
            { "name": "Cooling", "key": "cooling" }
        ]
    }"#;

    #[test]
    fn test_parse_json() {
        let catalog = parse_catalog(JSON, CatalogFormat::Json).unwrap();
        assert_eq!(catalog.categories().len(), 2);

        let ryzen = catalog.find_component(Slot::Cpu, "c1").unwrap();
        assert_eq!(ryzen.specs(), Some("6C/12T"));
        assert_eq!(ryzen.image(), Some("/images/cpu/7600.png"));

        let intel = catalog.find_component(Slot::Cpu, "c2").unwrap();
        assert!(intel.specs().is_none());
        assert!(intel.image().is_none());

        assert!(catalog.category(Slot::Cooling).unwrap().components().is_empty());
    }

    #[test]
    fn test_parse_toml() {
        let toml = r#"
[[categories]]
name = "Power Supply"
key = "psu"

[[categories.components]]
id = "p1"
name = "RM750e"
brand = "Corsair"
price = 1650000
specs = "750W 80+ Gold"
"#;
        let catalog = parse_catalog(toml, CatalogFormat::Toml).unwrap();
        let psu = catalog.find_component(Slot::Psu, "p1").unwrap();
        assert_eq!(psu.price().amount(), 1_650_000);
        assert_eq!(psu.specs(), Some("750W 80+ Gold"));
    }

    #[test]
    fn test_unknown_slot_key_rejected() {
        let json = r#"{ "categories": [ { "name": "Monitor", "key": "monitor" } ] }"#;
        assert!(parse_catalog(json, CatalogFormat::Json).is_err());
    }

    #[test]
    fn test_negative_price_rejected() {
        let json = r#"{ "categories": [ { "name": "CPU", "key": "cpu", "components": [
            { "id": "c1", "name": "X", "brand": "Y", "price": -1 } ] } ] }"#;
        assert!(parse_catalog(json, CatalogFormat::Json).is_err());
    }

    #[test]
    fn test_unknown_field_rejected() {
        let json = r#"{ "categories": [], "currency": "IDR" }"#;
        assert!(parse_catalog(json, CatalogFormat::Json).is_err());
    }

    #[test]
    fn test_domain_validation_reported_with_category() {
        let json = r#"{ "categories": [ { "name": "CPU", "key": "cpu", "components": [
            { "id": "c1", "name": "", "brand": "Y", "price": 1 } ] } ] }"#;
        let err = parse_catalog(json, CatalogFormat::Json).unwrap_err();
        let chain = format!("{:#}", err);
        assert!(chain.contains("invalid component in category 'cpu'"));
        assert!(chain.contains("name cannot be empty"));
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let json = r#"{ "categories": [ { "name": "CPU", "key": "cpu", "components": [
            { "id": "c1", "name": "A", "brand": "Y", "price": 1 },
            { "id": "c1", "name": "B", "brand": "Y", "price": 2 } ] } ] }"#;
        let err = parse_catalog(json, CatalogFormat::Json).unwrap_err();
        assert!(err.to_string().contains("Duplicate component id"));
    }
}
