/// Catalog adapters: the on-disk schema and the built-in catalog
mod catalog_document;
mod embedded_catalog;

pub use catalog_document::{parse_catalog, CatalogFormat};
pub use embedded_catalog::EmbeddedCatalog;
