pub mod catalog_filter;
pub mod quote_generator;

pub use catalog_filter::{CatalogFilter, FilterMode};
pub use quote_generator::QuoteGenerator;
