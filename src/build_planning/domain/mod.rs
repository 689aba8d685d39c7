pub mod build;
pub mod catalog;
pub mod component;
pub mod quote_metadata;
pub mod slot;

pub use build::Build;
pub use catalog::{Catalog, Category};
pub use component::{Component, ComponentId, Price, MAX_PRICE};
pub use quote_metadata::QuoteMetadata;
pub use slot::Slot;
