//! Read models for CQRS-lite pattern
//!
//! View-optimized structs handed to formatters. They are recomputed from
//! current state on every request; nothing here is cached.

pub mod build_summary_view;
pub mod catalog_listing_view;
pub mod component_view;
pub mod read_model_builder;

pub use build_summary_view::{BuildLineView, BuildSummaryView, QuoteMetadataView};
pub use catalog_listing_view::CatalogListingView;
pub use component_view::ComponentView;
pub use read_model_builder::ReadModelBuilder;
