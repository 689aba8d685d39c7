//! pc-build-sim - PC component catalog browser and build price simulator
//!
//! This library models a PC build as eight fixed slots (CPU, GPU, motherboard,
//! RAM, storage, PSU, case, cooling), prices it from a static component
//! catalog, and filters catalog categories by free-text search.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`build_planning`): Build state, catalog model and filtering
//! - **Application Layer** (`application`): Use cases, sessions and read models
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use pc_build_sim::prelude::*;
//!
//! # fn main() -> Result<()> {
//! let use_case = PlanBuildUseCase::new(EmbeddedCatalog::new(), StderrProgressReporter::new());
//!
//! let request = BuildRequest::new(vec![
//!     SelectionSpec::new(Slot::Cpu, "cpu-ryzen5-7600"),
//!     SelectionSpec::new(Slot::Gpu, "gpu-rtx4060"),
//! ]);
//! let response = use_case.execute(request)?;
//! assert_eq!(response.build.total().amount(), 8_200_000);
//!
//! let summary =
//!     ReadModelBuilder::build_summary(&response.catalog, &response.build, &response.metadata);
//! println!("{}", MarkdownFormatter::new().format_build(&summary)?);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod build_planning;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::inbound::InteractiveShell;
    pub use crate::adapters::outbound::catalog::{parse_catalog, CatalogFormat, EmbeddedCatalog};
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemCatalogReader, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{JsonFormatter, MarkdownFormatter};
    pub use crate::application::dto::{
        BrowseRequest, BrowseResponse, BuildRequest, BuildResponse, OutputFormat, SelectionSpec,
    };
    pub use crate::application::read_models::ReadModelBuilder;
    pub use crate::application::sessions::{
        BrowseSession, BuilderSession, Dropdown, SelectorSession,
    };
    pub use crate::application::use_cases::{BrowseCatalogUseCase, PlanBuildUseCase};
    pub use crate::build_planning::domain::{
        Build, Catalog, Category, Component, ComponentId, Price, QuoteMetadata, Slot,
    };
    pub use crate::build_planning::services::{CatalogFilter, FilterMode, QuoteGenerator};
    pub use crate::ports::outbound::{
        CatalogReader, OutputPresenter, ProgressReporter, ReportFormatter,
    };
    pub use crate::shared::Result;
}
