/// Use cases module containing application business logic orchestration
mod browse_catalog;
mod plan_build;

pub use browse_catalog::BrowseCatalogUseCase;
pub use plan_build::PlanBuildUseCase;
