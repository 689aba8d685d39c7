use crate::application::dto::{BrowseRequest, BrowseResponse};
use crate::build_planning::domain::Catalog;
use crate::build_planning::services::CatalogFilter;
use crate::ports::outbound::{CatalogReader, ProgressReporter};
use crate::shared::error::BuildError;
use crate::shared::Result;

/// BrowseCatalogUseCase - lists one category of the catalog, optionally filtered
///
/// Uses browsing mode: an empty query lists the whole category and price text
/// is searchable.
///
/// # Type Parameters
/// * `CR` - CatalogReader implementation
/// * `PR` - ProgressReporter implementation
pub struct BrowseCatalogUseCase<CR, PR> {
    catalog_reader: CR,
    progress_reporter: PR,
}

impl<CR, PR> BrowseCatalogUseCase<CR, PR>
where
    CR: CatalogReader,
    PR: ProgressReporter,
{
    pub fn new(catalog_reader: CR, progress_reporter: PR) -> Self {
        Self {
            catalog_reader,
            progress_reporter,
        }
    }

    /// Executes the browse use case
    ///
    /// # Errors
    /// Returns an error if the catalog cannot be loaded or has no category for
    /// the requested slot
    pub fn execute(&self, request: BrowseRequest) -> Result<BrowseResponse> {
        let catalog = self.load_catalog()?;

        let category = catalog
            .category(request.slot)
            .ok_or_else(|| BuildError::CategoryNotInCatalog {
                slot: request.slot.to_string(),
            })?;

        let matches: Vec<_> = CatalogFilter::browsing()
            .apply(category.components(), &request.query)
            .into_iter()
            .cloned()
            .collect();

        if !request.query.is_empty() {
            self.progress_reporter.report(&format!(
                "🔍 {} of {} component(s) in {} match \"{}\"",
                matches.len(),
                category.components().len(),
                category.name(),
                request.query
            ));
        }

        Ok(BrowseResponse::new(category.clone(), request.query, matches))
    }

    fn load_catalog(&self) -> Result<Catalog> {
        self.progress_reporter.report(&format!(
            "📖 Loading component catalog from: {}",
            self.catalog_reader.source_description()
        ));

        let catalog = self.catalog_reader.read_catalog()?;

        self.progress_reporter.report(&format!(
            "✅ Loaded {} component(s) in {} categories",
            catalog.component_count(),
            catalog.categories().len()
        ));

        Ok(catalog)
    }
}
