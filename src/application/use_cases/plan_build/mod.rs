use crate::application::dto::{BuildRequest, BuildResponse, SelectionSpec};
use crate::build_planning::domain::{Build, Catalog};
use crate::build_planning::services::QuoteGenerator;
use crate::ports::outbound::{CatalogReader, ProgressReporter};
use crate::shared::Result;
use std::collections::HashSet;


/// PlanBuildUseCase - assembles a build from `slot=id` selections
///
/// Selections are applied in order to an empty build, so a later selection for
/// the same slot replaces an earlier one.
///
/// # Type Parameters
/// * `CR` - CatalogReader implementation
/// * `PR` - ProgressReporter implementation
pub struct PlanBuildUseCase<CR, PR> {
    catalog_reader: CR,
    progress_reporter: PR,
}

impl<CR, PR> PlanBuildUseCase<CR, PR>
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

    /// Executes the build planning use case
    ///
    /// # Errors
    /// Returns an error if the catalog cannot be loaded or a selection names a
    /// component that does not exist in its slot
    pub fn execute(&self, request: BuildRequest) -> Result<BuildResponse> {
        self.progress_reporter.report(&format!(
            "📖 Loading component catalog from: {}",
            self.catalog_reader.source_description()
        ));
        let catalog = self.catalog_reader.read_catalog()?;

        let build = self.apply_selections(&catalog, &request.selections)?;

        self.progress_reporter.report_completion(&format!(
            "✅ {} of {} slot(s) selected",
            build.selected_count(),
            build.slots().count()
        ));

        let metadata = QuoteGenerator::generate_default_metadata();
        Ok(BuildResponse::new(catalog, build, metadata))
    }

    fn apply_selections(&self, catalog: &Catalog, selections: &[SelectionSpec]) -> Result<Build> {
        let mut seen = HashSet::new();
        let mut build = Build::new();

        for selection in selections {
            let component = catalog.resolve(selection.slot, &selection.component_id)?;

            if !seen.insert(selection.slot) {
                self.progress_reporter.report_error(&format!(
                    "⚠️  Warning: slot '{}' was selected more than once; keeping '{}'",
                    selection.slot, selection.component_id
                ));
            }

            build = build.select(selection.slot, component.clone());
        }

        Ok(build)
    }
}
