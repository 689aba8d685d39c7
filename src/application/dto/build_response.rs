use crate::build_planning::domain::{Build, Catalog, QuoteMetadata};

/// BuildResponse - the assembled build together with the catalog it came from
#[derive(Debug, Clone)]
pub struct BuildResponse {
    pub catalog: Catalog,
    pub build: Build,
    pub metadata: QuoteMetadata,
}

impl BuildResponse {
    pub fn new(catalog: Catalog, build: Build, metadata: QuoteMetadata) -> Self {
        Self {
            catalog,
            build,
            metadata,
        }
    }
}
