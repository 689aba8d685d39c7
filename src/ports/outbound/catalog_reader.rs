use crate::build_planning::domain::Catalog;
use crate::shared::Result;

/// CatalogReader port for loading the static component catalog
///
/// The catalog is loaded once at startup and treated as read-only afterwards.
pub trait CatalogReader {
    /// Loads and validates the catalog
    ///
    /// # Errors
    /// Returns an error if:
    /// - The catalog source cannot be read
    /// - The content does not follow the catalog schema
    /// - A component or category fails domain validation
    fn read_catalog(&self) -> Result<Catalog>;

    /// Human readable description of where the catalog comes from
    fn source_description(&self) -> String;
}

impl<T: CatalogReader + ?Sized> CatalogReader for Box<T> {
    fn read_catalog(&self) -> Result<Catalog> {
        (**self).read_catalog()
    }

    fn source_description(&self) -> String {
        (**self).source_description()
    }
}
