use crate::adapters::outbound::catalog::{parse_catalog, CatalogFormat};
use crate::build_planning::domain::Catalog;
use crate::ports::outbound::CatalogReader;
use crate::shared::error::BuildError;
use crate::shared::security::{read_regular_file, MAX_CATALOG_FILE_SIZE};
use crate::shared::Result;
use std::path::{Path, PathBuf};

/// FileSystemCatalogReader adapter for loading a catalog file from disk
///
/// The encoding is chosen from the file extension: `.json` or `.toml`.
pub struct FileSystemCatalogReader {
    path: PathBuf,
}

impl FileSystemCatalogReader {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn detect_format(&self) -> Result<CatalogFormat> {
        let extension = self
            .path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);

        match extension.as_deref() {
            Some("json") => Ok(CatalogFormat::Json),
            Some("toml") => Ok(CatalogFormat::Toml),
            _ => Err(BuildError::CatalogParseError {
                path: self.path.clone(),
                details: "Unsupported catalog extension. Expected .json or .toml".to_string(),
            }
            .into()),
        }
    }
}

impl CatalogReader for FileSystemCatalogReader {
    fn read_catalog(&self) -> Result<Catalog> {
        if !self.path.exists() && !self.path.is_symlink() {
            return Err(BuildError::CatalogNotFound {
                path: self.path.clone(),
                suggestion: format!(
                    "Catalog file \"{}\" does not exist.\n   \
                     Check the --catalog option or the 'catalog' entry of your config file.",
                    self.path.display()
                ),
            }
            .into());
        }

        let format = self.detect_format()?;
        let content = read_regular_file(&self.path, "catalog", MAX_CATALOG_FILE_SIZE)?;

        parse_catalog(&content, format).map_err(|e| {
            BuildError::CatalogParseError {
                path: self.path.clone(),
                details: format!("{:#}", e),
            }
            .into()
        })
    }

    fn source_description(&self) -> String {
        self.path.display().to_string()
    }
}
