use crate::shared::error::BuildError;
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// Maximum catalog file size (10 MB)
pub const MAX_CATALOG_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// Rejects symbolic links before an operation touches the path.
///
/// Uses `symlink_metadata()` so the link itself is inspected, not its target.
pub fn validate_not_symlink(path: &Path, operation: &str) -> Result<()> {
    let metadata = fs::symlink_metadata(path).map_err(|e| BuildError::FileReadError {
        path: path.to_path_buf(),
        details: format!("Failed to read metadata for {} operation: {}", operation, e),
    })?;

    if metadata.is_symlink() {
        return Err(BuildError::SecurityError {
            path: path.to_path_buf(),
            reason: format!("{} operations on symbolic links are not allowed", operation),
            hint: "Point to the real file instead of a link".to_string(),
        }
        .into());
    }

    Ok(())
}

/// Reads a regular file after checking type and size.
///
/// # Arguments
/// * `path` - File to read
/// * `file_description` - Human readable name used in error messages (e.g., "catalog")
/// * `max_size` - Upper bound in bytes
///
/// # Errors
/// Returns an error if the path is a symlink, is not a regular file,
/// exceeds `max_size`, or cannot be read as UTF-8.
pub fn read_regular_file(path: &Path, file_description: &str, max_size: u64) -> Result<String> {
    validate_not_symlink(path, "read")?;

    let metadata = fs::metadata(path).map_err(|e| BuildError::FileReadError {
        path: path.to_path_buf(),
        details: format!("Failed to read {} metadata: {}", file_description, e),
    })?;

    if !metadata.is_file() {
        anyhow::bail!("{} is not a regular file", path.display());
    }

    validate_file_size(metadata.len(), path, max_size)?;

    fs::read_to_string(path).map_err(|e| {
        BuildError::FileReadError {
            path: path.to_path_buf(),
            details: format!("Failed to read {}: {}", file_description, e),
        }
        .into()
    })
}

/// Validates file size is within acceptable limits
pub fn validate_file_size(file_size: u64, path: &Path, max_size: u64) -> Result<()> {
    if file_size > max_size {
        return Err(BuildError::SecurityError {
            path: path.to_path_buf(),
            reason: format!(
                "File is too large ({} bytes). Maximum allowed size is {} bytes.",
                file_size, max_size
            ),
            hint: "Split the catalog or remove unused entries".to_string(),
        }
        .into());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_validate_not_symlink_regular_file() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("catalog.json");
        fs::write(&file_path, "{}").unwrap();

        assert!(validate_not_symlink(&file_path, "read").is_ok());
    }

    #[test]
    fn test_validate_not_symlink_nonexistent() {
        let path = PathBuf::from("/nonexistent/catalog.json");
        assert!(validate_not_symlink(&path, "read").is_err());
    }

    #[cfg(unix)]
    #[test]
    fn test_validate_not_symlink_rejects_link() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("real.json");
        let link = temp_dir.path().join("link.json");
        fs::write(&target, "{}").unwrap();
        std::os::unix::fs::symlink(&target, &link).unwrap();

        let err = validate_not_symlink(&link, "read").unwrap_err();
        assert!(err.to_string().contains("Security violation"));
    }

    #[test]
    fn test_read_regular_file_success() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("catalog.json");
        fs::write(&file_path, "{\"categories\": []}").unwrap();

        let content = read_regular_file(&file_path, "catalog", MAX_CATALOG_FILE_SIZE).unwrap();
        assert_eq!(content, "{\"categories\": []}");
    }

    #[test]
    fn test_read_regular_file_is_directory() {
        let temp_dir = TempDir::new().unwrap();
        let result = read_regular_file(temp_dir.path(), "catalog", MAX_CATALOG_FILE_SIZE);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("not a regular file"));
    }

    #[test]
    fn test_read_regular_file_too_large() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("catalog.json");
        fs::write(&file_path, "0123456789").unwrap();

        let result = read_regular_file(&file_path, "catalog", 5);
        assert!(result.unwrap_err().to_string().contains("too large"));
    }

    #[test]
    fn test_validate_file_size_boundary() {
        let path = PathBuf::from("/test/catalog.json");
        assert!(validate_file_size(MAX_CATALOG_FILE_SIZE, &path, MAX_CATALOG_FILE_SIZE).is_ok());
        assert!(
            validate_file_size(MAX_CATALOG_FILE_SIZE + 1, &path, MAX_CATALOG_FILE_SIZE).is_err()
        );
    }
}
