use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - the requested report was produced
    Success = 0,
    /// Application error (catalog load failure, unknown component, file I/O error, etc.)
    ApplicationError = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::ApplicationError => write!(f, "Application Error (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
        }
    }
}

/// Application-specific errors for catalog loading and build planning.
///
/// Every variant carries a hint so the CLI can print something actionable.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Catalog file not found: {path}\n\n💡 Hint: {suggestion}")]
    CatalogNotFound { path: PathBuf, suggestion: String },

    #[error("Failed to parse catalog file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the catalog follows the documented JSON/TOML schema")]
    CatalogParseError { path: PathBuf, details: String },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Security violation: {path}\nReason: {reason}\n\n💡 Hint: {hint}")]
    SecurityError {
        path: PathBuf,
        reason: String,
        hint: String,
    },

    #[error("Unknown component '{component_id}' for slot '{slot}'\n\n💡 Hint: Available ids: {available}")]
    UnknownComponent {
        slot: String,
        component_id: String,
        available: String,
    },

    #[error("The catalog has no category for slot '{slot}'\n\n💡 Hint: Check the 'key' fields of the catalog categories")]
    CategoryNotInCatalog { slot: String },

    #[error("Invalid selection: '{input}'\nReason: {reason}\n\n💡 Hint: Use the form SLOT=ID, e.g. cpu=cpu-ryzen5-7600")]
    InvalidSelection { input: String, reason: String },

    /// Rejected configuration file value
    #[error("Validation error: {message}")]
    Validation { message: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_exit_code_values() {
        assert_eq!(ExitCode::Success.as_i32(), 0);
        assert_eq!(ExitCode::ApplicationError.as_i32(), 1);
        assert_eq!(ExitCode::InvalidArguments.as_i32(), 2);
    }

    #[test]
    fn test_exit_code_display() {
        assert_eq!(format!("{}", ExitCode::Success), "Success (0)");
        assert_eq!(
            format!("{}", ExitCode::ApplicationError),
            "Application Error (1)"
        );
        assert_eq!(
            format!("{}", ExitCode::InvalidArguments),
            "Invalid Arguments (2)"
        );
    }

    #[test]
    fn test_catalog_not_found_display() {
        let error = BuildError::CatalogNotFound {
            path: PathBuf::from("/test/catalog.json"),
            suggestion: "Test suggestion".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Catalog file not found"));
        assert!(display.contains("/test/catalog.json"));
        assert!(display.contains("💡 Hint:"));
        assert!(display.contains("Test suggestion"));
    }

    #[test]
    fn test_catalog_parse_error_display() {
        let error = BuildError::CatalogParseError {
            path: PathBuf::from("/test/catalog.toml"),
            details: "expected a table".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Failed to parse catalog file"));
        assert!(display.contains("/test/catalog.toml"));
        assert!(display.contains("expected a table"));
    }

    #[test]
    fn test_file_write_error_display() {
        let error = BuildError::FileWriteError {
            path: PathBuf::from("/test/output.md"),
            details: "Permission denied".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Failed to write to file"));
        assert!(display.contains("/test/output.md"));
        assert!(display.contains("Permission denied"));
    }

    #[test]
    fn test_unknown_component_display() {
        let error = BuildError::UnknownComponent {
            slot: "cpu".to_string(),
            component_id: "cpu-missing".to_string(),
            available: "cpu-a, cpu-b".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Unknown component 'cpu-missing' for slot 'cpu'"));
        assert!(display.contains("cpu-a, cpu-b"));
    }

    #[test]
    fn test_category_not_in_catalog_display() {
        let error = BuildError::CategoryNotInCatalog {
            slot: "cooling".to_string(),
        };
        assert!(format!("{}", error).contains("no category for slot 'cooling'"));
    }

    #[test]
    fn test_invalid_selection_display() {
        let error = BuildError::InvalidSelection {
            input: "cpu".to_string(),
            reason: "missing '='".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Invalid selection: 'cpu'"));
        assert!(display.contains("missing '='"));
        assert!(display.contains("SLOT=ID"));
    }

    #[test]
    fn test_security_error_display() {
        let error = BuildError::SecurityError {
            path: PathBuf::from("/test/symlink"),
            reason: "Symbolic links are not allowed".to_string(),
            hint: "Use a regular file instead".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Security violation"));
        assert!(display.contains("/test/symlink"));
        assert!(display.contains("Use a regular file instead"));
    }
}
