//! Configuration file support for pc-build-sim.
//!
//! Provides YAML-based configuration through `pc-build-sim.config.yml` files,
//! including loading, validation, and merging with command-line flags.

use anyhow::Context;
use pc_build_sim::adapters::outbound::formatters::DEFAULT_USD_RATE;
use pc_build_sim::application::dto::OutputFormat;
use pc_build_sim::build_planning::domain::Slot;
use pc_build_sim::shared::error::BuildError;
use pc_build_sim::shared::Result;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::str::FromStr;

pub const CONFIG_FILENAME: &str = "pc-build-sim.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub format: Option<String>,
    /// Relative paths are resolved against the config file's directory.
    pub catalog: Option<PathBuf>,
    pub usd_rate: Option<u64>,
    pub default_category: Option<String>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let mut config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    if let (Some(catalog), Some(base)) = (config.catalog.as_ref(), path.parent()) {
        if catalog.is_relative() {
            config.catalog = Some(base.join(catalog));
        }
    }

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(ref format) = config.format {
        if let Err(e) = OutputFormat::from_str(format) {
            return Err(invalid(format!(
                "Invalid config: format: {}\n\n💡 Hint: Use 'markdown', 'md' or 'json'.",
                e
            )));
        }
    }

    if config.usd_rate == Some(0) {
        return Err(invalid(
            "Invalid config: usd_rate must be greater than 0.\n\n\
             💡 Hint: usd_rate is the number of rupiah per US dollar (e.g., 15000)."
                .to_string(),
        ));
    }

    if let Some(ref category) = config.default_category {
        if let Err(e) = Slot::from_str(category) {
            return Err(invalid(format!("Invalid config: default_category: {}", e)));
        }
    }

    Ok(())
}

fn invalid(message: String) -> anyhow::Error {
    BuildError::Validation { message }.into()
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    let mut keys: Vec<&String> = config.unknown_fields.keys().collect();
    keys.sort();
    for key in keys {
        eprintln!("⚠️  Warning: Unknown config field '{}' will be ignored.", key);
    }
}

/// Effective settings after merging flags, config file and built-in defaults
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub format: OutputFormat,
    /// `None` means the built-in catalog
    pub catalog: Option<PathBuf>,
    pub usd_rate: u64,
    pub default_category: Slot,
}

impl Settings {
    /// Command-line flags win over the config file, which wins over defaults.
    ///
    /// The config has already been validated, so parse failures fall back to
    /// the defaults.
    pub fn resolve(
        cli_format: Option<OutputFormat>,
        cli_catalog: Option<PathBuf>,
        config: Option<ConfigFile>,
    ) -> Self {
        let config = config.unwrap_or_default();

        let format = cli_format
            .or_else(|| config.format.as_deref().and_then(|f| f.parse().ok()))
            .unwrap_or_default();

        let default_category = config
            .default_category
            .as_deref()
            .and_then(|c| Slot::from_str(c).ok())
            .unwrap_or(Slot::Cpu);

        Self {
            format,
            catalog: cli_catalog.or(config.catalog),
            usd_rate: config.usd_rate.unwrap_or(DEFAULT_USD_RATE),
            default_category,
        }
    }
}
