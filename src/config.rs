//! Configuration file support for pnpm-licenses.
//!
//! Provides YAML-based configuration through `pnpm-licenses.config.yml` files,
//! including data structures, file loading, and validation.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

use crate::application::dto::OutputFormat;
use crate::shared::security::read_checked;
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "pnpm-licenses.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub format: Option<String>,
    pub virtual_store_dir: Option<String>,
    /// Same as `--prod`
    pub production: Option<bool>,
    /// Same as `--dev`
    pub dev: Option<bool>,
    /// `false` is the same as `--no-optional`
    pub optional: Option<bool>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = read_checked(path, "config file").with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

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

fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(ref format) = config.format {
        if format.parse::<OutputFormat>().is_err() {
            bail!(
                "Invalid config: format '{}' is not supported.\n\n\
                 💡 Hint: Use one of 'json', 'tree' or 'markdown'.",
                format
            );
        }
    }
    if let Some(ref dir) = config.virtual_store_dir {
        if dir.trim().is_empty() {
            bail!(
                "Invalid config: virtual_store_dir must not be empty.\n\n\
                 💡 Hint: Remove the field to use the default 'node_modules/.pnpm'."
            );
        }
    }
    Ok(())
}

fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}
