// SPDX-License-Identifier: MPL-2.0
//! This module handles the tool's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Examples
//!
//! ```no_run
//! use geolog::config::{self, Config, SortOrder};
//!
//! // Load existing configuration
//! let mut config = config::load().unwrap_or_default();
//!
//! // Modify a setting
//! config.sort_order = SortOrder::ModifiedDate;
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "Geolog";

/// Default report file name. Kept for compatibility with earlier
/// versions of the report format.
pub const DEFAULT_OUTPUT_FILE: &str = "output.txt";

// =============================================================================
// SortOrder
// =============================================================================

/// Order in which scanned image files are processed.
///
/// The report lists records in processing order, so the sort order
/// decides the report layout.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SortOrder {
    #[default]
    Alphabetical,
    ModifiedDate,
    CreatedDate,
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "alphabetical" => Ok(SortOrder::Alphabetical),
            "modified-date" => Ok(SortOrder::ModifiedDate),
            "created-date" => Ok(SortOrder::CreatedDate),
            other => Err(format!(
                "unknown sort order '{other}' (expected alphabetical, modified-date or created-date)"
            )),
        }
    }
}

// =============================================================================
// Config
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    /// Path the report is written to.
    #[serde(default = "default_output_file")]
    pub output_file: String,

    /// File processing order.
    #[serde(default)]
    pub sort_order: SortOrder,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_file: default_output_file(),
            sort_order: SortOrder::default(),
        }
    }
}

fn default_output_file() -> String {
    DEFAULT_OUTPUT_FILE.to_string()
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_default())
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
