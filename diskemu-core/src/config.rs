//! Engine configuration.
//!
//! Loaded from an optional JSON file; every field has a default, so `{}` is
//! a valid config.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::DiskResult;
use crate::grid::MAX_SECTORS;

/// Engine settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EngineConfig {
    /// Directory holding disk files
    pub disk_dir: PathBuf,
    /// Disk file extension, without the dot
    pub extension: String,
    /// Format label used when `nd`/`fd` omit one
    pub default_format: String,
    /// Sector count used when `nd`/`fd` omit one
    pub default_sectors: usize,
    /// Capacity reported by `dm`
    pub max_capacity: usize,
    /// Largest sector count `nd`/`fd` accept
    pub max_sectors: usize,
    /// Interactive prompt
    pub prompt: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            disk_dir: PathBuf::from("."),
            extension: "mx".to_string(),
            default_format: "custom".to_string(),
            default_sectors: 40,
            max_capacity: 80,
            max_sectors: MAX_SECTORS,
            prompt: "diskemulator> ".to_string(),
        }
    }
}

impl EngineConfig {
    /// Parse a JSON config.
    pub fn from_json(text: &str) -> DiskResult<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Load a JSON config file.
    pub fn load(path: &Path) -> DiskResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }
}
