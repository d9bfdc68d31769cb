//! User settings loaded from `config.toml`

use anyhow::{Context, Result};
use diffbro_core::DEFAULT_MAX_INPUT_BYTES;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Which screen the app shows
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    /// Both texts side by side, editable
    #[default]
    Split,
    /// Highlighted differences, read-only
    Diff,
}

impl ViewMode {
    pub fn toggled(self) -> Self {
        match self {
            ViewMode::Split => ViewMode::Diff,
            ViewMode::Diff => ViewMode::Split,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub view: ViewMode,
    pub char_diff: bool,
    /// Per-text byte limit; 0 turns the limit off
    pub max_input_bytes: usize,
    /// Where the two texts are kept between runs
    pub storage_path: Option<PathBuf>,
    pub tab_width: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            view: ViewMode::Split,
            char_diff: true,
            max_input_bytes: DEFAULT_MAX_INPUT_BYTES,
            storage_path: None,
            tab_width: 4,
        }
    }
}

impl Config {
    /// Default location: `<config_dir>/diffbro/config.toml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("diffbro").join("config.toml"))
    }

    /// Load from an explicit path, or the default one. A missing file means defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => match Self::default_path() {
                Some(p) => p,
                None => return Ok(Self::default()),
            },
        };

        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let raw = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config: Config = toml::from_str(&raw)
            .with_context(|| format!("Invalid config {}", path.display()))?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    pub fn input_limit(&self) -> Option<usize> {
        (self.max_input_bytes > 0).then_some(self.max_input_bytes)
    }
}
