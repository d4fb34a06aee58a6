// SPDX-License-Identifier: MIT

//!
//! Stoic Calendar command line config
//!

use directories_next::ProjectDirs;
use log::info;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use stoic_calendar_renderer::GridLayoutParams;
use thiserror::Error;

const PROJECT_QUALIFIER: &str = "org";
const ORG_NAME: &str = "StoicCalendar";
const APPLICATION_NAME: &str = "StoicCalendar";
const CONFIG_FILE_NAME: &str = "config.json";
const DEFAULT_TIMELINES_FILE_NAME: &str = "timelines.json";

/// Errors that can arise when loading or saving the config
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("No home directory could be found for the config")]
    NoProjectDirs,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Also covers invalid layout params, which are checked as they're read
    #[error("Invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// The config that's saved to disk.  Missing fields take their defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Dot size limits and spacing ratios for grid layouts
    pub layout: GridLayoutParams,

    /// Where the list of timelines is kept (defaults to the data dir)
    pub timelines_path: Option<PathBuf>,
}

impl Config {
    /// Load the config from `path`, or from the default config file if no
    /// path is given.  A missing default config file means the defaults are
    /// used, but a missing explicit one is an error.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let (path, explicit) = match path {
            Some(path) => (path.to_path_buf(), true),
            None => (config_file_path()?, false),
        };
        if !explicit && !path.exists() {
            info!("No config file at {}, using defaults", path.display());
            return Ok(Config::default());
        }
        info!("Loading config from {}", path.display());
        let data = fs::read_to_string(&path)?;
        let config: Config = serde_json::from_str(&data)?;
        info!("Config loaded = {config:?}");
        Ok(config)
    }

    /// Save the config to `path` (or the default config file), creating
    /// parent directories as needed
    pub fn save(&self, path: Option<&Path>) -> Result<PathBuf, ConfigError> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => config_file_path()?,
        };
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        info!("Saving config to {}", path.display());
        let json = serde_json::to_string_pretty(self)?;
        fs::write(&path, json)?;
        info!("Config saved");
        Ok(path)
    }

    /// The path of the timelines file
    pub fn timelines_path(&self) -> Result<PathBuf, ConfigError> {
        match &self.timelines_path {
            Some(path) => Ok(path.to_owned()),
            None => Ok(project_dirs()?.data_dir().join(DEFAULT_TIMELINES_FILE_NAME)),
        }
    }
}

fn project_dirs() -> Result<ProjectDirs, ConfigError> {
    ProjectDirs::from(PROJECT_QUALIFIER, ORG_NAME, APPLICATION_NAME)
        .ok_or(ConfigError::NoProjectDirs)
}

/// Get the path of the default config file
pub fn config_file_path() -> Result<PathBuf, ConfigError> {
    Ok(project_dirs()?.config_dir().join(CONFIG_FILE_NAME))
}
