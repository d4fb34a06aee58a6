// SPDX-License-Identifier: MIT

use crate::config::ConfigError;
use std::path::PathBuf;
use stoic_calendar_core::{DateError, DateRangeError, TimelineError};
use thiserror::Error;

/// Everything that can go wrong running a command
#[derive(Error, Debug)]
pub enum CliError {
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Date(#[from] DateError),

    #[error("{0}")]
    Range(#[from] DateRangeError),

    #[error("{0}")]
    Timeline(#[from] TimelineError),

    #[error("Unable to read timelines from {path}: {source}")]
    TimelinesFile {
        path: PathBuf,
        source: std::io::Error,
    },

    /// An option that the chosen range kind has no use for
    #[error("`{0}` can't be used with `{1}`")]
    UnusedOption(&'static str, &'static str),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
