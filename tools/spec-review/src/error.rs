use std::path::PathBuf;
use thiserror::Error;

use crate::checklist::ChecklistError;
use crate::config::ConfigError;
use crate::github::HostError;

/// Errors that end a run. Everything else ends up in the report.
#[derive(Debug, Error)]
pub enum ReviewError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Checklist(#[from] ChecklistError),

    #[error(transparent)]
    Host(#[from] HostError),

    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write results: {0}")]
    Output(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ReviewError>;
