//! Error type shared by the store, configuration and leaderboard client.
//!
//! The window manager itself never fails: unknown ids and out-of-order pointer
//! events are no-ops. Tauri commands flatten these errors to strings at the boundary.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DeskError {
    #[error("I/O error at {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to parse config: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP status {0}")]
    Status(u16),

    #[error("Invalid store key '{0}' (allowed: letters, digits, '_' and '-')")]
    InvalidKey(String),

    #[error("Unknown game '{0}'")]
    UnknownGame(String),

    #[error("Window {0} not found")]
    WindowNotFound(String),
}

impl DeskError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        DeskError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type DeskResult<T> = Result<T, DeskError>;
