use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum InterlinearError {
    #[error("I/O error on {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize JSON for {path:?}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to read config {path:?}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config {path:?}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl InterlinearError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        InterlinearError::Io { path: path.into(), source }
    }
}

pub type Result<T> = std::result::Result<T, InterlinearError>;
