use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ExplorerError>;

#[derive(Error, Debug)]
pub enum ExplorerError {
    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Database error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("Settings error: {0}")]
    Settings(#[from] config::ConfigError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Invalid name '{name}': {reason}")]
    InvalidName { name: String, reason: String },

    #[error("Not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("Missing required column: {0}")]
    MissingColumn(String),

    #[error("Cannot aggregate over zero records")]
    EmptyInput,

    #[error("Settings file not found: {}", path.display())]
    ConfigNotFound { path: PathBuf },

    #[error("Invalid data format: {0}")]
    InvalidFormat(String),
}

impl ExplorerError {
    pub(crate) fn invalid_name(name: &str, reason: &str) -> Self {
        Self::InvalidName {
            name: name.to_string(),
            reason: reason.to_string(),
        }
    }
}
