use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RosterError {
    #[error("Storage unavailable at {}: {reason}", path.display())]
    StorageUnavailable { path: PathBuf, reason: String },

    #[error("{field} cannot be blank")]
    BlankField { field: String },

    #[error("Unknown {field}: {value}")]
    UnknownValue { field: String, value: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl RosterError {
    pub fn storage(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        RosterError::StorageUnavailable {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    pub fn is_storage_unavailable(&self) -> bool {
        matches!(self, RosterError::StorageUnavailable { .. })
    }
}

pub type RosterResult<T> = Result<T, RosterError>;
