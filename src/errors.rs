use std::result::Result as StdResult;

use thiserror::Error;
use uuid::Uuid;

/// Unified error type for domain, engine, and storage layers.
#[derive(Error, Debug)]
pub enum SplitError {
    #[error("Sheet not found: {0}")]
    SheetNotFound(Uuid),
    #[error("Person not found: {0}")]
    PersonNotFound(Uuid),
    #[error("Unknown person reference: {0}")]
    UnknownPersonReference(Uuid),
    #[error("Invalid expense: {0}")]
    InvalidExpense(String),
    #[error("Persistence error: {0}")]
    StorageError(String),
}

pub type Result<T> = StdResult<T, SplitError>;

impl From<std::io::Error> for SplitError {
    fn from(err: std::io::Error) -> Self {
        SplitError::StorageError(err.to_string())
    }
}

impl From<serde_json::Error> for SplitError {
    fn from(err: serde_json::Error) -> Self {
        SplitError::StorageError(err.to_string())
    }
}
