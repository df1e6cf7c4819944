use thiserror::Error;

pub type Result<T> = std::result::Result<T, KanbanError>;

#[derive(Debug, Error)]
pub enum KanbanError {
    #[error("Column index {index} out of range (board has {len} columns)")]
    ColumnIndexOutOfRange { index: usize, len: usize },

    #[error("Invalid move direction: {0} (expected -1 or 1)")]
    InvalidDirection(i64),

    #[error("Invalid identifier: {0}")]
    InvalidId(String),

    #[error("Board invariant violated: {0}")]
    InvariantViolation(String),

    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}
