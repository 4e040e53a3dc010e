// Error types for the task store and its storage backends

use thiserror::Error;

/// Input field rejected by validation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Task,
    Date,
}

impl Field {
    /// Capitalized name used in user-facing messages
    pub fn label(self) -> &'static str {
        match self {
            Field::Task => "Task",
            Field::Date => "Date",
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Field::Task => write!(f, "task"),
            Field::Date => write!(f, "date"),
        }
    }
}

/// Failure reported by a durable storage backend
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to acquire lock on {path}: {source}")]
    Lock {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("Invalid storage key: {0:?}")]
    InvalidKey(String),
}

#[derive(Error, Debug)]
pub enum TodoError {
    #[error("Invalid {field}: {reason}")]
    Validation { field: Field, reason: &'static str },

    #[error("No tasks to delete")]
    EmptyCollection,

    #[error("No task ids left above {0}")]
    IdsExhausted(i64),

    #[error("Persistence error: {0}")]
    Persistence(#[from] StorageError),

    #[error("Failed to serialize tasks: {0}")]
    Serialization(#[source] serde_json::Error),

    #[error("Failed to deserialize tasks: {0}")]
    Deserialization(#[source] serde_json::Error),

    #[error("Invalid date {0:?} (expected YYYY-MM-DD)")]
    InvalidDate(String),

    #[error("Unknown locale {0:?}")]
    UnknownLocale(String),

    #[error("Unknown filter {0:?} (expected all, active or completed)")]
    UnknownFilter(String),
}

impl TodoError {
    /// Field named by a validation failure, if this is one
    pub fn field(&self) -> Option<Field> {
        match self {
            TodoError::Validation { field, .. } => Some(*field),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, TodoError>;
