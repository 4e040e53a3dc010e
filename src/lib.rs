// todostore - Task list manager with durable local storage

pub mod codec;
pub mod config;
pub mod date;
pub mod error;
pub mod filter;
pub mod sqlite;
pub mod storage;
pub mod store;
pub mod task;
pub mod terminal;
pub mod ui;

// Re-export main types for convenience
pub use config::{Backend, Config};
pub use error::{Field, Result, StorageError, TodoError};
pub use filter::Filter;
pub use sqlite::SqliteStorage;
pub use storage::{FileStorage, MemoryStorage, Storage};
pub use store::TaskStore;
pub use task::{Task, TaskId, now_ms};
pub use ui::{AutoConfirm, Confirmer, Notifier, Renderer};
