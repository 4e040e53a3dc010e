// Task store: in-memory collection synchronized with durable storage

use crate::codec;
use crate::date::parse_date;
use crate::error::{Field, Result, TodoError};
use crate::filter::Filter;
use crate::storage::Storage;
use crate::task::{IdGenerator, Task, TaskId};
use crate::ui::{Confirmer, Notifier, Renderer};
use tracing::{debug, error, info, warn};

/// Storage key holding the serialized collection
pub const DEFAULT_KEY: &str = "todos";

pub const CONFIRM_DELETE: &str = "Are you sure you want to delete this task?";
pub const CONFIRM_DELETE_ALL: &str = "Are you sure you want to delete ALL tasks?";

/// Owns the task collection, the active filter, and the collaborators that
/// persist and display them
///
/// Every mutation updates memory first, then rewrites the whole collection to
/// storage, then renders the visible tasks. Storage failures are logged and
/// never undo the in-memory change.
pub struct TaskStore {
    tasks: Vec<Task>,
    filter: Filter,
    key: String,
    ids: IdGenerator,
    initialized: bool,
    storage: Box<dyn Storage>,
    confirmer: Box<dyn Confirmer>,
    notifier: Box<dyn Notifier>,
    renderer: Box<dyn Renderer>,
}

impl TaskStore {
    /// Create an uninitialized store; call `initialize()` to load saved tasks
    pub fn new(
        storage: impl Storage + 'static,
        confirmer: impl Confirmer + 'static,
        notifier: impl Notifier + 'static,
        renderer: impl Renderer + 'static,
    ) -> Self {
        Self {
            tasks: Vec::new(),
            filter: Filter::default(),
            key: DEFAULT_KEY.to_string(),
            ids: IdGenerator::default(),
            initialized: false,
            storage: Box::new(storage),
            confirmer: Box::new(confirmer),
            notifier: Box::new(notifier),
            renderer: Box::new(renderer),
        }
    }

    /// Use a different storage key
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn filter(&self) -> Filter {
        self.filter
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Load the collection from storage
    ///
    /// A missing value leaves the collection empty. Unreadable or malformed
    /// data is logged and also yields an empty collection.
    pub fn initialize(&mut self) {
        self.tasks = match self.storage.get(&self.key) {
            Ok(Some(value)) => match codec::decode_tasks(&value) {
                Ok(tasks) => tasks,
                Err(e) => {
                    error!(key = %self.key, error = %e, "Stored tasks are corrupt, starting empty");
                    Vec::new()
                }
            },
            Ok(None) => {
                debug!(key = %self.key, "No stored tasks");
                Vec::new()
            }
            Err(e) => {
                error!(key = %self.key, error = %e, "Failed to read stored tasks, starting empty");
                Vec::new()
            }
        };

        for task in &self.tasks {
            self.ids.observe(task.id);
        }
        self.initialized = true;

        info!(key = %self.key, count = self.tasks.len(), "Task store initialized");
    }

    /// Validate and append a new task, returning its id
    pub fn add(&mut self, task: &str, date: &str) -> Result<TaskId> {
        self.ensure_initialized();

        if let Err(e) = validate(task, date) {
            if let TodoError::Validation { field, reason } = &e {
                self.notifier.notify(&format!("{} {}!", field.label(), reason));
            }
            debug!(error = %e, "Rejected new task");
            return Err(e);
        }

        let Some(id) = self.ids.next_id() else {
            let max = self.tasks.iter().map(|t| t.id).max().unwrap_or(TaskId::MAX);
            let err = TodoError::IdsExhausted(max);
            error!(error = %err, "Cannot assign a task id");
            self.notifier.notify(&err.to_string());
            return Err(err);
        };
        self.tasks.push(Task::new(id, task.trim(), date));
        debug!(id, "Added task");

        self.commit();
        Ok(id)
    }

    /// Flip the completed flag of task `id`
    ///
    /// Returns the new state, or `None` if no such task exists.
    pub fn toggle(&mut self, id: TaskId) -> Option<bool> {
        self.ensure_initialized();

        let task = self.tasks.iter_mut().find(|t| t.id == id)?;
        task.completed = !task.completed;
        let completed = task.completed;
        debug!(id, completed, "Toggled task");

        self.commit();
        Some(completed)
    }

    /// Delete task `id` after confirmation
    ///
    /// Returns whether a task was removed. A declined confirmation leaves
    /// everything untouched.
    pub fn delete(&mut self, id: TaskId) -> bool {
        self.ensure_initialized();

        if !self.confirmer.confirm(CONFIRM_DELETE) {
            debug!(id, "Delete declined");
            return false;
        }

        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        let removed = self.tasks.len() != before;
        debug!(id, removed, "Deleted task");

        self.commit();
        removed
    }

    /// Delete every task after confirmation, returning how many were removed
    ///
    /// An empty collection is reported through the notifier and returned as
    /// `TodoError::EmptyCollection`; a declined confirmation returns `Ok(0)`.
    pub fn delete_all(&mut self) -> Result<usize> {
        self.ensure_initialized();

        if self.tasks.is_empty() {
            let warning = TodoError::EmptyCollection;
            self.notifier.notify(&warning.to_string());
            return Err(warning);
        }

        if !self.confirmer.confirm(CONFIRM_DELETE_ALL) {
            debug!("Delete all declined");
            return Ok(0);
        }

        let count = self.tasks.len();
        self.tasks.clear();
        info!(count, "Deleted all tasks");

        self.commit();
        Ok(count)
    }

    /// Change which tasks are visible; the filter is never persisted
    pub fn set_filter(&mut self, filter: Filter) {
        self.filter = filter;
        self.render();
    }

    /// Tasks passing the current filter, in insertion order
    pub fn visible_tasks(&self) -> Vec<&Task> {
        self.filter.apply(&self.tasks)
    }

    /// Hand the visible tasks to the renderer
    pub fn render(&mut self) {
        let visible = self.filter.apply(&self.tasks);
        self.renderer.render(&visible);
    }

    fn ensure_initialized(&mut self) {
        if !self.initialized {
            warn!("Task store used before initialize(), loading now");
            self.initialize();
        }
    }

    fn commit(&mut self) {
        self.persist();
        self.render();
    }

    fn persist(&mut self) {
        let value = match codec::encode_tasks(&self.tasks) {
            Ok(value) => value,
            Err(e) => {
                error!(key = %self.key, error = %e, "Failed to serialize tasks");
                return;
            }
        };

        match self.storage.set(&self.key, &value) {
            Ok(()) => debug!(key = %self.key, count = self.tasks.len(), "Persisted tasks"),
            Err(e) => error!(key = %self.key, error = %e, "Failed to persist tasks"),
        }
    }
}

/// Check new-task input; the task text is checked before the date
pub fn validate(task: &str, date: &str) -> Result<()> {
    if task.trim().is_empty() {
        return Err(TodoError::Validation {
            field: Field::Task,
            reason: "can not be empty",
        });
    }

    if date.is_empty() {
        return Err(TodoError::Validation {
            field: Field::Date,
            reason: "can not be empty",
        });
    }

    if parse_date(date).is_err() {
        return Err(TodoError::Validation {
            field: Field::Date,
            reason: "must be a YYYY-MM-DD date",
        });
    }

    Ok(())
}
