// Task model and id generation

use serde::{Deserialize, Serialize};

pub type TaskId = i64;

/// A single to-do entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub task: String,
    pub date: String,
    pub completed: bool,
}

impl Task {
    pub fn new(id: TaskId, task: impl Into<String>, date: impl Into<String>) -> Self {
        Self {
            id,
            task: task.into(),
            date: date.into(),
            completed: false,
        }
    }
}

/// Issues time-derived ids that never repeat within a store
///
/// Ids are the current time in milliseconds, bumped past the last issued
/// (or observed) id when the clock has not advanced.
#[derive(Debug, Clone, Default)]
pub struct IdGenerator {
    last: TaskId,
}

impl IdGenerator {
    /// Record an existing id so later ids are issued above it
    pub fn observe(&mut self, id: TaskId) {
        self.last = self.last.max(id);
    }

    /// Next unused id, or `None` once ids above the last one are exhausted
    pub fn next_id(&mut self) -> Option<TaskId> {
        self.next_at(now_ms())
    }

    fn next_at(&mut self, now: TaskId) -> Option<TaskId> {
        let id = if now > self.last { now } else { self.last.checked_add(1)? };
        self.last = id;
        Some(id)
    }
}

/// Current timestamp in milliseconds since the Unix epoch
pub fn now_ms() -> i64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as i64)
        .unwrap_or_default()
}
