// Serialization of the task collection to its stored form

use crate::error::{Result, TodoError};
use crate::task::Task;
use std::collections::HashSet;
use tracing::{debug, warn};

/// Encode the full collection as a JSON array
pub fn encode_tasks(tasks: &[Task]) -> Result<String> {
    serde_json::to_string(tasks).map_err(TodoError::Serialization)
}

/// Decode a stored JSON array back into a collection
///
/// Order is preserved. A record repeating an earlier id is dropped with a
/// warning so the collection keeps its unique-id invariant.
pub fn decode_tasks(value: &str) -> Result<Vec<Task>> {
    let decoded: Vec<Task> = serde_json::from_str(value).map_err(TodoError::Deserialization)?;

    let mut seen = HashSet::with_capacity(decoded.len());
    let mut tasks = Vec::with_capacity(decoded.len());

    for task in decoded {
        if !seen.insert(task.id) {
            warn!(id = task.id, task = %task.task, "Duplicate task id in stored data, skipping");
            continue;
        }
        tasks.push(task);
    }

    debug!(count = tasks.len(), "Decoded tasks");
    Ok(tasks)
}
