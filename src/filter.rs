// View filtering for the task list

use crate::error::TodoError;
use crate::task::Task;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Which tasks the current view shows
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Filter {
    #[default]
    All,
    Active,     // completed == false
    Completed,  // completed == true
}

impl Filter {
    pub fn matches(self, task: &Task) -> bool {
        match self {
            Filter::All => true,
            Filter::Active => !task.completed,
            Filter::Completed => task.completed,
        }
    }

    /// Project `tasks` through this filter, preserving order
    pub fn apply(self, tasks: &[Task]) -> Vec<&Task> {
        tasks.iter().filter(|t| self.matches(t)).collect()
    }
}

impl std::fmt::Display for Filter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Filter::All => write!(f, "all"),
            Filter::Active => write!(f, "active"),
            Filter::Completed => write!(f, "completed"),
        }
    }
}

impl FromStr for Filter {
    type Err = TodoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(Filter::All),
            "active" => Ok(Filter::Active),
            "completed" => Ok(Filter::Completed),
            _ => Err(TodoError::UnknownFilter(s.to_string())),
        }
    }
}
