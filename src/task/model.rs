//! Task data model

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single task
///
/// The id and description are fixed at construction. Only `completed`
/// changes afterwards, and only from pending to completed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    /// Unique numeric ID, assigned by the store
    pub id: u64,

    /// What needs doing
    pub description: String,

    /// Whether the task has been completed
    pub completed: bool,

    /// When the task was created. Records saved without this field get
    /// the current time when loaded.
    #[serde(default = "Local::now")]
    pub created_at: DateTime<Local>,
}

impl Task {
    /// Create a new pending task. The caller picks the id; the store is
    /// responsible for keeping ids unique.
    pub fn new(id: u64, description: impl Into<String>) -> Self {
        Self {
            id,
            description: description.into(),
            completed: false,
            created_at: Local::now(),
        }
    }

    /// Status glyph used in the one-line rendering
    pub fn glyph(&self) -> &'static str {
        if self.completed {
            "✓"
        } else {
            "○"
        }
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {} {}", self.id, self.glyph(), self.description)
    }
}
