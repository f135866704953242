//! Task store - in-memory collection with JSON file persistence

use std::fs;
use std::path::{Path, PathBuf};

use tracing::warn;

use super::error::Result;
use super::model::Task;

/// The task collection, mirrored to a JSON file after every mutation.
///
/// Persistence is best effort: a failed save is logged and swallowed, the
/// mutation itself still succeeds, and the in-memory state stays
/// authoritative for the rest of the process. Disk catches up on the next
/// save that works.
pub struct TaskStore {
    path: PathBuf,
    tasks: Vec<Task>,
    next_id: u64,
}

impl TaskStore {
    /// Open the store backed by `path`, loading any tasks already there.
    ///
    /// A missing file means a fresh store. An unreadable or unparseable
    /// file is logged and treated as empty; the bad file is left in place
    /// until the next successful save overwrites it.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let tasks = match Self::load(&path) {
            Ok(tasks) => tasks,
            Err(e) => {
                warn!("Failed to load tasks from {}: {}", path.display(), e);
                Vec::new()
            }
        };
        let next_id = tasks.iter().map(|t| t.id).max().unwrap_or(0) + 1;

        Self {
            path,
            tasks,
            next_id,
        }
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append a new pending task and return a copy of it.
    ///
    /// Ids count up from 1 and are never reused, even after deletes.
    pub fn add_task(&mut self, description: impl Into<String>) -> Task {
        let task = Task::new(self.next_id, description);
        self.next_id += 1;
        self.tasks.push(task.clone());
        self.save();
        task
    }

    /// Tasks in insertion order. With `include_completed` false, completed
    /// tasks are skipped and the rest keep their relative order.
    pub fn list_tasks(&self, include_completed: bool) -> Vec<&Task> {
        self.tasks
            .iter()
            .filter(|t| include_completed || !t.completed)
            .collect()
    }

    /// Mark the task with `id` as completed. Returns false, without
    /// touching anything, when no task has that id. Completing an
    /// already-completed task succeeds again.
    pub fn complete_task(&mut self, id: u64) -> bool {
        match self.tasks.iter_mut().find(|t| t.id == id) {
            Some(task) => {
                task.completed = true;
                self.save();
                true
            }
            None => false,
        }
    }

    /// Remove the task with `id`, leaving the order of the rest intact.
    /// Returns false, without touching anything, when no task has that id.
    pub fn delete_task(&mut self, id: u64) -> bool {
        match self.tasks.iter().position(|t| t.id == id) {
            Some(index) => {
                self.tasks.remove(index);
                self.save();
                true
            }
            None => false,
        }
    }

    fn save(&self) {
        if let Err(e) = self.try_save() {
            warn!("Failed to save tasks to {}: {}", self.path.display(), e);
        }
    }

    fn try_save(&self) -> Result<()> {
        let content = serde_json::to_string_pretty(&self.tasks)?;
        fs::write(&self.path, content)?;
        Ok(())
    }

    fn load(path: &Path) -> Result<Vec<Task>> {
        if !path.exists() {
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(path)?;
        if content.trim().is_empty() {
            return Ok(Vec::new());
        }

        let tasks: Vec<Task> = serde_json::from_str(&content)?;
        Ok(tasks)
    }
}
