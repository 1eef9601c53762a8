//! Task store: the in-memory forest and its persistence.

use crate::error::StoreResult;
use crate::models::{Task, TaskId, TaskStats};
use chrono::NaiveDate;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Owns the task forest and the backing document.
///
/// Every mutation that changes the forest rewrites the full snapshot
/// before returning. Invalid input never errors: the mutation is skipped
/// and the caller can tell from the return value. Only storage failures
/// surface as `Err`.
///
/// The store is single-threaded by design; embed it behind one lock if
/// the host is concurrent.
pub struct TaskStore {
    tasks: Vec<Task>,
    path: Option<PathBuf>,
}

impl TaskStore {
    /// Open a store backed by `path` and load the persisted forest.
    ///
    /// A missing or unparsable document yields an empty forest. Documents
    /// written by older schema versions load with absent fields filled
    /// with their defaults, at every depth.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let tasks = load_from(&path);
        Self {
            tasks,
            path: Some(path),
        }
    }

    /// Store without a backing document. Mutations skip persistence.
    pub fn in_memory() -> Self {
        Self {
            tasks: Vec::new(),
            path: None,
        }
    }

    /// Current forest snapshot for rendering.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Append a root-level task. Whitespace-only text is rejected and
    /// nothing is written.
    pub fn add_task(&mut self, text: &str) -> StoreResult<Option<TaskId>> {
        let text = text.trim();
        if text.is_empty() {
            return Ok(None);
        }
        let task = Task::new(text);
        let id = task.id.clone();
        self.tasks.push(task);
        self.save()?;
        Ok(Some(id))
    }

    /// Append a subtask to the task with `parent_id`, wherever it sits in
    /// the tree. `due_date` is parsed leniently as `YYYY-MM-DD`; malformed
    /// input reads as "no deadline". No-op when the parent is missing or
    /// the text trims empty.
    pub fn add_subtask(
        &mut self,
        parent_id: &str,
        text: &str,
        due_date: Option<&str>,
    ) -> StoreResult<Option<TaskId>> {
        let text = text.trim();
        if text.is_empty() {
            return Ok(None);
        }
        let due = due_date.and_then(parse_due_date);
        let parent = match find_mut(&mut self.tasks, parent_id) {
            Some(parent) => parent,
            None => return Ok(None),
        };
        let task = Task::with_due_date(text, due);
        let id = task.id.clone();
        parent.subtasks.push(task);
        self.save()?;
        Ok(Some(id))
    }

    /// Replace a task's text and due date. Unlike [`add_subtask`], the
    /// date is overwritten wholesale: absent or malformed input clears a
    /// previously set date. No-op when the id is unknown or the text
    /// trims empty.
    ///
    /// [`add_subtask`]: TaskStore::add_subtask
    pub fn edit_task(&mut self, id: &str, text: &str, due_date: Option<&str>) -> StoreResult<bool> {
        let text = text.trim();
        if text.is_empty() {
            return Ok(false);
        }
        let due = due_date.and_then(parse_due_date);
        let task = match find_mut(&mut self.tasks, id) {
            Some(task) => task,
            None => return Ok(false),
        };
        task.text = text.to_string();
        task.due_date = due;
        self.save()?;
        Ok(true)
    }

    /// Set the checked flag on a task. No-op when the id is unknown.
    pub fn toggle_task(&mut self, id: &str, checked: bool) -> StoreResult<bool> {
        let task = match find_mut(&mut self.tasks, id) {
            Some(task) => task,
            None => return Ok(false),
        };
        task.checked = checked;
        self.save()?;
        Ok(true)
    }

    /// Remove a task and its whole subtree from wherever it sits.
    /// Removes at most one node per call.
    pub fn delete_task(&mut self, id: &str) -> StoreResult<bool> {
        if !remove(&mut self.tasks, id) {
            return Ok(false);
        }
        debug!("deleted task {}", id);
        self.save()?;
        Ok(true)
    }

    /// First-match depth-first lookup across the whole forest.
    pub fn find_task(&self, id: &str) -> Option<&Task> {
        find(&self.tasks, id)
    }

    /// Completion stats over the top-level list. Subtasks do not count
    /// toward the totals.
    pub fn stats(&self) -> TaskStats {
        TaskStats::from_tasks(&self.tasks)
    }

    /// Write the full forest snapshot to the backing document,
    /// overwriting it completely.
    pub fn save(&self) -> StoreResult<()> {
        let path = match &self.path {
            Some(path) => path,
            None => return Ok(()),
        };
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(&self.tasks)?;
        std::fs::write(path, content)?;
        debug!("saved {} top-level tasks to {}", self.tasks.len(), path.display());
        Ok(())
    }
}

fn load_from(path: &Path) -> Vec<Task> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(_) => {
            debug!("no tasks document at {}, starting empty", path.display());
            return Vec::new();
        }
    };
    match serde_json::from_str(&content) {
        Ok(tasks) => tasks,
        Err(e) => {
            warn!("unparsable tasks document at {}: {}", path.display(), e);
            Vec::new()
        }
    }
}

/// Lenient date parsing for user input: anything that is not a valid
/// `YYYY-MM-DD` calendar date reads as "no deadline".
fn parse_due_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

fn find<'a>(tasks: &'a [Task], id: &str) -> Option<&'a Task> {
    for task in tasks {
        if task.id == id {
            return Some(task);
        }
        if let Some(found) = find(&task.subtasks, id) {
            return Some(found);
        }
    }
    None
}

fn find_mut<'a>(tasks: &'a mut [Task], id: &str) -> Option<&'a mut Task> {
    for task in tasks.iter_mut() {
        if task.id == id {
            return Some(task);
        }
        if let Some(found) = find_mut(&mut task.subtasks, id) {
            return Some(found);
        }
    }
    None
}

/// Remove the task with `id` from wherever it sits, subtree included.
/// Checks each node before descending into its children, walking siblings
/// in reverse.
fn remove(tasks: &mut Vec<Task>, id: &str) -> bool {
    for i in (0..tasks.len()).rev() {
        if tasks[i].id == id {
            tasks.remove(i);
            return true;
        }
        if remove(&mut tasks[i].subtasks, id) {
            return true;
        }
    }
    false
}
