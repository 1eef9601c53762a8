//! Data models for the to-do store.

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique task identifier (uuid-v4 text).
pub type TaskId = String;

/// Derived task state. Computed from `checked` and `due_date` on read,
/// never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskStatus {
    Done,
    Pending,
    Overdue,
}

impl TaskStatus {
    pub fn label(&self) -> &'static str {
        match self {
            TaskStatus::Done => "Done",
            TaskStatus::Pending => "Pending",
            TaskStatus::Overdue => "Overdue",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            TaskStatus::Done => "☑",
            TaskStatus::Pending => "☐",
            TaskStatus::Overdue => "⚠",
        }
    }
}

/// A task. Subtasks nest to arbitrary depth; a task owns its subtasks
/// exclusively, so deleting a task drops its whole subtree.
///
/// `checked`, `due_date`, and `subtasks` default when absent from the
/// persisted document, which keeps documents written by older schema
/// versions loadable without a version field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub text: String,
    #[serde(default)]
    pub checked: bool,
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
    #[serde(default)]
    pub subtasks: Vec<Task>,
}

impl Task {
    pub fn new(text: &str) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            text: text.to_string(),
            checked: false,
            due_date: None,
            subtasks: Vec::new(),
        }
    }

    pub fn with_due_date(text: &str, due_date: Option<NaiveDate>) -> Self {
        Self {
            due_date,
            ..Self::new(text)
        }
    }

    /// Status relative to the current calendar date.
    pub fn status(&self) -> TaskStatus {
        self.status_on(Utc::now().date_naive())
    }

    /// Status relative to an explicit date. A checked task is done no
    /// matter its due date; a parent's status never aggregates its
    /// children.
    pub fn status_on(&self, today: NaiveDate) -> TaskStatus {
        if self.checked {
            return TaskStatus::Done;
        }
        match self.due_date {
            Some(due) if due < today => TaskStatus::Overdue,
            _ => TaskStatus::Pending,
        }
    }

    pub fn is_overdue(&self) -> bool {
        self.status() == TaskStatus::Overdue
    }
}

/// Completion statistics over the top-level task list. Subtasks do not
/// count toward the totals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TaskStats {
    pub total: usize,
    pub done: usize,
    pub percent: u32,
}

impl TaskStats {
    pub fn from_tasks(tasks: &[Task]) -> Self {
        let total = tasks.len();
        let done = tasks.iter().filter(|t| t.checked).count();
        let percent = if total == 0 {
            0
        } else {
            (done as f64 / total as f64 * 100.0).round() as u32
        };
        Self {
            total,
            done,
            percent,
        }
    }

    /// Stats line for a status bar.
    pub fn summary(&self) -> String {
        if self.total == 0 {
            "No tasks".to_string()
        } else {
            format!("{} tasks • {} done ({}%)", self.total, self.done, self.percent)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_new_task_defaults() {
        let task = Task::new("Exercise");
        assert_eq!(task.text, "Exercise");
        assert!(!task.checked);
        assert!(task.due_date.is_none());
        assert!(task.subtasks.is_empty());
        assert!(!task.id.is_empty());
    }

    #[test]
    fn test_status_checked_is_done() {
        let mut task = Task::with_due_date("Report", Some(date(2020, 1, 1)));
        task.checked = true;
        // Checked wins even with a long-past due date.
        assert_eq!(task.status_on(date(2024, 6, 15)), TaskStatus::Done);
    }

    #[test]
    fn test_status_overdue() {
        let task = Task::with_due_date("Report", Some(date(2024, 6, 14)));
        assert_eq!(task.status_on(date(2024, 6, 15)), TaskStatus::Overdue);
    }

    #[test]
    fn test_status_due_today_is_pending() {
        let task = Task::with_due_date("Report", Some(date(2024, 6, 15)));
        assert_eq!(task.status_on(date(2024, 6, 15)), TaskStatus::Pending);
    }

    #[test]
    fn test_status_future_or_no_date_is_pending() {
        let task = Task::with_due_date("Report", Some(date(2024, 6, 16)));
        assert_eq!(task.status_on(date(2024, 6, 15)), TaskStatus::Pending);

        let task = Task::new("Report");
        assert_eq!(task.status_on(date(2024, 6, 15)), TaskStatus::Pending);
    }

    #[test]
    fn test_stats_rounding() {
        let mut tasks = vec![Task::new("a"), Task::new("b"), Task::new("c")];
        tasks[0].checked = true;
        assert_eq!(TaskStats::from_tasks(&tasks).percent, 33);

        tasks[1].checked = true;
        assert_eq!(TaskStats::from_tasks(&tasks).percent, 67);
    }

    #[test]
    fn test_stats_summary() {
        assert_eq!(TaskStats::from_tasks(&[]).summary(), "No tasks");

        let mut tasks = vec![Task::new("a"), Task::new("b")];
        tasks[0].checked = true;
        assert_eq!(
            TaskStats::from_tasks(&tasks).summary(),
            "2 tasks • 1 done (50%)"
        );
    }
}
