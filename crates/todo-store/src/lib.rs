//! Hierarchical to-do store.
//!
//! This crate owns a forest of tasks with unlimited-depth subtasks,
//! optional due dates, and a derived completion statistic, persisted as a
//! single JSON document. It contains no rendering code: a UI layer reads
//! the forest through [`TaskStore::tasks`] and reacts to user actions by
//! calling the mutation surface, which persists the full snapshot after
//! every change.
//!
//! # Features
//!
//! - **Task tree**: add, edit, toggle, and delete at arbitrary depth
//! - **Derived status**: done / pending / overdue, computed on read,
//!   never stored
//! - **Snapshot persistence**: the whole forest is rewritten after every
//!   mutation; documents from older schema versions load via decoder
//!   defaults
//! - **Lenient input policy**: empty text, unknown ids, and malformed
//!   dates skip the mutation instead of raising an error

pub mod config;
pub mod error;
pub mod models;
pub mod store;

// Re-exports
pub use config::{Config, DisplayConfig, StorageConfig};
pub use error::{StoreError, StoreResult};
pub use models::{Task, TaskId, TaskStats, TaskStatus};
pub use store::TaskStore;
