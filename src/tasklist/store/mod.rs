//! # Storage Layer
//!
//! This module defines the storage abstraction for tasklist. The [`DataStore`] trait
//! is deliberately low level: it knows how to keep tasks in order and hand out ids,
//! nothing about validation or user-facing messages. Those live in `commands/`.
//!
//! ## Implementations
//!
//! - [`memory::InMemoryStore`]: the session store
//!   - Tasks kept in a `Vec` in insertion order
//!   - Ids from a monotonic counter that survives `clear`
//!
//! Tasks are never persisted; a store lives exactly as long as its session.

use crate::error::Result;
use crate::model::{Task, TaskId};

pub mod memory;

/// Abstract interface for task storage.
///
/// Implementations must preserve insertion order and must never hand out
/// the same id twice.
pub trait DataStore {
    /// Reserve a fresh id for a task about to be inserted
    fn allocate_id(&mut self) -> TaskId;

    /// Save a task. Appends new tasks, replaces existing ones in place.
    fn save_task(&mut self, task: &Task) -> Result<()>;

    /// Get a task by id
    fn get_task(&self, id: TaskId) -> Result<Task>;

    /// List all tasks in insertion order
    fn list_tasks(&self) -> Result<Vec<Task>>;

    /// Delete a task, returning it if it existed
    fn delete_task(&mut self, id: TaskId) -> Result<Option<Task>>;

    /// Delete every task matching `pred`, returning the removed tasks in order
    fn delete_where<F>(&mut self, pred: F) -> Result<Vec<Task>>
    where
        F: FnMut(&Task) -> bool;
}
