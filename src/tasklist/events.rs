//! # Notifications
//!
//! The output half of the adapter contract. [`crate::api::TaskApi`] pushes a
//! [`Notification`] to every subscribed [`Observer`] after each operation:
//!
//! - state changed: `TaskListChanged(snapshot)` followed by `StatsChanged(stats)`
//! - recoverable failure: `OperationRejected(rejection)`
//! - no-op outcome: nothing
//!
//! Observers run synchronously on the caller's thread, before the API call returns.

use crate::error::TaskError;
use crate::model::{Task, TaskId};
use crate::stats::Stats;
use crate::validation::ValidationError;
use std::fmt;

/// The input events an adapter can route into the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Add,
    Remove,
    Toggle,
    Edit,
    ClearCompleted,
    ClearAll,
    Seed,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Operation::Add => "add-task",
            Operation::Remove => "delete-task",
            Operation::Toggle => "toggle-task",
            Operation::Edit => "edit-task",
            Operation::ClearCompleted => "clear-completed",
            Operation::ClearAll => "clear-all",
            Operation::Seed => "seed",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    Invalid(ValidationError),
    NotFound(TaskId),
}

impl RejectReason {
    /// Maps recoverable errors to a reason; anything else is not a rejection.
    pub fn from_error(err: &TaskError) -> Option<Self> {
        match err {
            TaskError::Validation(e) => Some(RejectReason::Invalid(*e)),
            TaskError::NotFound(id) => Some(RejectReason::NotFound(*id)),
            _ => None,
        }
    }
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RejectReason::Invalid(e) => write!(f, "{}", e),
            RejectReason::NotFound(id) => write!(f, "no task with id {}", id),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rejection {
    pub operation: Operation,
    pub reason: RejectReason,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Notification {
    TaskListChanged(Vec<Task>),
    StatsChanged(Stats),
    OperationRejected(Rejection),
}

pub trait Observer {
    fn notify(&mut self, notification: &Notification);
}
