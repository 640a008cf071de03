//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It serves as the single
//! entry point for all task operations, regardless of the UI being used.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Dispatches** to the appropriate command function
//! - **Recomputes stats** after every operation that changed state
//! - **Notifies observers** (`TaskListChanged`, `StatsChanged`, `OperationRejected`)
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! ## What the API Does NOT Do
//!
//! - **Business logic**: That belongs in `commands/*.rs`
//! - **I/O operations**: No stdout, stderr, or prompts
//! - **Confirmation**: Clear operations run unconditionally; gating them is the adapter's job
//!
//! ## Generic Over DataStore
//!
//! `TaskApi<S: DataStore>` owns its store, which is injected through [`TaskApi::new`].
//! There is no process-wide task list.

use crate::commands::{self, CmdResult, TaskFilter};
use crate::error::Result;
use crate::events::{Notification, Observer, Operation, RejectReason, Rejection};
use crate::model::{Priority, TaskId};
use crate::stats::{self, Stats};
use crate::store::DataStore;
use chrono::Utc;
use tracing::debug;

/// The main API facade for task operations.
///
/// All UI clients should interact through this API.
pub struct TaskApi<S: DataStore> {
    store: S,
    observers: Vec<Box<dyn Observer>>,
}

impl<S: DataStore> TaskApi<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            observers: Vec::new(),
        }
    }

    pub fn subscribe(&mut self, observer: Box<dyn Observer>) {
        self.observers.push(observer);
    }

    pub fn add_task(&mut self, text: &str, priority: Priority) -> Result<CmdResult> {
        self.dispatch(Operation::Add, |store| {
            commands::add::run(store, text, priority)
        })
    }

    pub fn remove_task(&mut self, id: TaskId) -> Result<CmdResult> {
        self.dispatch(Operation::Remove, |store| commands::remove::run(store, id))
    }

    pub fn toggle_task(&mut self, id: TaskId) -> Result<CmdResult> {
        self.dispatch(Operation::Toggle, |store| commands::toggle::run(store, id))
    }

    pub fn edit_task(&mut self, id: TaskId, new_text: &str) -> Result<CmdResult> {
        self.dispatch(Operation::Edit, |store| {
            commands::edit::run(store, id, new_text)
        })
    }

    pub fn clear_completed(&mut self) -> Result<CmdResult> {
        self.dispatch(Operation::ClearCompleted, commands::clear::completed)
    }

    pub fn clear_all(&mut self) -> Result<CmdResult> {
        self.dispatch(Operation::ClearAll, commands::clear::all)
    }

    /// Loads the demo tasks into an empty list; a no-op otherwise.
    pub fn seed_samples(&mut self) -> Result<CmdResult> {
        self.dispatch(Operation::Seed, |store| {
            commands::seed::run(store, Utc::now())
        })
    }

    pub fn list_tasks(&self, filter: TaskFilter) -> Result<CmdResult> {
        commands::list::run(&self.store, filter)
    }

    pub fn stats(&self) -> Result<Stats> {
        Ok(stats::compute(&self.store.list_tasks()?))
    }

    fn dispatch<F>(&mut self, operation: Operation, command: F) -> Result<CmdResult>
    where
        F: FnOnce(&mut S) -> Result<CmdResult>,
    {
        debug!(%operation, "dispatching");
        match command(&mut self.store) {
            Ok(result) => {
                debug!(
                    %operation,
                    changed = result.changed,
                    removed = result.removed,
                    "operation completed"
                );
                if result.changed {
                    self.publish_state()?;
                }
                Ok(result)
            }
            Err(err) => {
                if let Some(reason) = RejectReason::from_error(&err) {
                    debug!(%operation, %reason, "operation rejected");
                    self.emit(&Notification::OperationRejected(Rejection {
                        operation,
                        reason,
                    }));
                }
                Err(err)
            }
        }
    }

    fn publish_state(&mut self) -> Result<()> {
        let snapshot = self.store.list_tasks()?;
        let stats = stats::compute(&snapshot);
        self.emit(&Notification::TaskListChanged(snapshot));
        self.emit(&Notification::StatsChanged(stats));
        Ok(())
    }

    fn emit(&mut self, notification: &Notification) {
        for observer in self.observers.iter_mut() {
            observer.notify(notification);
        }
    }
}
