use crate::model::{Priority, Task};

pub mod add;
pub mod clear;
pub mod edit;
pub mod list;
pub mod remove;
pub mod seed;
pub mod toggle;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

/// Outcome of a command.
///
/// `changed` is true only when the store was actually mutated; no-op outcomes
/// (absent id on remove, identical edit, clearing nothing) leave it false.
#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_tasks: Vec<Task>,
    pub listed_tasks: Vec<Task>,
    pub removed: usize,
    pub changed: bool,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    /// Marks the outcome as a real mutation of the store.
    pub fn with_changed(mut self) -> Self {
        self.changed = true;
        self
    }

    pub fn with_message(mut self, message: CmdMessage) -> Self {
        self.messages.push(message);
        self
    }

    pub fn with_affected_tasks(mut self, tasks: Vec<Task>) -> Self {
        self.affected_tasks = tasks;
        self
    }

    pub fn with_listed_tasks(mut self, tasks: Vec<Task>) -> Self {
        self.listed_tasks = tasks;
        self
    }

    pub fn with_removed(mut self, removed: usize) -> Self {
        self.removed = removed;
        self.changed = removed > 0;
        self
    }

    /// The first affected task, for single-task commands.
    pub fn task(&self) -> Option<&Task> {
        self.affected_tasks.first()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatusFilter {
    #[default]
    All,
    Pending,
    Completed,
}

/// Narrows a listing. The default filter matches every task.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TaskFilter {
    pub status: StatusFilter,
    pub priority: Option<Priority>,
}

impl TaskFilter {
    pub fn pending() -> Self {
        Self {
            status: StatusFilter::Pending,
            ..Self::default()
        }
    }

    pub fn completed() -> Self {
        Self {
            status: StatusFilter::Completed,
            ..Self::default()
        }
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    pub fn matches(&self, task: &Task) -> bool {
        let status_ok = match self.status {
            StatusFilter::All => true,
            StatusFilter::Pending => !task.completed,
            StatusFilter::Completed => task.completed,
        };
        status_ok && self.priority.map_or(true, |p| p == task.priority)
    }
}
