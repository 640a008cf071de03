use crate::model::TaskId;
use crate::validation::ValidationError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TaskError {
    #[error("Invalid task text: {0}")]
    Validation(#[from] ValidationError),

    #[error("Task not found: {0}")]
    NotFound(TaskId),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl TaskError {
    /// Whether the caller can re-prompt and carry on. Only config I/O is not.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, TaskError::Validation(_) | TaskError::NotFound(_))
    }
}

pub type Result<T> = std::result::Result<T, TaskError>;
