use crate::model::Task;
use serde::Serialize;

/// Derived counts over a task snapshot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Stats {
    pub total: usize,
    pub completed: usize,
}

impl Stats {
    pub fn pending(&self) -> usize {
        self.total.saturating_sub(self.completed)
    }
}

/// Computes stats from a snapshot. Holds no state, so callers recompute after every mutation.
pub fn compute(tasks: &[Task]) -> Stats {
    Stats {
        total: tasks.len(),
        completed: tasks.iter().filter(|t| t.completed).count(),
    }
}
