use super::DataStore;
use crate::error::{Result, TaskError};
use crate::model::{Task, TaskId};

/// In-memory, ordered task storage.
/// Does NOT persist data.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    tasks: Vec<Task>,
    last_id: u64,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn position(&self, id: TaskId) -> Option<usize> {
        self.tasks.iter().position(|t| t.id == id)
    }
}

impl DataStore for InMemoryStore {
    fn allocate_id(&mut self) -> TaskId {
        self.last_id += 1;
        TaskId(self.last_id)
    }

    fn save_task(&mut self, task: &Task) -> Result<()> {
        match self.position(task.id) {
            Some(idx) => self.tasks[idx] = task.clone(),
            None => self.tasks.push(task.clone()),
        }
        Ok(())
    }

    fn get_task(&self, id: TaskId) -> Result<Task> {
        self.tasks
            .iter()
            .find(|t| t.id == id)
            .cloned()
            .ok_or(TaskError::NotFound(id))
    }

    fn list_tasks(&self) -> Result<Vec<Task>> {
        Ok(self.tasks.clone())
    }

    fn delete_task(&mut self, id: TaskId) -> Result<Option<Task>> {
        Ok(self.position(id).map(|idx| self.tasks.remove(idx)))
    }

    fn delete_where<F>(&mut self, mut pred: F) -> Result<Vec<Task>>
    where
        F: FnMut(&Task) -> bool,
    {
        let (removed, kept): (Vec<Task>, Vec<Task>) =
            std::mem::take(&mut self.tasks).into_iter().partition(|t| pred(t));
        self.tasks = kept;
        Ok(removed)
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::Priority;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_tasks(mut self, count: usize) -> Self {
            for i in 0..count {
                let id = self.store.allocate_id();
                let task = Task::new(id, format!("Test task {}", i + 1), Priority::Normal);
                self.store.save_task(&task).unwrap();
            }
            self
        }

        pub fn with_task(mut self, text: &str, priority: Priority) -> Self {
            let id = self.store.allocate_id();
            let task = Task::new(id, text.to_string(), priority);
            self.store.save_task(&task).unwrap();
            self
        }

        pub fn with_completed_task(mut self, text: &str) -> Self {
            let id = self.store.allocate_id();
            let mut task = Task::new(id, text.to_string(), Priority::Normal);
            task.completed = true;
            self.store.save_task(&task).unwrap();
            self
        }
    }
}
