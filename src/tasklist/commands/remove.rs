use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::TaskId;
use crate::store::DataStore;

/// Removes a single task. An unknown id is a no-op, not an error.
pub fn run<S: DataStore>(store: &mut S, id: TaskId) -> Result<CmdResult> {
    let Some(task) = store.delete_task(id)? else {
        return Ok(CmdResult::default()
            .with_message(CmdMessage::info(format!("No task with id {}", id))));
    };

    let message = CmdMessage::success(format!("Task deleted ({}): {}", task.id, task.text));
    Ok(CmdResult::default()
        .with_removed(1)
        .with_message(message)
        .with_affected_tasks(vec![task]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Priority;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn removes_existing_task() {
        let mut store = StoreFixture::new()
            .with_task("A", Priority::Normal)
            .with_task("B", Priority::Normal)
            .store;

        let result = run(&mut store, TaskId(1)).unwrap();
        assert_eq!(result.removed, 1);
        assert!(result.changed);

        let left = store.list_tasks().unwrap();
        assert_eq!(left.len(), 1);
        assert_eq!(left[0].text, "B");
    }

    #[test]
    fn second_remove_is_a_noop() {
        let mut store = StoreFixture::new().with_tasks(1).store;

        assert_eq!(run(&mut store, TaskId(1)).unwrap().removed, 1);
        let again = run(&mut store, TaskId(1)).unwrap();
        assert_eq!(again.removed, 0);
        assert!(!again.changed);
        assert!(again.affected_tasks.is_empty());
    }

    #[test]
    fn unknown_id_leaves_store_untouched() {
        let mut store = StoreFixture::new().with_tasks(2).store;
        run(&mut store, TaskId(42)).unwrap();
        assert_eq!(store.list_tasks().unwrap().len(), 2);
    }
}
