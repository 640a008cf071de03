use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::TaskId;
use crate::store::DataStore;

pub fn run<S: DataStore>(store: &mut S, id: TaskId) -> Result<CmdResult> {
    let mut task = store.get_task(id)?;
    task.completed = !task.completed;
    store.save_task(&task)?;

    let state = if task.completed {
        "completed"
    } else {
        "pending"
    };
    let message = CmdMessage::success(format!(
        "Task marked as {} ({}): {}",
        state, task.id, task.text
    ));
    Ok(CmdResult::default()
        .with_changed()
        .with_message(message)
        .with_affected_tasks(vec![task]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TaskError;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn toggles_to_completed() {
        let mut store = StoreFixture::new().with_tasks(1).store;
        let result = run(&mut store, TaskId(1)).unwrap();
        assert!(result.changed);
        assert!(result.task().unwrap().completed);
        assert!(store.get_task(TaskId(1)).unwrap().completed);
    }

    #[test]
    fn toggle_twice_restores_state() {
        let mut store = StoreFixture::new().with_completed_task("Done").store;
        run(&mut store, TaskId(1)).unwrap();
        run(&mut store, TaskId(1)).unwrap();
        assert!(store.get_task(TaskId(1)).unwrap().completed);
    }

    #[test]
    fn keeps_text_and_created_at() {
        let mut store = StoreFixture::new().with_tasks(1).store;
        let before = store.get_task(TaskId(1)).unwrap();
        run(&mut store, TaskId(1)).unwrap();
        let after = store.get_task(TaskId(1)).unwrap();
        assert_eq!(before.text, after.text);
        assert_eq!(before.created_at, after.created_at);
    }

    #[test]
    fn missing_task_is_not_found() {
        let mut store = StoreFixture::new().with_tasks(1).store;
        let err = run(&mut store, TaskId(5)).unwrap_err();
        assert!(matches!(err, TaskError::NotFound(TaskId(5))));
    }
}
