use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::TaskId;
use crate::store::DataStore;
use crate::validation::validate_text;

/// Replaces a task's text.
///
/// The id is resolved first, so an unknown id reports `NotFound` even when the
/// new text is also invalid. Text identical to the current one (after trimming)
/// succeeds without touching the store and carries a warning instead.
pub fn run<S: DataStore>(store: &mut S, id: TaskId, new_text: &str) -> Result<CmdResult> {
    let mut task = store.get_task(id)?;
    let text = validate_text(new_text)?;

    if text == task.text {
        let message = CmdMessage::warning(format!(
            "Task unchanged ({}): text is the same",
            task.id
        ));
        return Ok(CmdResult::default()
            .with_message(message)
            .with_affected_tasks(vec![task]));
    }

    task.text = text;
    store.save_task(&task)?;

    let message = CmdMessage::success(format!("Task updated ({}): {}", task.id, task.text));
    Ok(CmdResult::default()
        .with_changed()
        .with_message(message)
        .with_affected_tasks(vec![task]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{toggle, MessageLevel};
    use crate::error::TaskError;
    use crate::model::Priority;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::validation::ValidationError;

    #[test]
    fn replaces_text() {
        let mut store = StoreFixture::new().with_task("Buy milk", Priority::High).store;
        let result = run(&mut store, TaskId(1), " Buy oat milk ").unwrap();
        assert!(result.changed);
        assert_eq!(store.get_task(TaskId(1)).unwrap().text, "Buy oat milk");
    }

    #[test]
    fn keeps_completed_priority_and_created_at() {
        let mut store = StoreFixture::new().with_task("Buy milk", Priority::High).store;
        toggle::run(&mut store, TaskId(1)).unwrap();
        let before = store.get_task(TaskId(1)).unwrap();

        run(&mut store, TaskId(1), "Buy oat milk").unwrap();
        let after = store.get_task(TaskId(1)).unwrap();
        assert!(after.completed);
        assert_eq!(after.priority, Priority::High);
        assert_eq!(after.created_at, before.created_at);
    }

    #[test]
    fn identical_text_is_a_noop_success() {
        let mut store = StoreFixture::new().with_task("Same", Priority::Normal).store;
        let result = run(&mut store, TaskId(1), "  Same ").unwrap();
        assert!(!result.changed);
        assert_eq!(result.messages[0].level, MessageLevel::Warning);
        assert_eq!(result.task().unwrap().text, "Same");
    }

    #[test]
    fn empty_text_is_rejected_and_task_unchanged() {
        let mut store = StoreFixture::new().with_task("Keep", Priority::Normal).store;
        let err = run(&mut store, TaskId(1), "   ").unwrap_err();
        assert!(matches!(err, TaskError::Validation(ValidationError::Empty)));
        assert_eq!(store.get_task(TaskId(1)).unwrap().text, "Keep");
    }

    #[test]
    fn too_long_text_is_rejected() {
        let mut store = StoreFixture::new().with_task("Keep", Priority::Normal).store;
        let err = run(&mut store, TaskId(1), &"y".repeat(150)).unwrap_err();
        assert!(matches!(
            err,
            TaskError::Validation(ValidationError::TooLong { len: 150 })
        ));
        assert_eq!(store.get_task(TaskId(1)).unwrap().text, "Keep");
    }

    #[test]
    fn unknown_id_wins_over_invalid_text() {
        let mut store = StoreFixture::new().with_tasks(1).store;
        let err = run(&mut store, TaskId(3), "").unwrap_err();
        assert!(matches!(err, TaskError::NotFound(TaskId(3))));
    }
}
