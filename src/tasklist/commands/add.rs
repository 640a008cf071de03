use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{Priority, Task};
use crate::store::DataStore;
use crate::validation::validate_text;

pub fn run<S: DataStore>(store: &mut S, text: &str, priority: Priority) -> Result<CmdResult> {
    let text = validate_text(text)?;

    let task = Task::new(store.allocate_id(), text, priority);
    store.save_task(&task)?;

    let message = CmdMessage::success(format!("Task added ({}): {}", task.id, task.text));
    Ok(CmdResult::default()
        .with_changed()
        .with_message(message)
        .with_affected_tasks(vec![task]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::error::TaskError;
    use crate::store::memory::InMemoryStore;
    use crate::validation::ValidationError;

    #[test]
    fn adds_pending_trimmed_task() {
        let mut store = InMemoryStore::new();
        let result = run(&mut store, "  Buy milk  ", Priority::High).unwrap();

        let task = result.task().unwrap();
        assert_eq!(task.text, "Buy milk");
        assert!(!task.completed);
        assert_eq!(task.priority, Priority::High);
        assert!(result.changed);
        assert_eq!(result.messages[0].level, MessageLevel::Success);
        assert_eq!(store.list_tasks().unwrap().len(), 1);
    }

    #[test]
    fn assigns_unique_ids() {
        let mut store = InMemoryStore::new();
        let a = run(&mut store, "A", Priority::Normal).unwrap();
        let b = run(&mut store, "A", Priority::Normal).unwrap();
        assert_ne!(a.task().unwrap().id, b.task().unwrap().id);
    }

    #[test]
    fn appends_in_insertion_order() {
        let mut store = InMemoryStore::new();
        for text in ["first", "second", "third"] {
            run(&mut store, text, Priority::Low).unwrap();
        }
        let texts: Vec<_> = store
            .list_tasks()
            .unwrap()
            .into_iter()
            .map(|t| t.text)
            .collect();
        assert_eq!(texts, vec!["first", "second", "third"]);
    }

    #[test]
    fn rejects_empty_and_blank_without_mutating() {
        let mut store = InMemoryStore::new();
        for text in ["", "   "] {
            let err = run(&mut store, text, Priority::Normal).unwrap_err();
            assert!(matches!(
                err,
                TaskError::Validation(ValidationError::Empty)
            ));
        }
        assert!(store.list_tasks().unwrap().is_empty());
    }

    #[test]
    fn rejects_too_long_without_mutating() {
        let mut store = InMemoryStore::new();
        run(&mut store, "keep me", Priority::Normal).unwrap();

        let err = run(&mut store, &"x".repeat(101), Priority::Normal).unwrap_err();
        assert!(matches!(
            err,
            TaskError::Validation(ValidationError::TooLong { len: 101 })
        ));
        assert_eq!(store.list_tasks().unwrap().len(), 1);
    }
}
