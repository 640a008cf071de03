use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::DataStore;

/// Removes every completed task. Clearing nothing is informational, not an error.
pub fn completed<S: DataStore>(store: &mut S) -> Result<CmdResult> {
    let removed = store.delete_where(|t| t.completed)?;
    let mut result = CmdResult::default().with_removed(removed.len());

    if removed.is_empty() {
        result.add_message(CmdMessage::info("No completed tasks to delete."));
    } else {
        result.add_message(CmdMessage::success(format!(
            "Deleted {} completed {}.",
            removed.len(),
            plural(removed.len())
        )));
    }
    Ok(result.with_affected_tasks(removed))
}

/// Removes every task. Ids already handed out stay retired.
pub fn all<S: DataStore>(store: &mut S) -> Result<CmdResult> {
    let removed = store.delete_where(|_| true)?;
    let mut result = CmdResult::default().with_removed(removed.len());

    if removed.is_empty() {
        result.add_message(CmdMessage::info("No tasks to delete."));
    } else {
        result.add_message(CmdMessage::success(format!(
            "Deleted all {} {}.",
            removed.len(),
            plural(removed.len())
        )));
    }
    Ok(result.with_affected_tasks(removed))
}

fn plural(n: usize) -> &'static str {
    if n == 1 {
        "task"
    } else {
        "tasks"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::add;
    use crate::model::Priority;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn clear_completed_keeps_pending() {
        let mut store = StoreFixture::new()
            .with_completed_task("A")
            .with_task("B", Priority::Normal)
            .store;

        let result = completed(&mut store).unwrap();
        assert_eq!(result.removed, 1);

        let left = store.list_tasks().unwrap();
        assert_eq!(left.len(), 1);
        assert_eq!(left[0].text, "B");
    }

    #[test]
    fn clear_completed_with_nothing_done_is_informational() {
        let mut store = StoreFixture::new().with_tasks(2).store;
        let result = completed(&mut store).unwrap();
        assert_eq!(result.removed, 0);
        assert!(!result.changed);
        assert_eq!(result.messages[0].content, "No completed tasks to delete.");
        assert_eq!(store.list_tasks().unwrap().len(), 2);
    }

    #[test]
    fn clear_all_returns_prior_size_then_zero() {
        let mut store = StoreFixture::new()
            .with_tasks(3)
            .with_completed_task("done")
            .store;

        assert_eq!(all(&mut store).unwrap().removed, 4);
        assert!(store.list_tasks().unwrap().is_empty());
        assert_eq!(all(&mut store).unwrap().removed, 0);
    }

    #[test]
    fn ids_are_not_reused_after_clear_all() {
        let mut store = StoreFixture::new().with_tasks(2).store;
        all(&mut store).unwrap();

        let result = add::run(&mut store, "fresh", Priority::Normal).unwrap();
        assert_eq!(result.task().unwrap().id.0, 3);
    }
}
