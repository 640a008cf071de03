use crate::commands::{CmdResult, TaskFilter};
use crate::error::Result;
use crate::store::DataStore;

pub fn run<S: DataStore>(store: &S, filter: TaskFilter) -> Result<CmdResult> {
    let listed = store
        .list_tasks()?
        .into_iter()
        .filter(|t| filter.matches(t))
        .collect();

    Ok(CmdResult::default().with_listed_tasks(listed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Priority;
    use crate::store::memory::fixtures::StoreFixture;

    fn store() -> crate::store::memory::InMemoryStore {
        StoreFixture::new()
            .with_task("A", Priority::High)
            .with_completed_task("B")
            .with_task("C", Priority::Low)
            .with_task("D", Priority::High)
            .store
    }

    fn texts(result: &CmdResult) -> Vec<&str> {
        result.listed_tasks.iter().map(|t| t.text.as_str()).collect()
    }

    #[test]
    fn default_filter_lists_everything_in_order() {
        let result = run(&store(), TaskFilter::default()).unwrap();
        assert_eq!(texts(&result), vec!["A", "B", "C", "D"]);
    }

    #[test]
    fn lists_pending_only() {
        let result = run(&store(), TaskFilter::pending()).unwrap();
        assert_eq!(texts(&result), vec!["A", "C", "D"]);
    }

    #[test]
    fn lists_completed_only() {
        let result = run(&store(), TaskFilter::completed()).unwrap();
        assert_eq!(texts(&result), vec!["B"]);
    }

    #[test]
    fn combines_status_and_priority() {
        let filter = TaskFilter::pending().with_priority(Priority::High);
        let result = run(&store(), filter).unwrap();
        assert_eq!(texts(&result), vec!["A", "D"]);
    }

    #[test]
    fn listing_does_not_mark_changed() {
        let result = run(&store(), TaskFilter::default()).unwrap();
        assert!(!result.changed);
    }
}
