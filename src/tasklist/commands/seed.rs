use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{Priority, Task};
use crate::store::DataStore;
use chrono::{DateTime, Duration, Utc};

/// Demo tasks: (text, priority, completed, age in days).
const SAMPLES: [(&str, Priority, bool, i64); 3] = [
    ("Learn the basics of Rust", Priority::High, false, 2),
    ("Finish the task list project", Priority::Normal, true, 1),
    ("Read the technical docs", Priority::Normal, false, 0),
];

/// Loads the demo tasks with backdated creation times relative to `now`.
///
/// Only an empty store is seeded; otherwise the call is an informational no-op.
pub fn run<S: DataStore>(store: &mut S, now: DateTime<Utc>) -> Result<CmdResult> {
    if !store.list_tasks()?.is_empty() {
        return Ok(CmdResult::default().with_message(CmdMessage::info(
            "Task list is not empty, sample tasks not loaded.",
        )));
    }

    let mut seeded = Vec::with_capacity(SAMPLES.len());
    for (text, priority, completed, age_days) in SAMPLES {
        let created_at = now - Duration::days(age_days);
        let mut task =
            Task::with_created_at(store.allocate_id(), text.to_string(), priority, created_at);
        task.completed = completed;
        store.save_task(&task)?;
        seeded.push(task);
    }

    let message = CmdMessage::info(format!("Loaded {} sample tasks.", seeded.len()));
    Ok(CmdResult::default()
        .with_changed()
        .with_message(message)
        .with_affected_tasks(seeded))
}
