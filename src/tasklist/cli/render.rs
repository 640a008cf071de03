use chrono::{DateTime, Local, Utc};
use colored::Colorize;
use tasklist::commands::{CmdMessage, MessageLevel};
use tasklist::events::{Notification, Observer, Rejection};
use tasklist::model::{Priority, Task};
use tasklist::stats::Stats;
use timeago::Formatter;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const TEXT_WIDTH: usize = 48;
const TIME_WIDTH: usize = 14;
const DONE_MARKER: &str = "[x]";
const PENDING_MARKER: &str = "[ ]";

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
        }
    }
}

/// Re-renders the session whenever the API reports a change.
pub(super) struct TerminalRenderer;

impl Observer for TerminalRenderer {
    fn notify(&mut self, notification: &Notification) {
        match notification {
            Notification::TaskListChanged(tasks) => print!("{}", render_task_list(tasks)),
            Notification::StatsChanged(stats) => println!("{}", render_stats(stats)),
            Notification::OperationRejected(rejection) => {
                println!("{}", render_rejection(rejection))
            }
        }
    }
}

pub(super) fn render_stats(stats: &Stats) -> String {
    let total = stats.total.to_string();
    let completed = stats.completed.to_string();
    let total = if stats.total > 0 {
        total.blue()
    } else {
        total.dimmed()
    };
    let completed = if stats.completed > 0 {
        completed.green()
    } else {
        completed.dimmed()
    };
    format!("Total: {}  Completed: {}", total, completed)
}

pub(super) fn render_rejection(rejection: &Rejection) -> String {
    format!("Rejected ({}): {}", rejection.operation, rejection.reason)
        .red()
        .to_string()
}

pub(super) fn render_task_list(tasks: &[Task]) -> String {
    if tasks.is_empty() {
        return format!("{}\n", "No tasks yet.".dimmed());
    }

    let id_width = tasks
        .iter()
        .map(|t| t.id.to_string().len())
        .max()
        .unwrap_or(1);

    let mut out = String::new();
    for task in tasks {
        out.push_str(&render_task_line(task, id_width));
        out.push('\n');
    }
    out
}

fn render_task_line(task: &Task, id_width: usize) -> String {
    let marker = if task.completed {
        DONE_MARKER.green()
    } else {
        PENDING_MARKER.normal()
    };

    let text = truncate_to_width(&task.text, TEXT_WIDTH);
    let padding = TEXT_WIDTH.saturating_sub(text.width());
    let text = if task.completed {
        text.dimmed().strikethrough()
    } else if task.priority == Priority::High {
        text.bold()
    } else {
        text.normal()
    };

    format!(
        "  {} {:>width$}. {}{} {} {} {}",
        marker,
        task.id,
        text,
        " ".repeat(padding),
        priority_tag(task.priority),
        format_created(task.created_at).dimmed(),
        format_time_ago(task.created_at).dimmed(),
        width = id_width
    )
}

fn priority_tag(priority: Priority) -> colored::ColoredString {
    let label = format!("{:<6}", priority.as_str());
    match priority {
        Priority::High => label.red(),
        Priority::Normal => label.blue(),
        Priority::Low => label.dimmed(),
    }
}

fn format_created(timestamp: DateTime<Utc>) -> String {
    timestamp
        .with_timezone(&Local)
        .format("%Y-%m-%d %H:%M")
        .to_string()
}

fn format_time_ago(timestamp: DateTime<Utc>) -> String {
    let duration = Utc::now().signed_duration_since(timestamp);
    let time_str = Formatter::new().convert(duration.to_std().unwrap_or_default());
    format!("{:>width$}", time_str, width = TIME_WIDTH)
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}
