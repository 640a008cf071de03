use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tasklist::model::{Priority, TaskId};

/// Returns the version string, including git hash and commit date for non-release builds.
/// Format: "0.3.2" for releases, "0.3.2@abc1234 2024-01-15 14:30" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "tasklist", bin_name = "tasklist", version = get_version())]
#[command(
    about = "In-memory task list for the terminal",
    long_about = "Starts a task list session. Commands are read one per line from stdin; \
                  type `help` inside the session for the list of commands."
)]
pub struct Cli {
    /// Load the sample tasks when the session starts
    #[arg(long)]
    pub demo: bool,

    /// Directory holding config.json
    #[arg(short, long, value_name = "DIR")]
    pub config: Option<PathBuf>,

    /// Never ask before clearing tasks
    #[arg(short, long)]
    pub yes: bool,

    /// Verbose output (debug logs on stderr)
    #[arg(short, long)]
    pub verbose: bool,
}

/// One line of session input.
#[derive(Parser, Debug)]
#[command(name = "tasklist", no_binary_name = true, disable_version_flag = true)]
pub struct SessionLine {
    #[command(subcommand)]
    pub command: SessionCommand,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum SessionCommand {
    /// Add a task
    #[command(alias = "a")]
    Add {
        /// Priority: high, normal or low (defaults to the configured priority)
        #[arg(short, long)]
        priority: Option<Priority>,

        /// Task text (options go before it; everything after is text)
        #[arg(num_args = 0.., trailing_var_arg = true, allow_hyphen_values = true)]
        text: Vec<String>,
    },

    /// Toggle a task between pending and completed
    #[command(visible_alias = "done", alias = "t")]
    Toggle { id: TaskId },

    /// Replace a task's text
    #[command(alias = "e")]
    Edit {
        id: TaskId,

        /// New task text
        #[arg(num_args = 0.., trailing_var_arg = true, allow_hyphen_values = true)]
        text: Vec<String>,
    },

    /// Delete a task
    #[command(visible_alias = "rm", alias = "d")]
    Delete { id: TaskId },

    /// List tasks
    #[command(visible_alias = "ls")]
    List {
        /// Only completed tasks
        #[arg(long, conflicts_with = "pending")]
        done: bool,

        /// Only pending tasks
        #[arg(long)]
        pending: bool,

        /// Only tasks with this priority
        #[arg(short, long)]
        priority: Option<Priority>,
    },

    /// Show total and completed counts
    Stats,

    /// Delete all completed tasks
    ClearDone {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Delete every task
    ClearAll {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// End the session
    #[command(visible_alias = "exit", alias = "q")]
    Quit,
}

impl SessionLine {
    /// Parses a raw input line.
    ///
    /// clap sees whitespace-split words, but task text for `add` and `edit` is then
    /// re-read from the raw line so inner spacing survives. The text collects as a
    /// single element.
    pub fn parse_line(line: &str) -> Result<Self, clap::Error> {
        let mut parsed = Self::try_parse_from(line.split_whitespace())?;

        if let SessionCommand::Add { text, .. } | SessionCommand::Edit { text, .. } =
            &mut parsed.command
        {
            if let Some(raw) = raw_tail(line, text.len()) {
                *text = vec![raw];
            }
        }
        Ok(parsed)
    }
}

/// The raw remainder of `line` starting at its `count`-th word from the end.
fn raw_tail(line: &str, count: usize) -> Option<String> {
    if count == 0 {
        return None;
    }

    let mut starts = Vec::new();
    let mut in_word = false;
    for (idx, ch) in line.char_indices() {
        if ch.is_whitespace() {
            in_word = false;
        } else if !in_word {
            starts.push(idx);
            in_word = true;
        }
    }

    let start = *starts.get(starts.len().checked_sub(count)?)?;
    Some(line[start..].trim_end().to_string())
}
