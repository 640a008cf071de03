//! # Session Layer
//!
//! The session reads one command per line, routes it through [`TaskApi`] and prints the
//! outcome. Rendering of state changes is driven by the API's notifications (see
//! `render::TerminalRenderer`); handlers here only print the per-command messages.
//!
//! Recoverable failures (bad text, unknown id) have already been rendered as a
//! rejection by the time the handler sees the error, so the session just moves on.
//! Anything else ends the session with an error.

use super::render::{print_messages, render_stats, render_task_list, TerminalRenderer};
use super::setup::{Cli, SessionCommand, SessionLine};
use clap::Parser;
use directories::ProjectDirs;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tasklist::api::TaskApi;
use tasklist::commands::{CmdMessage, CmdResult, TaskFilter};
use tasklist::config::TasklistConfig;
use tasklist::error::Result;
use tasklist::model::{Priority, TaskId};
use tasklist::store::memory::InMemoryStore;
use tracing::{debug, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

struct AppContext {
    api: TaskApi<InMemoryStore>,
    config: TasklistConfig,
    assume_yes: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ClearKind {
    Completed,
    All,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut ctx = init_context(&cli)?;
    let stdin = io::stdin();
    run_session(&mut ctx, stdin.lock())
}

/// `RUST_LOG` wins when set and valid; otherwise `-v` turns on debug logs for this crate.
fn init_tracing(verbose: bool) {
    let filter = std::env::var("RUST_LOG")
        .ok()
        .and_then(|raw| {
            let raw = raw.trim();
            if raw.is_empty() {
                return None;
            }
            EnvFilter::try_new(raw).ok()
        })
        .unwrap_or_else(|| {
            if verbose {
                EnvFilter::new("tasklist=debug")
            } else {
                EnvFilter::new("off")
            }
        });

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();
}

fn config_dir(cli: &Cli) -> Option<PathBuf> {
    cli.config.clone().or_else(|| {
        ProjectDirs::from("com", "tasklist", "tasklist")
            .map(|dirs| dirs.config_dir().to_path_buf())
    })
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let config = match config_dir(cli) {
        Some(dir) => TasklistConfig::load(&dir).unwrap_or_else(|e| {
            warn!(dir = %dir.display(), error = %e, "could not read config, using defaults");
            TasklistConfig::default()
        }),
        None => TasklistConfig::default(),
    };
    debug!(?config, "session config");

    let mut api = TaskApi::new(InMemoryStore::new());
    api.subscribe(Box::new(TerminalRenderer));

    if cli.demo || config.seed_samples {
        let result = api.seed_samples()?;
        print_messages(&result.messages);
    }

    let stats = api.stats()?;
    if stats.total > 0 {
        print_messages(&[CmdMessage::info(format!(
            "Welcome to your task list! You have {} tasks.",
            stats.total
        ))]);
    }

    Ok(AppContext {
        api,
        config,
        assume_yes: cli.yes,
    })
}

fn run_session<R: BufRead>(ctx: &mut AppContext, input: R) -> Result<()> {
    let mut lines = input.lines();

    while let Some(line) = lines.next() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let parsed = match SessionLine::parse_line(line) {
            Ok(parsed) => parsed,
            Err(e) => {
                if e.use_stderr() {
                    eprint!("{}", e.render());
                } else {
                    print!("{}", e.render());
                }
                continue;
            }
        };

        match parsed.command {
            SessionCommand::Quit => break,
            SessionCommand::Add { priority, text } => handle_add(ctx, priority, &text)?,
            SessionCommand::Toggle { id } => handle_toggle(ctx, id)?,
            SessionCommand::Edit { id, text } => handle_edit(ctx, id, &text)?,
            SessionCommand::Delete { id } => handle_delete(ctx, id)?,
            SessionCommand::List {
                done,
                pending,
                priority,
            } => handle_list(ctx, done, pending, priority)?,
            SessionCommand::Stats => handle_stats(ctx)?,
            SessionCommand::ClearDone { yes } => {
                handle_clear(ctx, ClearKind::Completed, yes, &mut lines)?
            }
            SessionCommand::ClearAll { yes } => handle_clear(ctx, ClearKind::All, yes, &mut lines)?,
        }
        io::stdout().flush()?;
    }

    Ok(())
}

/// Prints messages on success. Recoverable errors were already rendered by the observer.
fn report(outcome: Result<CmdResult>) -> Result<()> {
    match outcome {
        Ok(result) => {
            print_messages(&result.messages);
            Ok(())
        }
        Err(e) if e.is_recoverable() => Ok(()),
        Err(e) => Err(e),
    }
}

fn handle_add(ctx: &mut AppContext, priority: Option<Priority>, text: &[String]) -> Result<()> {
    let priority = priority.unwrap_or(ctx.config.default_priority);
    report(ctx.api.add_task(&text.join(" "), priority))
}

fn handle_toggle(ctx: &mut AppContext, id: TaskId) -> Result<()> {
    report(ctx.api.toggle_task(id))
}

fn handle_edit(ctx: &mut AppContext, id: TaskId, text: &[String]) -> Result<()> {
    report(ctx.api.edit_task(id, &text.join(" ")))
}

fn handle_delete(ctx: &mut AppContext, id: TaskId) -> Result<()> {
    report(ctx.api.remove_task(id))
}

fn handle_list(
    ctx: &mut AppContext,
    done: bool,
    pending: bool,
    priority: Option<Priority>,
) -> Result<()> {
    let mut filter = if done {
        TaskFilter::completed()
    } else if pending {
        TaskFilter::pending()
    } else {
        TaskFilter::default()
    };
    if let Some(priority) = priority {
        filter = filter.with_priority(priority);
    }

    let result = ctx.api.list_tasks(filter)?;
    print!("{}", render_task_list(&result.listed_tasks));
    print_messages(&result.messages);
    Ok(())
}

fn handle_stats(ctx: &mut AppContext) -> Result<()> {
    println!("{}", render_stats(&ctx.api.stats()?));
    Ok(())
}

fn handle_clear<I>(ctx: &mut AppContext, kind: ClearKind, yes: bool, input: &mut I) -> Result<()>
where
    I: Iterator<Item = io::Result<String>>,
{
    let stats = ctx.api.stats()?;
    let (count, prompt) = match kind {
        ClearKind::Completed => (
            stats.completed,
            format!("Delete {} completed tasks?", stats.completed),
        ),
        ClearKind::All => (
            stats.total,
            format!("Delete all {} tasks? This cannot be undone.", stats.total),
        ),
    };

    let skip_prompt = yes || ctx.assume_yes || !ctx.config.confirm_clear;
    if count > 0 && !skip_prompt && !confirm(&prompt, input)? {
        print_messages(&[CmdMessage::info("Operation cancelled.")]);
        return Ok(());
    }

    let outcome = match kind {
        ClearKind::Completed => ctx.api.clear_completed(),
        ClearKind::All => ctx.api.clear_all(),
    };
    report(outcome)
}

/// Asks on stdout and reads the answer from the next input line. EOF counts as "no".
fn confirm<I>(prompt: &str, input: &mut I) -> Result<bool>
where
    I: Iterator<Item = io::Result<String>>,
{
    print!("{} [y/N] ", prompt);
    io::stdout().flush()?;

    let answer = match input.next() {
        Some(line) => line?,
        None => return Ok(false),
    };
    println!();
    Ok(matches!(
        answer.trim().to_ascii_lowercase().as_str(),
        "y" | "yes"
    ))
}
