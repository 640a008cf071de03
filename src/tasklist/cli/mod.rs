//! # CLI Behavior
//!
//! This is **one possible UI client** for tasklist, not the application itself.
//! The CLI is the only place that knows about terminal I/O, exit codes, and output formatting.
//!
//! ## Session
//!
//! `tasklist` starts a session and reads commands from stdin until `quit` or EOF:
//!
//! ```text
//! add -p high Buy milk
//! toggle 1
//! edit 1 Buy oat milk
//! list --done
//! clear-all
//! ```
//!
//! Blank lines and `#` comments are skipped, so a session can be scripted from a file.
//!
//! ## Confirmation Gates
//!
//! `clear-done` and `clear-all` ask `[y/N]` on the next input line before touching the
//! store, unless `-y` is given or `confirm_clear` is off in `config.json`. The library
//! itself never asks.
//!
//! ## Module Structure
//!
//! - `commands`: Session loop and per-command handlers
//! - `render`: Output formatting and the notification observer
//! - `setup`: Argument parsing via clap

mod commands;
mod render;
pub mod setup;

pub use commands::run;
