//! # Tasklist CLI
//!
//! The binary is intentionally thin: the terminal client lives in `cli/`, while this
//! file only invokes `cli::run()` and handles process termination.
//!
//! Tasks live only in memory, so the client is a **session**: it reads one gesture per
//! line from stdin, routes it through [`tasklist::api::TaskApi`], and renders the
//! notifications the API sends back. Everything from `api.rs` inward is UI agnostic;
//! parsing, prompting and rendering all happen here.
//!
//! ```text
//! stdin line ──► cli::setup (clap) ──► cli::commands (confirm gates) ──► TaskApi
//!                                                                          │
//! stdout ◄── cli::render (TerminalRenderer observer, messages) ◄───────────┘
//! ```

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
