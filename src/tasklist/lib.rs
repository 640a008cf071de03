//! # Tasklist Architecture
//!
//! Tasklist is a **UI-agnostic task list engine**. The terminal session shipped in the
//! binary is one client of the library; nothing in the library knows it exists.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Reads gestures from stdin, renders to stdout             │
//! │  - Confirmation prompts for destructive clears              │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Recomputes stats, notifies observers (events.rs)         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Task lifecycle: add, toggle, edit, remove, clear, list   │
//! │  - Validation (validation.rs) before any mutation           │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - DataStore trait, InMemoryStore                           │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Task Lifecycle
//!
//! ```text
//! add ──► Pending ◄──toggle──► Completed
//!            │                     │
//!            └──── remove/clear ───┴──► gone
//! ```
//!
//! `edit` replaces text without touching the completed flag. Ids come from a
//! per-store counter and are never reused, even after `clear_all`.
//!
//! ## Errors Are Values
//!
//! Validation failures and unknown ids come back as [`error::TaskError`]; the
//! store is never modified by a failing operation. The API also reports them to
//! observers as [`events::Notification::OperationRejected`].
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for each operation
//! - [`store`]: Storage abstraction and the in-memory store
//! - [`model`]: Core data types (`Task`, `TaskId`, `Priority`)
//! - [`validation`]: Text constraints
//! - [`stats`]: Total/completed counts
//! - [`events`]: Notifications and the `Observer` trait
//! - [`config`]: Session configuration
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod events;
pub mod model;
pub mod stats;
pub mod store;
pub mod validation;
