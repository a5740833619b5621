//! # Taskhub - a shared task list for small teams
//!
//! A command-line backend for keeping a single task collection per machine,
//! with per-user ownership, visibility control and completion tracking.
//!
//! ## Features
//!
//! - **Task Management**: Create, complete, and delete tasks in a shared list
//! - **Ownership**: Every task belongs to the user who created it, forever
//! - **Visibility Control**: Owners can mark tasks private; private tasks are
//!   invisible and untouchable for everyone else
//! - **Users & Sessions**: Local login selects the identity commands act as
//! - **Typed Call Surface**: Operations addressed through a serializable
//!   request enum, ready to sit behind a transport
//!
//! ## Usage
//!
//! ```rust,no_run
//! use taskhub::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
