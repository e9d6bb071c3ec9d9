//! # CLI Layer
//!
//! One possible UI client for campusmart. This is the only place that knows about
//! the terminal: argument parsing, colors, stdout/stderr and the process exit code.
//!
//! - `setup`: clap definitions
//! - `commands`: context setup and per-command handlers calling [`campusmart::api`]
//! - `render`: turns `CmdResult`s into terminal text

mod commands;
mod render;
mod setup;

pub use commands::run;
