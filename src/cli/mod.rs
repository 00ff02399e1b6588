//! CLI command definitions, argument parsing, and the interactive shell.
//!
//! Uses clap derive macros for ergonomic argument definitions.

pub mod args;
pub mod shell;
