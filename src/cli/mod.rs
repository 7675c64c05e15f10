//! CLI module for todor - command-line interface and subcommands.
//!
//! Provides the main entry point with subcommands for adding, viewing, and
//! deleting todos, plus the interactive prompt mode.

pub mod commands;

pub use commands::Cli;
