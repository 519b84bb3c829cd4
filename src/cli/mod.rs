//! CLI module for pomoglow - command-line arguments.
//!
//! There are no subcommands; running the binary launches the timer UI.

pub mod commands;

pub use commands::Cli;
