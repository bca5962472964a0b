//! cmdkit: a minimal subcommand runner.
//!
//! A [`runner::Runner`] holds ordered [`command::CommandDescriptor`]s and an
//! optional default command. The [`help`] command introspects the runner to
//! print a column-aligned catalog or a single command's detail.

pub mod builtin;
pub mod cli;
pub mod command;
pub mod config;
pub mod error;
pub mod help;
pub mod logging;
pub mod output;
pub mod runner;
pub mod style;
