//! Command handlers. Each submodule implements one subcommand.

pub mod completions;
pub mod config;
pub mod list;
pub mod new;
