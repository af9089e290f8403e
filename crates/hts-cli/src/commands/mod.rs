//! CLI subcommands.

pub mod config;
pub mod list;
pub mod process;
