//! Subcommand handlers

pub mod completions;
pub mod config;
pub mod play;
pub mod record;
