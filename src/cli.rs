//! Command-line interface definitions
//!
//! Shared by the `oscrec` binary and `xtask` (man page generation).

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[cfg(not(feature = "release"))]
const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("VERGEN_GIT_SHA"),
    ", built ",
    env!("OSCREC_BUILD_DATE"),
    ")"
);

#[cfg(feature = "release")]
const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (built ",
    env!("OSCREC_BUILD_DATE"),
    ")"
);

const EXAMPLES: &str = "\
Examples:
  oscrec record 5000 test.xml /muse/elements/blink
  oscrec record 4999 test2.xml /muse/elements/blink /muse/elements/jaw_clench
  oscrec play 5000 test.xml";

#[derive(Debug, Parser)]
#[command(
    name = "oscrec",
    version,
    long_version = LONG_VERSION,
    about = "Record OSC messages to XML and play them back",
    after_help = EXAMPLES,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Record OSC messages on the given channels until interrupted
    Record(RecordArgs),

    /// Print the messages stored in a recording
    Play(PlayArgs),

    /// Show or initialize the configuration file
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Generate shell completions
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Debug, Args)]
pub struct RecordArgs {
    /// UDP port to listen on
    pub port: u16,

    /// XML file rewritten with all captured messages
    pub output: PathBuf,

    /// Exact OSC addresses to capture
    #[arg(required = true, num_args = 1..)]
    pub channels: Vec<String>,

    /// Messages captured between file rewrites [default: from config, else 5]
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..))]
    pub interval: Option<u32>,
}

#[derive(Debug, Args)]
pub struct PlayArgs {
    /// UDP port (reserved; playback only prints)
    pub port: u16,

    /// Recording to play
    pub input: PathBuf,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the effective configuration as TOML
    Show,

    /// Print the configuration file path
    Path,

    /// Write a default configuration file if none exists
    Init,
}
