//! CLI argument definitions for the channel mapper.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "channel-mapper",
    version,
    about = "Match Jellyfin tuner channels to EPG provider channels",
    long_about = "Match Jellyfin tuner channels to EPG provider channels.\n\n\
                  `import` fuzzy-matches the live lineups and writes a mapping CSV for review.\n\
                  `export` applies a reviewed mapping CSV to the server.\n\n\
                  The server is configured through JELLYFIN_SERVER_ENDPOINT and JELLYFIN_API_TOKEN."
)]
pub struct Cli {
    /// Workflow to run.
    #[arg(value_enum)]
    pub command: CommandArg,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for warnings only).
    #[command(flatten)]
    pub verbosity: Verbosity<InfoLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum CommandArg {
    /// Fetch lineups, match channels and write a mapping CSV.
    Import,
    /// Apply a mapping CSV to the server.
    Export,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
