//! CLI argument definitions for the dashboard.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use neo_cli::render::ViewFormat;
use neo_feed::DEFAULT_ENDPOINT;
use neo_model::{ColumnKey, SortDirection};

#[derive(Parser)]
#[command(
    name = "deep-impact",
    version,
    about = "Near-Earth object close approaches - filterable, sortable summary",
    long_about = "Fetch a near-Earth object feed and show its close approaches.\n\n\
                  Rows can be limited to a number of days from the earliest approach\n\
                  and sorted by date, name, velocity or miss distance."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

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

#[derive(Subcommand)]
pub enum Command {
    /// Load the feed and show the dashboard.
    Show(ShowArgs),

    /// List the table columns.
    Columns,
}

#[derive(Parser)]
pub struct ShowArgs {
    /// Feed endpoint answering a single GET.
    #[arg(long = "url", value_name = "URL", default_value = DEFAULT_ENDPOINT)]
    pub url: String,

    /// Read a saved feed response instead of requesting the endpoint.
    #[arg(long = "input", value_name = "FILE", conflicts_with = "url")]
    pub input: Option<PathBuf>,

    /// Give up on the request after this many seconds (default: wait indefinitely).
    #[arg(long = "timeout-secs", value_name = "SECS")]
    pub timeout_secs: Option<u64>,

    /// Only show approaches within this many days of the earliest one.
    #[arg(long = "range", value_name = "DAYS")]
    pub range: Option<String>,

    /// Column to sort by.
    #[arg(long = "sort", value_enum, value_name = "COLUMN")]
    pub sort: Option<SortColumnArg>,

    /// Sort direction (default: asc).
    #[arg(long = "direction", value_enum)]
    pub direction: Option<DirectionArg>,

    /// Output format.
    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: OutputFormatArg,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum SortColumnArg {
    Date,
    Name,
    Velocity,
    MissDistance,
    Url,
}

impl From<SortColumnArg> for ColumnKey {
    fn from(arg: SortColumnArg) -> Self {
        match arg {
            SortColumnArg::Date => ColumnKey::Date,
            SortColumnArg::Name => ColumnKey::Name,
            SortColumnArg::Velocity => ColumnKey::Velocity,
            SortColumnArg::MissDistance => ColumnKey::MissDistance,
            SortColumnArg::Url => ColumnKey::Url,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum DirectionArg {
    Asc,
    Desc,
}

impl From<DirectionArg> for SortDirection {
    fn from(arg: DirectionArg) -> Self {
        match arg {
            DirectionArg::Asc => SortDirection::Asc,
            DirectionArg::Desc => SortDirection::Desc,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormatArg {
    Table,
    Json,
}

impl From<OutputFormatArg> for ViewFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Table => ViewFormat::Table,
            OutputFormatArg::Json => ViewFormat::Json,
        }
    }
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
