//! CLI argument definitions for the animal catalog generator.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use zoo_model::{DEFAULT_DATA_FILE, DEFAULT_OUTPUT_FILE, DEFAULT_TEMPLATE_FILE};

#[derive(Parser)]
#[command(
    name = "zoo",
    version,
    about = "Animal catalog generator - Render animal records as text or HTML",
    long_about = "Read animal records from a JSON file, normalize name, diet, location \
                  and type, and render them.\n\n\
                  Without a subcommand the records are rendered into the HTML template \
                  and written to the output file."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// JSON file with the animal records.
    #[arg(
        long = "data",
        value_name = "PATH",
        default_value = DEFAULT_DATA_FILE,
        global = true
    )]
    pub data: PathBuf,

    /// Reject records without characteristics and exit non-zero on any issue.
    #[arg(long = "strict", global = true)]
    pub strict: bool,

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
    /// Render the records into the HTML template and write the output file (default).
    Html(HtmlArgs),

    /// Print the records as text lines.
    Text,
}

#[derive(Args)]
pub struct HtmlArgs {
    /// HTML template containing the placeholder.
    #[arg(long = "template", value_name = "PATH", default_value = DEFAULT_TEMPLATE_FILE)]
    pub template: PathBuf,

    /// Output HTML file (created or overwritten).
    #[arg(long = "output", value_name = "PATH", default_value = DEFAULT_OUTPUT_FILE)]
    pub output: PathBuf,

    /// Replace every placeholder occurrence instead of only the first.
    #[arg(long = "replace-all")]
    pub replace_all: bool,
}

impl Default for HtmlArgs {
    fn default() -> Self {
        Self {
            template: PathBuf::from(DEFAULT_TEMPLATE_FILE),
            output: PathBuf::from(DEFAULT_OUTPUT_FILE),
            replace_all: false,
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
