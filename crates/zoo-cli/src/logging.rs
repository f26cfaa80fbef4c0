//! Logging infrastructure using `tracing` and `tracing-subscriber`.
//!
//! Diagnostics for every recoverable pipeline condition (missing data file,
//! malformed JSON, missing template or placeholder, write failures) are
//! emitted as `tracing` events, so they can be routed to stderr, a file, or
//! JSON for machine parsing.
//!
//! # Log Levels
//!
//! - `error`: fatal errors
//! - `warn`: degraded runs (no data, no template, nothing written)
//! - `info`: pipeline stage progress, record counts, output path
//! - `debug`: configuration, defaulted fields
//! - `trace`: everything else
//!
//! # Usage
//!
//! ```ignore
//! use zoo_cli::logging::{init_logging, LogConfig};
//!
//! let config = LogConfig {
//!     level_filter: LevelFilter::INFO,
//!     ..LogConfig::default()
//! };
//! init_logging(&config)?;
//! ```

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use tracing::Subscriber;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{
    EnvFilter,
    fmt::{self, MakeWriter, format::FmtSpan},
    layer::SubscriberExt,
};

/// Crates whose events follow the configured level.
const WORKSPACE_CRATES: [&str; 5] = [
    "zoo_cli",
    "zoo_ingest",
    "zoo_model",
    "zoo_report",
    "zoo_transform",
];

/// Configuration for logging behavior.
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Maximum level that is emitted.
    pub level_filter: LevelFilter,
    /// Whether `RUST_LOG` may override `level_filter`.
    pub use_env_filter: bool,
    /// Whether to use ANSI colors in output.
    pub with_ansi: bool,
    /// Output format: "pretty", "compact", or "json".
    pub format: LogFormat,
    /// Optional log file path. When set, logs are written to the file.
    pub log_file: Option<PathBuf>,
}

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable pretty format with colors.
    #[default]
    Pretty,
    /// Compact single-line format.
    Compact,
    /// JSON format for machine parsing.
    Json,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level_filter: LevelFilter::WARN,
            use_env_filter: true,
            with_ansi: true,
            format: LogFormat::default(),
            log_file: None,
        }
    }
}

/// Initialize the global tracing subscriber with the given configuration.
///
/// This should be called once at application startup.
///
/// # Errors
///
/// Returns an error if the log file cannot be opened or a global subscriber
/// is already installed.
pub fn init_logging(config: &LogConfig) -> io::Result<()> {
    let subscriber = if let Some(path) = &config.log_file {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        build_subscriber(config, SharedFileWriter::new(file))
    } else {
        build_subscriber(config, io::stderr)
    };
    tracing::subscriber::set_global_default(subscriber).map_err(io::Error::other)
}

/// Build the subscriber for `config`, writing to `writer`.
///
/// Text output carries no timestamps or targets. JSON output adds span close
/// events so stage durations can be read back.
fn build_subscriber<W>(config: &LogConfig, writer: W) -> Box<dyn Subscriber + Send + Sync>
where
    W: for<'writer> MakeWriter<'writer> + Send + Sync + 'static,
{
    let registry = tracing_subscriber::registry().with(build_env_filter(config));
    match config.format {
        LogFormat::Json => Box::new(
            registry.with(
                fmt::layer()
                    .json()
                    .with_writer(writer)
                    .with_target(false)
                    .with_span_events(FmtSpan::CLOSE),
            ),
        ),
        LogFormat::Compact => Box::new(
            registry.with(
                fmt::layer()
                    .compact()
                    .without_time()
                    .with_writer(writer)
                    .with_ansi(config.with_ansi)
                    .with_target(false),
            ),
        ),
        LogFormat::Pretty => Box::new(
            registry.with(
                fmt::layer()
                    .without_time()
                    .with_writer(writer)
                    .with_ansi(config.with_ansi)
                    .with_target(false),
            ),
        ),
    }
}

#[derive(Clone)]
struct SharedFileWriter {
    file: Arc<Mutex<std::fs::File>>,
}

impl SharedFileWriter {
    fn new(file: std::fs::File) -> Self {
        Self {
            file: Arc::new(Mutex::new(file)),
        }
    }
}

struct SharedFileGuard {
    file: Arc<Mutex<std::fs::File>>,
}

impl Write for SharedFileGuard {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut guard = self
            .file
            .lock()
            .map_err(|_| io::Error::other("log file lock poisoned"))?;
        guard.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        let mut guard = self
            .file
            .lock()
            .map_err(|_| io::Error::other("log file lock poisoned"))?;
        guard.flush()
    }
}

impl<'a> MakeWriter<'a> for SharedFileWriter {
    type Writer = SharedFileGuard;

    fn make_writer(&'a self) -> Self::Writer {
        SharedFileGuard {
            file: Arc::clone(&self.file),
        }
    }
}

/// Build the directive string: `level` globally and for every workspace crate.
fn default_directives(level_filter: LevelFilter) -> String {
    let level = level_filter.to_string().to_lowercase();
    let mut directives = level.clone();
    for name in WORKSPACE_CRATES {
        directives.push_str(&format!(",{name}={level}"));
    }
    directives
}

/// Build an `EnvFilter`, letting `RUST_LOG` win when `use_env_filter` is set.
fn build_env_filter(config: &LogConfig) -> EnvFilter {
    let fallback = || EnvFilter::new(default_directives(config.level_filter));
    if config.use_env_filter {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| fallback())
    } else {
        fallback()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::fs;
    use tempfile::NamedTempFile;

    fn explicit(level_filter: LevelFilter, format: LogFormat) -> LogConfig {
        LogConfig {
            level_filter,
            use_env_filter: false,
            with_ansi: false,
            format,
            log_file: None,
        }
    }

    /// Emit one event per level through a subscriber writing to a temp file.
    fn capture(config: &LogConfig) -> String {
        let file = NamedTempFile::new().expect("create log file");
        let writer = SharedFileWriter::new(file.reopen().expect("reopen log file"));
        tracing::subscriber::with_default(build_subscriber(config, writer), || {
            tracing::info!("ingest complete");
            tracing::warn!(path = "animals_data.json", "continuing with no animal data");
        });
        fs::read_to_string(file.path()).expect("read log file")
    }

    #[test]
    fn compact_lines_start_at_the_level() {
        let output = capture(&explicit(LevelFilter::WARN, LogFormat::Compact));
        let lines: Vec<_> = output.lines().collect();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].trim_start().starts_with("WARN"), "{output}");
        assert!(lines[0].contains("continuing with no animal data"));
        assert!(!output.contains("zoo_cli::logging"));
    }

    #[test]
    fn pretty_output_follows_the_level_filter() {
        let output = capture(&explicit(LevelFilter::INFO, LogFormat::Pretty));
        assert!(output.contains("ingest complete"));
        assert!(output.contains("continuing with no animal data"));
        assert!(!output.contains("zoo_cli::logging"));
    }

    #[test]
    fn json_output_is_one_object_per_event() {
        let output = capture(&explicit(LevelFilter::WARN, LogFormat::Json));
        let event: serde_json::Value =
            serde_json::from_str(output.trim()).expect("parse json log line");
        assert_eq!(event["level"], "WARN");
        assert_eq!(event["fields"]["path"], "animals_data.json");
        assert!(event.get("target").is_none());
    }

    #[test]
    fn directives_cover_workspace_crates() {
        let directives = default_directives(LevelFilter::DEBUG);
        assert!(directives.starts_with("debug,"));
        for name in WORKSPACE_CRATES {
            assert!(directives.contains(&format!("{name}=debug")));
        }
    }

    #[test]
    fn explicit_level_ignores_environment() {
        let config = LogConfig {
            level_filter: LevelFilter::DEBUG,
            use_env_filter: false,
            ..LogConfig::default()
        };
        let filter = build_env_filter(&config);
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::DEBUG));
    }
}
