//! Animal catalog generator CLI.

use clap::{ColorChoice, Parser};
use std::io::{self, IsTerminal};
use tracing::level_filters::LevelFilter;
use zoo_cli::logging::{LogConfig, LogFormat, init_logging};
use zoo_cli::pipeline::{run_html, run_text};
use zoo_model::{NormalizationOptions, PipelineConfig, PlaceholderMode, RenderOptions};

mod cli;
mod summary;

use crate::cli::{Cli, Command, HtmlArgs, LogFormatArg, LogLevelArg};
use crate::summary::{print_issues, print_summary};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let strict = cli.strict;
    let exit_code = match &cli.command {
        Some(Command::Text) => {
            let config = pipeline_config(&cli, &HtmlArgs::default());
            match run_text(&config) {
                Ok(run) => {
                    print!("{}", run.text);
                    print_issues(&run.issues);
                    if strict && run.has_issues() { 1 } else { 0 }
                }
                Err(error) => {
                    eprintln!("error: {error:#}");
                    1
                }
            }
        }
        Some(Command::Html(args)) => html(&pipeline_config(&cli, args), strict),
        None => html(&pipeline_config(&cli, &HtmlArgs::default()), strict),
    };
    std::process::exit(exit_code);
}

fn html(config: &PipelineConfig, strict: bool) -> i32 {
    match run_html(config) {
        Ok(run) => {
            print_summary(&run);
            if strict && run.has_issues() { 1 } else { 0 }
        }
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
    }
}

/// Build the pipeline configuration from CLI flags.
fn pipeline_config(cli: &Cli, html: &HtmlArgs) -> PipelineConfig {
    let normalization = if cli.strict {
        NormalizationOptions::strict()
    } else {
        NormalizationOptions::default()
    };
    let render = RenderOptions::default().with_placeholder_mode(if html.replace_all {
        PlaceholderMode::All
    } else {
        PlaceholderMode::First
    });
    PipelineConfig::default()
        .with_data_path(cli.data.clone())
        .with_template_path(html.template.clone())
        .with_output_path(html.output.clone())
        .with_normalization(normalization)
        .with_render(render)
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    if let Some(level) = cli.log_level {
        config.level_filter = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.log_file = cli.log_file.clone();
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
