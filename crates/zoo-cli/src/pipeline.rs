//! Load → normalize → render → persist orchestration.
//!
//! Every recoverable condition is logged and recorded as a [`RunIssue`];
//! only strict-mode normalization faults are returned as errors.

use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{debug, info, info_span, warn};

use zoo_ingest::{IngestError, load_records_or_empty, load_template};
use zoo_model::{AnimalRecord, NormalizationOptions, PipelineConfig, RawRecord};
use zoo_report::{PersistOutcome, count_occurrences, persist_output, render_html, render_text};
use zoo_transform::normalize_records;

use crate::types::{HtmlRun, IssueKind, PersistStatus, RunIssue, TextRun};

/// Load the data file, degrading to an empty record set on failure.
pub fn ingest(data_path: &Path, issues: &mut Vec<RunIssue>) -> Vec<RawRecord> {
    load_records_or_empty(data_path, |error| {
        issues.push(RunIssue::new(source_issue_kind(error), error.to_string()));
    })
}

fn source_issue_kind(error: &IngestError) -> IssueKind {
    match error {
        IngestError::JsonParse { .. } => IssueKind::MalformedSource,
        IngestError::FileNotFound { .. } | IngestError::FileRead { .. } => IssueKind::MissingSource,
    }
}

/// Load and normalize all records.
///
/// # Errors
///
/// Fails only when a record is rejected by strict normalization.
pub fn load_animals(
    data_path: &Path,
    options: &NormalizationOptions,
    issues: &mut Vec<RunIssue>,
) -> Result<Vec<AnimalRecord>> {
    let ingest_start = Instant::now();
    let records = info_span!("ingest", path = %data_path.display())
        .in_scope(|| ingest(data_path, issues));
    info!(
        record_count = records.len(),
        duration_ms = ingest_start.elapsed().as_millis(),
        "ingest complete"
    );

    let animals = info_span!("normalize")
        .in_scope(|| normalize_records(&records, options))
        .context("normalize animal records")?;
    debug!(record_count = animals.len(), "normalize complete");
    Ok(animals)
}

/// Render all records as text lines.
///
/// # Errors
///
/// See [`load_animals`].
pub fn run_text(config: &PipelineConfig) -> Result<TextRun> {
    let span = info_span!("text");
    let _guard = span.enter();
    log_config(config);

    let mut issues = Vec::new();
    let animals = load_animals(&config.data_path, &config.normalization, &mut issues)?;
    let text = render_text(&animals);
    Ok(TextRun {
        record_count: animals.len(),
        text,
        issues,
    })
}

/// Render all records into the HTML template and write the output file.
///
/// # Errors
///
/// See [`load_animals`].
pub fn run_html(config: &PipelineConfig) -> Result<HtmlRun> {
    let span = info_span!("html");
    let _guard = span.enter();
    log_config(config);

    let mut run = HtmlRun {
        record_count: 0,
        template_path: config.template_path.clone(),
        output_path: config.output_path.clone(),
        persist: PersistStatus::Skipped,
        issues: Vec::new(),
    };

    // =========================================================================
    // Stage 1: Template
    // =========================================================================
    let template = match load_template(&config.template_path) {
        Ok(template) => template,
        Err(error) => {
            warn!(
                path = %config.template_path.display(),
                %error,
                "HTML template could not be loaded, skipping output"
            );
            run.issues
                .push(RunIssue::new(IssueKind::MissingTemplate, error.to_string()));
            return Ok(run);
        }
    };

    // =========================================================================
    // Stage 2: Ingest and normalize
    // =========================================================================
    let animals = load_animals(&config.data_path, &config.normalization, &mut run.issues)?;
    run.record_count = animals.len();

    // =========================================================================
    // Stage 3: Render
    // =========================================================================
    if count_occurrences(&template, &config.render.placeholder) == 0 {
        run.issues.push(RunIssue::new(
            IssueKind::MissingPlaceholder,
            format!(
                "placeholder {} not found in {}",
                config.render.placeholder,
                config.template_path.display()
            ),
        ));
    }
    let html = info_span!("render").in_scope(|| render_html(&template, &animals, &config.render));

    // =========================================================================
    // Stage 4: Persist
    // =========================================================================
    if html.is_empty() {
        info!(
            path = %config.output_path.display(),
            "HTML content is empty, skipping persistence"
        );
        return Ok(run);
    }
    run.persist = match persist_output(&html, &config.output_path) {
        Ok(PersistOutcome::Written { bytes, .. }) => PersistStatus::Written { bytes },
        Ok(PersistOutcome::Skipped) => PersistStatus::Skipped,
        Err(error) => {
            warn!(%error, "output could not be written");
            run.issues
                .push(RunIssue::new(IssueKind::WriteFailure, error.to_string()));
            PersistStatus::Failed
        }
    };
    Ok(run)
}

fn log_config(config: &PipelineConfig) {
    match serde_json::to_string(config) {
        Ok(json) => debug!(config = %json, "pipeline configuration"),
        Err(error) => debug!(%error, "pipeline configuration is not serializable"),
    }
}
