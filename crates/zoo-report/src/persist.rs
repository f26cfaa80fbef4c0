//! Writing rendered output to disk.

use std::path::{Path, PathBuf};

use crate::error::{ReportError, Result};

/// Outcome of [`persist_output`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersistOutcome {
    /// Content was written to `path`.
    Written { path: PathBuf, bytes: usize },
    /// Content was empty; no file was touched.
    Skipped,
}

/// Write `content` to `path`, creating or overwriting it.
///
/// Empty content is not written and yields [`PersistOutcome::Skipped`].
///
/// # Errors
///
/// [`ReportError::Write`] when the file cannot be created or written.
pub fn persist_output(content: &str, path: &Path) -> Result<PersistOutcome> {
    if content.is_empty() {
        tracing::info!(path = %path.display(), "No content to persist, file will not be written");
        return Ok(PersistOutcome::Skipped);
    }
    std::fs::write(path, content).map_err(|source| ReportError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!(path = %path.display(), bytes = content.len(), "Saved output");
    Ok(PersistOutcome::Written {
        path: path.to_path_buf(),
        bytes: content.len(),
    })
}
