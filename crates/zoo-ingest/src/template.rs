//! HTML template loading.

use std::path::Path;

use crate::error::{IngestError, Result};

/// Read the template at `path` as raw text.
///
/// # Errors
///
/// [`IngestError::FileNotFound`] or [`IngestError::FileRead`] when the file
/// cannot be read.
pub fn load_template(path: &Path) -> Result<String> {
    let template = std::fs::read_to_string(path).map_err(|e| IngestError::from_io(path, e))?;
    tracing::debug!(path = %path.display(), bytes = template.len(), "Loaded template");
    Ok(template)
}
