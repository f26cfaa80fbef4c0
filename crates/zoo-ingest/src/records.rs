//! Animal record loading.

use std::path::Path;

use zoo_model::RawRecord;

use crate::error::{IngestError, Result};

/// Read `path` as a JSON array of animal records.
///
/// # Errors
///
/// - [`IngestError::FileNotFound`] when the file does not exist.
/// - [`IngestError::FileRead`] for any other read fault.
/// - [`IngestError::JsonParse`] when the content is not a JSON array of objects.
pub fn load_records(path: &Path) -> Result<Vec<RawRecord>> {
    let content = std::fs::read_to_string(path).map_err(|e| IngestError::from_io(path, e))?;
    let records: Vec<RawRecord> =
        serde_json::from_str(&content).map_err(|source| IngestError::JsonParse {
            path: path.to_path_buf(),
            source,
        })?;
    tracing::info!(path = %path.display(), count = records.len(), "Loaded animal records");
    Ok(records)
}

/// Like [`load_records`], but a missing or malformed file yields no records.
///
/// The failure is logged at `warn` level and handed to `on_error`, so callers
/// can record why the data set came back empty.
pub fn load_records_or_empty(path: &Path, on_error: impl FnOnce(&IngestError)) -> Vec<RawRecord> {
    match load_records(path) {
        Ok(records) => records,
        Err(error) => {
            tracing::warn!(path = %path.display(), %error, "continuing with no animal data");
            on_error(&error);
            Vec::new()
        }
    }
}
