//! Reduction of raw animal records to their four display fields.

use serde_json::Value;

use zoo_model::{AnimalRecord, CharacteristicsMode, NormalizationOptions, RawRecord};

use crate::error::{Result, TransformError};
use crate::format::format_value;

/// Normalize one raw record.
///
/// Fields are extracted in order `name`, `location` (first entry of
/// `locations`), `diet`, `type`; each missing one defaults to the sentinel,
/// then every field is formatted with [`format_value`].
///
/// # Errors
///
/// [`TransformError::MissingCharacteristics`] when `characteristics` is
/// absent or not an object and [`CharacteristicsMode::Strict`] is set.
pub fn normalize_record(
    record: &RawRecord,
    options: &NormalizationOptions,
) -> Result<AnimalRecord> {
    let sentinel = options.sentinel.as_str();
    let name = field_or_sentinel(record.name.as_ref(), sentinel);
    let location = field_or_sentinel(record.first_location(), sentinel);

    if !record.has_characteristics() {
        match options.characteristics {
            CharacteristicsMode::Strict => {
                return Err(TransformError::MissingCharacteristics { name });
            }
            CharacteristicsMode::Lenient => {
                tracing::debug!(name = %name, "Record has no characteristics, using sentinel");
            }
        }
    }
    let diet = field_or_sentinel(record.characteristic("diet"), sentinel);
    let kind = field_or_sentinel(record.characteristic("type"), sentinel);

    Ok(AnimalRecord {
        name,
        diet,
        location,
        kind,
    })
}

/// Normalize every record, keeping input order.
///
/// # Errors
///
/// Stops at the first failing record and returns
/// [`TransformError::Record`] with its input index.
pub fn normalize_records(
    records: &[RawRecord],
    options: &NormalizationOptions,
) -> Result<Vec<AnimalRecord>> {
    records
        .iter()
        .enumerate()
        .map(|(index, record)| {
            normalize_record(record, options).map_err(|source| TransformError::Record {
                index,
                source: Box::new(source),
            })
        })
        .collect()
}

fn field_or_sentinel(value: Option<&Value>, sentinel: &str) -> String {
    match value {
        Some(value) => format_value(value, sentinel),
        None => sentinel.to_string(),
    }
}
