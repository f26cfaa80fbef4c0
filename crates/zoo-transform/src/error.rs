use thiserror::Error;

#[derive(Debug, Error)]
pub enum TransformError {
    /// A record has no `characteristics` mapping and strict mode is enabled.
    #[error("animal '{name}' has no characteristics")]
    MissingCharacteristics { name: String },

    /// Normalization failed for the record at `index` (0-based input position).
    #[error("record {index}: {source}")]
    Record {
        index: usize,
        #[source]
        source: Box<TransformError>,
    },
}

pub type Result<T> = std::result::Result<T, TransformError>;
