pub mod config;
pub mod options;
pub mod record;

pub use config::{DEFAULT_DATA_FILE, DEFAULT_OUTPUT_FILE, DEFAULT_TEMPLATE_FILE, PipelineConfig};
pub use options::{
    CharacteristicsMode, DEFAULT_PLACEHOLDER, DEFAULT_SENTINEL, NormalizationOptions,
    PlaceholderMode, RenderOptions,
};
pub use record::{AnimalRecord, RawRecord};
