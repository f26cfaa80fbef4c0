//! Pipeline configuration passed to every stage.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::options::{NormalizationOptions, RenderOptions};

/// Default input file with the animal records.
pub const DEFAULT_DATA_FILE: &str = "animals_data.json";

/// Default HTML template file.
pub const DEFAULT_TEMPLATE_FILE: &str = "animals_template.html";

/// Default HTML output file.
pub const DEFAULT_OUTPUT_FILE: &str = "animals.html";

/// Paths and options for one pipeline run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineConfig {
    pub data_path: PathBuf,
    pub template_path: PathBuf,
    pub output_path: PathBuf,
    pub normalization: NormalizationOptions,
    pub render: RenderOptions,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_FILE),
            template_path: PathBuf::from(DEFAULT_TEMPLATE_FILE),
            output_path: PathBuf::from(DEFAULT_OUTPUT_FILE),
            normalization: NormalizationOptions::default(),
            render: RenderOptions::default(),
        }
    }
}

impl PipelineConfig {
    #[must_use]
    pub fn with_data_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.data_path = path.into();
        self
    }

    #[must_use]
    pub fn with_template_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.template_path = path.into();
        self
    }

    #[must_use]
    pub fn with_output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = path.into();
        self
    }

    #[must_use]
    pub fn with_normalization(mut self, options: NormalizationOptions) -> Self {
        self.normalization = options;
        self
    }

    #[must_use]
    pub fn with_render(mut self, options: RenderOptions) -> Self {
        self.render = options;
        self
    }
}
