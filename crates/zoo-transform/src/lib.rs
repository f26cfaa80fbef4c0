//! Animal record normalization.
//!
//! Reduces raw JSON records to the four display fields (`name`, `diet`,
//! `location`, `type`) and formats them for display.
//!
//! # Example
//!
//! ```ignore
//! use zoo_model::NormalizationOptions;
//! use zoo_transform::normalize_records;
//!
//! let animals = normalize_records(&raw_records, &NormalizationOptions::default())?;
//! ```

mod error;
mod format;
mod normalize;

pub use error::{Result, TransformError};
pub use format::{format_text, format_value, is_sentinel, title_case};
pub use normalize::{normalize_record, normalize_records};
