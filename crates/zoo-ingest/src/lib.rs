//! Animal data ingestion.
//!
//! Loads the JSON array of animal records and the HTML template used for
//! rendering.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use zoo_ingest::{load_records_or_empty, load_template};
//!
//! let records = load_records_or_empty(Path::new("animals_data.json"), |error| {
//!     eprintln!("no animal data: {error}");
//! });
//! let template = load_template(Path::new("animals_template.html"))?;
//! ```

mod error;
mod records;
mod template;

// === Error Types ===
pub use error::{IngestError, Result};

// === Loaders ===
pub use records::{load_records, load_records_or_empty};
pub use template::load_template;
