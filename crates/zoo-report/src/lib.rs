//! Animal report generation library.
//!
//! This crate renders normalized animal records in two forms:
//!
//! - **Text**: `Name:`/`Diet:`/`Location:`/`Type:` lines for the terminal
//! - **HTML**: list-item cards substituted into a template placeholder
//!
//! and persists rendered output to disk.

mod error;
mod html;
mod persist;
mod text;

// Re-export public types and functions
pub use error::{ReportError, Result};
pub use html::{
    CARD_SEPARATOR, count_occurrences, render_card, render_cards, render_html,
    substitute_placeholder,
};
pub use persist::{PersistOutcome, persist_output};
pub use text::render_text;
