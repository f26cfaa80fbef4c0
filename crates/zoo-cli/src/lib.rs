//! CLI library components for the animal catalog generator.

pub mod logging;
pub mod pipeline;
pub mod types;
