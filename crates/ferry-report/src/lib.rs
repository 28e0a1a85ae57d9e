//! Reporting surface for destination effects: tallies, text and JSON
//! rendering, and the outcome of a run.

pub mod config;
pub mod outcome;
pub mod render;
pub mod tally;

pub use config::{OutputFormat, ReportConfig};
pub use outcome::Outcome;
pub use render::{render_effect_line, render_json, render_report};
pub use tally::Tally;
