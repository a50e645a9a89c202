//! Command-line surface: command implementations and the report they print.

pub mod commands;
pub mod report;

pub use report::{InvestigationReport, StoryEntry};
