//! Shared types for the trailgraph library.

pub mod error;

pub use error::{GraphError, GraphResult};

/// Line that separates the vertex section from the arc section in TGF output.
pub const TGF_SEPARATOR: &str = "#";

/// Default field delimiter for dataset rows.
pub const DEFAULT_DELIMITER: char = '\t';

/// Default separator between story ids inside the stories field.
pub const DEFAULT_STORY_SEPARATOR: char = ',';
