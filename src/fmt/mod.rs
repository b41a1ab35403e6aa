//! Sinks pick their own line layout, so record rendering goes through a pre-parsed template.

mod format;

pub use format::{DEFAULT_FORMAT, FormatSegment, FormatTemplate, FormatValues, Placeholder};
