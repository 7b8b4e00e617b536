//! Data models for the importer.
//!
//! - [`CsvRow`]: A title/body pair read from the input CSV
//! - [`Label`]: The fixed label set (mvp plus seven categories)
//! - [`ClassifiedIssue`]: A row with its category and expanded body
//! - [`ImportResult`]: Per-row outcome written to the import log
//! - [`TrackerIssue`], [`TrackerLabel`]: Tracker search and label listing entries

mod issue;
mod types;

pub use issue::{ClassifiedIssue, CsvRow, ImportResult, TrackerIssue, TrackerLabel};
pub use types::{ImportAction, Label};
