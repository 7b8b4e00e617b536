//! Access to the external issue tracker.
//!
//! The importer talks to the tracker only through the [`Tracker`] trait.
//! [`GhTracker`] implements it on top of the `gh` command-line client, which
//! it drives through a [`CommandRunner`] so the process boundary can be
//! swapped out in tests.
//!
//! ## Components
//!
//! - [`CommandRunner`]: Run an external program and capture its stdout
//! - [`ProcessRunner`]: `std::process` implementation of `CommandRunner`
//! - [`GhTracker`]: `Tracker` backed by the `gh` CLI

mod gh;
mod runner;

pub use gh::{DEFAULT_GH_BIN, GhTracker};
pub use runner::{CommandRunner, ProcessRunner};

use crate::error::Result;
use crate::model::{ClassifiedIssue, TrackerIssue, TrackerLabel};

/// Operations the importer needs from an issue tracker.
pub trait Tracker {
    /// List every label defined in the repository.
    fn list_labels(&self) -> Result<Vec<TrackerLabel>>;

    /// Create a label with a description.
    fn create_label(&self, name: &str, description: &str) -> Result<()>;

    /// Search issues in any state whose title contains `title`.
    ///
    /// Candidates may match only loosely; callers filter for exact titles.
    fn search_issues(&self, title: &str) -> Result<Vec<TrackerIssue>>;

    /// Create an issue and return its URL.
    fn create_issue(&self, issue: &ClassifiedIssue) -> Result<String>;

    /// Append a comment to an existing issue.
    fn comment_issue(&self, number: u64, body: &str) -> Result<()>;
}
