//! # issue-import - Bulk-import issues from CSV into GitHub
//!
//! Reads `Title`/`Body` rows from a CSV file, labels each row by keyword
//! classification, expands its body into a goal/subtasks/acceptance template,
//! and creates the issue through the `gh` CLI. Rows whose title already
//! exists as an issue get a re-import comment instead of a duplicate.
//!
//! ## Quick Start
//!
//! ```bash
//! # Preview labels and bodies without touching GitHub
//! issue-import issues.csv --dry-run --verbose
//!
//! # Import into the current repository
//! issue-import issues.csv
//!
//! # Import into another repository
//! issue-import issues.csv --repo acme/lang
//! ```
//!
//! Every run that gets past label setup writes
//! `artifacts/issues_import_log.json` and prints a summary. The exit status
//! is 0 when every row succeeded, 1 when any row failed or labels could not
//! be set up, and 2 for usage errors.
//!
//! ## Modules
//!
//! - [`cli`]: Command-line interface definitions and handlers
//! - [`config`]: Configuration loading and management
//! - [`error`]: Error types and result aliases
//! - [`model`]: Data models (CsvRow, Label, ImportResult, etc.)
//! - [`csv_source`]: CSV reading
//! - [`classify`]: Keyword classification
//! - [`expand`]: Issue body templating
//! - [`labels`]: Label provisioning
//! - [`reconcile`]: Create-or-comment logic per row
//! - [`report`]: Import log and console summary
//! - [`tracker`]: Tracker access through the gh CLI

/// Command-line interface definitions using clap.
pub mod cli;

/// Configuration loading and management.
///
/// Handles `.issue-import.yml` configuration files and command-line overrides.
pub mod config;

/// Error types and result aliases.
///
/// Defines `ImportError`, `ExternalToolError` and the `Result<T>` type alias.
pub mod error;

/// Data models for the importer.
pub mod model;

pub mod classify;
pub mod csv_source;
pub mod expand;
pub mod labels;
pub mod logging;
pub mod reconcile;
pub mod report;

/// Access to the issue tracker.
///
/// The `Tracker` trait plus its `gh` CLI implementation.
pub mod tracker;

/// In-memory fakes for the tracker seams.
pub mod fakes;
