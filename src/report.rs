//! Import log artifact and console summary.

use std::fmt::Write as _;
use std::path::Path;

use crate::error::Result;
use crate::model::{ImportAction, ImportResult};

/// Default location of the import log, relative to the working directory.
pub const DEFAULT_LOG_PATH: &str = "artifacts/issues_import_log.json";

/// Per-action counts for a finished run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub created: usize,
    pub updated: usize,
    pub failed: usize,
}

impl Summary {
    pub fn from_results(results: &[ImportResult]) -> Self {
        results
            .iter()
            .fold(Self::default(), |mut summary, result| {
                match result.action {
                    ImportAction::Created => summary.created += 1,
                    ImportAction::Updated => summary.updated += 1,
                    ImportAction::Failed => summary.failed += 1,
                }
                summary
            })
    }

    pub fn has_failures(&self) -> bool {
        self.failed > 0
    }

    /// Process exit status for the run: 0 when every row succeeded, 1 otherwise.
    pub fn exit_code(&self) -> u8 {
        if self.has_failures() { 1 } else { 0 }
    }
}

/// Write the import log as a pretty-printed JSON array.
pub fn write_log(path: &Path, results: &[ImportResult]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(results)?;
    std::fs::write(path, json)?;
    tracing::info!(path = %path.display(), entries = results.len(), "Wrote import log");
    Ok(())
}

/// Console summary: counts, then one line per failed row.
pub fn render_summary(results: &[ImportResult]) -> String {
    let summary = Summary::from_results(results);
    let mut out = String::new();
    let _ = writeln!(out, "Created: {}", summary.created);
    let _ = writeln!(out, "Updated: {}", summary.updated);
    let _ = writeln!(out, "Failed: {}", summary.failed);
    for result in results.iter().filter(|r| r.is_failed()) {
        let _ = writeln!(
            out,
            "- {}: {}",
            result.title,
            result.error.as_deref().unwrap_or_default()
        );
    }
    out
}
