use anyhow::{Context, Result};

use crate::labels::ensure_labels;
use crate::model::{CsvRow, Label};
use crate::reconcile::Reconciler;
use crate::report::{Summary, render_summary, write_log};
use crate::tracker::{GhTracker, Tracker};

use super::CommandContext;

/// Import rows into the configured tracker. Returns the process exit status.
pub fn handle_import(ctx: &CommandContext, rows: &[CsvRow]) -> Result<u8> {
    let tracker = GhTracker::new(
        ctx.config.tracker.bin.clone(),
        ctx.config.tracker.repo.clone(),
    );
    run_import(ctx, &tracker, rows)
}

pub(crate) fn run_import(ctx: &CommandContext, tracker: &dyn Tracker, rows: &[CsvRow]) -> Result<u8> {
    let known = ensure_labels(tracker, &Label::ALL).context("Failed to load/create labels")?;
    tracing::debug!(labels = known.len(), "Labels ready");

    let reconciler = Reconciler::new(tracker, ctx.today);
    let results = reconciler.reconcile_all(rows);

    let log_path = &ctx.config.output.log_path;
    write_log(log_path, &results)
        .with_context(|| format!("Failed to write import log to {}", log_path.display()))?;

    print!("{}", render_summary(&results));
    Ok(Summary::from_results(&results).exit_code())
}
