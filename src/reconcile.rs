//! Create-or-comment decision for each imported row.

use chrono::NaiveDate;

use crate::classify::classify;
use crate::error::{ImportError, Result};
use crate::expand::expand;
use crate::model::{ClassifiedIssue, CsvRow, ImportResult, TrackerIssue};
use crate::tracker::Tracker;

/// Name of the source file quoted in re-import comments.
pub const SOURCE_NAME: &str = "issues.csv";

/// Classify a row and render its issue body.
pub fn prepare(row: &CsvRow) -> ClassifiedIssue {
    let category = classify(&row.title, &row.body);
    ClassifiedIssue {
        title: row.title.clone(),
        body: expand(&row.body, &row.title, category),
        category,
    }
}

/// Pick the candidate whose title is exactly `title`.
///
/// Tracker search is fuzzy, so substring or case-only matches are rejected.
pub fn exact_match<'a>(title: &str, candidates: &'a [TrackerIssue]) -> Option<&'a TrackerIssue> {
    candidates.iter().find(|issue| issue.title == title)
}

/// Comment posted on an issue that already exists.
pub fn reimport_comment(today: NaiveDate, body: &str) -> String {
    format!(
        "Re-imported from {} on {}\n\n{}",
        SOURCE_NAME,
        today.format("%Y-%m-%d"),
        body
    )
}

fn failed(row: &CsvRow, err: ImportError, existing: Option<&TrackerIssue>) -> ImportResult {
    tracing::warn!(title = %row.title, error = %err, "Import failed");
    let result = ImportResult::failed(&row.title, err.to_string());
    match existing {
        Some(existing) => result.with_issue(existing),
        None => result,
    }
}

/// Imports rows one at a time against a tracker.
pub struct Reconciler<'a> {
    tracker: &'a dyn Tracker,
    today: NaiveDate,
}

impl<'a> Reconciler<'a> {
    pub fn new(tracker: &'a dyn Tracker, today: NaiveDate) -> Self {
        Self { tracker, today }
    }

    /// Import one row. Tracker failures end up in the returned result.
    pub fn reconcile(&self, row: &CsvRow) -> ImportResult {
        let issue = prepare(row);

        let existing = match self.tracker.search_issues(&issue.title) {
            Ok(candidates) => exact_match(&issue.title, &candidates).cloned(),
            Err(e) => return failed(row, e, None),
        };

        let outcome = match existing {
            Some(ref existing) => self.update(&issue, existing),
            None => self.create(&issue),
        };
        outcome.unwrap_or_else(|e| failed(row, e, existing.as_ref()))
    }

    fn update(&self, issue: &ClassifiedIssue, existing: &TrackerIssue) -> Result<ImportResult> {
        tracing::info!(title = %issue.title, number = existing.number, "Updating existing issue");
        let comment = reimport_comment(self.today, &issue.body);
        self.tracker.comment_issue(existing.number, &comment)?;
        Ok(ImportResult::updated(&issue.title, existing))
    }

    fn create(&self, issue: &ClassifiedIssue) -> Result<ImportResult> {
        let url = self.tracker.create_issue(issue)?;
        Ok(ImportResult::created(&issue.title, url))
    }

    /// Import every row in order.
    pub fn reconcile_all(&self, rows: &[CsvRow]) -> Vec<ImportResult> {
        rows.iter().map(|row| self.reconcile(row)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fakes::MemoryTracker;
    use crate::model::{ImportAction, Label};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 14).unwrap()
    }

    #[test]
    fn test_prepare_runtime_row() {
        let issue = prepare(&CsvRow::new("Add GC pause metrics", "Improve runtime GC latency"));
        assert_eq!(issue.category, Label::Runtime);
        assert_eq!(issue.labels_arg(), "mvp,runtime");
        assert!(issue.body.contains("Add targeted benchmarks or perf checks for hot paths"));
        assert!(issue.body.contains("Track performance impact before and after"));
    }

    #[test]
    fn test_creates_when_no_match() {
        let tracker = MemoryTracker::new();
        let reconciler = Reconciler::new(&tracker, today());

        let result = reconciler.reconcile(&CsvRow::new("Write the tutorial", ""));
        assert_eq!(result.action, ImportAction::Created);
        assert_eq!(result.url.as_deref(), Some("https://tracker.test/issues/1"));
        assert_eq!(result.issue_number, None);

        let created = tracker.created();
        assert_eq!(created.len(), 1);
        assert_eq!(created[0].category, Label::Docs);
        assert!(tracker.comments().is_empty());
    }

    #[test]
    fn test_comments_on_exact_match() {
        let tracker = MemoryTracker::new().with_issue("Add GC pause metrics");
        let reconciler = Reconciler::new(&tracker, today());

        let result = reconciler.reconcile(&CsvRow::new("Add GC pause metrics", "Improve runtime GC latency"));
        assert_eq!(result.action, ImportAction::Updated);
        assert_eq!(result.issue_number, Some(1));
        assert!(tracker.created().is_empty());

        let comments = tracker.comments();
        assert_eq!(comments.len(), 1);
        assert_eq!(comments[0].0, 1);
        assert!(
            comments[0]
                .1
                .starts_with("Re-imported from issues.csv on 2026-03-14\n\nImprove runtime GC latency\n\n**Goal**")
        );
    }

    #[test]
    fn test_substring_match_is_not_a_match() {
        let tracker = MemoryTracker::new().with_issue("Add GC pause metrics dashboard");
        let reconciler = Reconciler::new(&tracker, today());

        let result = reconciler.reconcile(&CsvRow::new("Add GC pause metrics", ""));
        assert_eq!(result.action, ImportAction::Created);
        assert_eq!(tracker.created().len(), 1);
        assert!(tracker.comments().is_empty());
    }

    #[test]
    fn test_case_only_match_is_not_a_match() {
        let candidates = vec![TrackerIssue {
            number: 5,
            title: "add gc pause metrics".to_string(),
            url: String::new(),
        }];
        assert!(exact_match("Add GC pause metrics", &candidates).is_none());
    }

    #[test]
    fn test_failure_is_recorded_and_batch_continues() {
        let tracker = MemoryTracker::new().fail_on("Flaky row", "rate limited");
        let reconciler = Reconciler::new(&tracker, today());

        let results = reconciler.reconcile_all(&[
            CsvRow::new("First row", ""),
            CsvRow::new("Flaky row", ""),
            CsvRow::new("Last row", ""),
        ]);

        assert_eq!(results.len(), 3);
        assert_eq!(results[0].action, ImportAction::Created);
        assert_eq!(results[1].action, ImportAction::Failed);
        assert_eq!(results[1].error.as_deref(), Some("rate limited"));
        assert_eq!(results[2].action, ImportAction::Created);
    }

    #[test]
    fn test_comment_failure_keeps_matched_issue() {
        let tracker = MemoryTracker::new()
            .with_issue("Existing")
            .fail_comments("HTTP 502");
        let reconciler = Reconciler::new(&tracker, today());

        let result = reconciler.reconcile(&CsvRow::new("Existing", ""));
        assert_eq!(result.action, ImportAction::Failed);
        assert_eq!(result.error.as_deref(), Some("HTTP 502"));
        assert_eq!(result.issue_number, Some(1));
        assert!(tracker.created().is_empty());
    }

    #[test]
    fn test_duplicate_rows_in_one_run() {
        let tracker = MemoryTracker::new();
        let reconciler = Reconciler::new(&tracker, today());

        let results = reconciler.reconcile_all(&[
            CsvRow::new("Same title", "a"),
            CsvRow::new("Same title", "b"),
        ]);
        assert_eq!(results[0].action, ImportAction::Created);
        assert_eq!(results[1].action, ImportAction::Updated);
    }

    #[test]
    fn test_reimport_comment_format() {
        assert_eq!(
            reimport_comment(today(), "body\n"),
            "Re-imported from issues.csv on 2026-03-14\n\nbody\n"
        );
    }
}
