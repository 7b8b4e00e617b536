use super::types::{ImportAction, Label};
use serde::{Deserialize, Serialize};

/// One accepted CSV record. Both fields are trimmed and the title is never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvRow {
    pub title: String,
    pub body: String,
}

impl CsvRow {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
        }
    }
}

/// A row after classification and body expansion, ready to send to the tracker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedIssue {
    pub title: String,
    pub body: String,
    pub category: Label,
}

impl ClassifiedIssue {
    pub fn labels(&self) -> [Label; 2] {
        [Label::Mvp, self.category]
    }

    /// Comma-joined label list as the tracker client expects it.
    pub fn labels_arg(&self) -> String {
        self.labels()
            .iter()
            .map(Label::as_str)
            .collect::<Vec<_>>()
            .join(",")
    }
}

/// An issue as returned by the tracker's search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackerIssue {
    pub number: u64,
    pub title: String,
    #[serde(default)]
    pub url: String,
}

/// A label as returned by the tracker's label listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackerLabel {
    pub name: String,
}

/// Outcome of importing a single row, as recorded in the import log.
///
/// `error` is present exactly when `action` is [`ImportAction::Failed`]; the
/// constructors are the only way to build one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportResult {
    pub title: String,
    pub action: ImportAction,
    pub issue_number: Option<u64>,
    pub url: Option<String>,
    pub error: Option<String>,
}

impl ImportResult {
    pub fn created(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            action: ImportAction::Created,
            issue_number: None,
            url: Some(url.into()),
            error: None,
        }
    }

    pub fn updated(title: impl Into<String>, existing: &TrackerIssue) -> Self {
        Self {
            title: title.into(),
            action: ImportAction::Updated,
            issue_number: Some(existing.number),
            url: Some(existing.url.clone()),
            error: None,
        }
    }

    pub fn failed(title: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            action: ImportAction::Failed,
            issue_number: None,
            url: None,
            error: Some(error.into()),
        }
    }

    /// Keep the reference of an issue that was found before the failure.
    pub fn with_issue(mut self, existing: &TrackerIssue) -> Self {
        self.issue_number = Some(existing.number);
        self.url = Some(existing.url.clone());
        self
    }

    pub fn is_failed(&self) -> bool {
        self.action == ImportAction::Failed
    }
}
