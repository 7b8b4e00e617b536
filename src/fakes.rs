//! In-memory fakes for the tracker seams (testing only).
//!
//! - [`ScriptedRunner`]: a `CommandRunner` that replays queued outputs and
//!   records every invocation
//! - [`MemoryTracker`]: a `Tracker` holding labels and issues in memory, with
//!   per-title failure injection

use std::cell::{Cell, RefCell};
use std::collections::{HashMap, VecDeque};

use crate::error::{ExternalToolError, ImportError, Result};
use crate::model::{ClassifiedIssue, TrackerIssue, TrackerLabel};
use crate::tracker::{CommandRunner, Tracker};

// ---------------------------------------------------------------------------
// ScriptedRunner
// ---------------------------------------------------------------------------

/// Replays queued responses in order. Running out of responses is an error.
#[derive(Debug, Default)]
pub struct ScriptedRunner {
    responses: RefCell<VecDeque<std::result::Result<String, ExternalToolError>>>,
    calls: RefCell<Vec<Vec<String>>>,
}

impl ScriptedRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_ok(&self, stdout: &str) {
        self.responses.borrow_mut().push_back(Ok(stdout.to_string()));
    }

    pub fn push_err(&self, err: ExternalToolError) {
        self.responses.borrow_mut().push_back(Err(err));
    }

    /// Arguments of every call so far, without the program name.
    pub fn calls(&self) -> Vec<Vec<String>> {
        self.calls.borrow().clone()
    }
}

impl CommandRunner for ScriptedRunner {
    fn run(
        &self,
        program: &str,
        args: &[String],
        _input: Option<&str>,
    ) -> std::result::Result<String, ExternalToolError> {
        self.calls.borrow_mut().push(args.to_vec());
        self.responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(ExternalToolError::new(program, "no scripted response")))
    }
}

// ---------------------------------------------------------------------------
// MemoryTracker
// ---------------------------------------------------------------------------

/// Tracker state kept in memory.
///
/// Search mimics a full-text search: any issue whose title contains the
/// query (case-insensitively) is a candidate.
#[derive(Debug, Default)]
pub struct MemoryTracker {
    labels: RefCell<Vec<TrackerLabel>>,
    issues: RefCell<Vec<TrackerIssue>>,
    comments: RefCell<Vec<(u64, String)>>,
    created: RefCell<Vec<ClassifiedIssue>>,
    failures: RefCell<HashMap<String, String>>,
    label_failure: RefCell<Option<String>>,
    comment_failure: RefCell<Option<String>>,
    next_number: Cell<u64>,
}

impl MemoryTracker {
    pub fn new() -> Self {
        Self {
            next_number: Cell::new(1),
            ..Self::default()
        }
    }

    pub fn with_labels(self, names: &[&str]) -> Self {
        self.labels.borrow_mut().extend(names.iter().map(|n| TrackerLabel {
            name: n.to_string(),
        }));
        self
    }

    pub fn with_issue(self, title: &str) -> Self {
        let number = self.bump();
        self.issues.borrow_mut().push(TrackerIssue {
            number,
            title: title.to_string(),
            url: format!("https://tracker.test/issues/{}", number),
        });
        self
    }

    /// Make every tracker call for `title` fail with `message`.
    pub fn fail_on(self, title: &str, message: &str) -> Self {
        self.failures
            .borrow_mut()
            .insert(title.to_string(), message.to_string());
        self
    }

    /// Make label listing and creation fail with `message`.
    pub fn fail_labels(self, message: &str) -> Self {
        *self.label_failure.borrow_mut() = Some(message.to_string());
        self
    }

    /// Make commenting fail with `message`.
    pub fn fail_comments(self, message: &str) -> Self {
        *self.comment_failure.borrow_mut() = Some(message.to_string());
        self
    }

    pub fn label_names(&self) -> Vec<String> {
        self.labels.borrow().iter().map(|l| l.name.clone()).collect()
    }

    pub fn created(&self) -> Vec<ClassifiedIssue> {
        self.created.borrow().clone()
    }

    pub fn comments(&self) -> Vec<(u64, String)> {
        self.comments.borrow().clone()
    }

    fn bump(&self) -> u64 {
        let number = self.next_number.get().max(1);
        self.next_number.set(number + 1);
        number
    }

    fn check_title(&self, title: &str) -> Result<()> {
        match self.failures.borrow().get(title) {
            Some(message) => Err(ExternalToolError::new("memory", message.clone()).into()),
            None => Ok(()),
        }
    }

    fn check_labels(&self) -> Result<()> {
        match self.label_failure.borrow().as_ref() {
            Some(message) => Err(ExternalToolError::new("memory", message.clone()).into()),
            None => Ok(()),
        }
    }
}

impl Tracker for MemoryTracker {
    fn list_labels(&self) -> Result<Vec<TrackerLabel>> {
        self.check_labels()?;
        Ok(self.labels.borrow().clone())
    }

    fn create_label(&self, name: &str, _description: &str) -> Result<()> {
        self.check_labels()?;
        let mut labels = self.labels.borrow_mut();
        if labels.iter().any(|l| l.name == name) {
            return Err(ImportError::Tracker(format!("label {} already exists", name)));
        }
        labels.push(TrackerLabel {
            name: name.to_string(),
        });
        Ok(())
    }

    fn search_issues(&self, title: &str) -> Result<Vec<TrackerIssue>> {
        self.check_title(title)?;
        let needle = title.to_lowercase();
        Ok(self
            .issues
            .borrow()
            .iter()
            .filter(|i| i.title.to_lowercase().contains(&needle))
            .cloned()
            .collect())
    }

    fn create_issue(&self, issue: &ClassifiedIssue) -> Result<String> {
        self.check_title(&issue.title)?;
        let number = self.bump();
        let url = format!("https://tracker.test/issues/{}", number);
        self.issues.borrow_mut().push(TrackerIssue {
            number,
            title: issue.title.clone(),
            url: url.clone(),
        });
        self.created.borrow_mut().push(issue.clone());
        Ok(url)
    }

    fn comment_issue(&self, number: u64, body: &str) -> Result<()> {
        if let Some(message) = self.comment_failure.borrow().as_ref() {
            return Err(ExternalToolError::new("memory", message.clone()).into());
        }
        if !self.issues.borrow().iter().any(|i| i.number == number) {
            return Err(ImportError::Tracker(format!("issue {} not found", number)));
        }
        self.comments.borrow_mut().push((number, body.to_string()));
        Ok(())
    }
}
