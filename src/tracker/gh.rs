use super::{CommandRunner, ProcessRunner, Tracker};
use crate::error::{ImportError, Result};
use crate::model::{ClassifiedIssue, TrackerIssue, TrackerLabel};

/// Binary used when no override is configured.
pub const DEFAULT_GH_BIN: &str = "gh";

/// [`Tracker`] backed by the GitHub CLI.
///
/// gh has no library interface we can link against, so every operation is a
/// subprocess whose JSON or plain-text output is parsed here.
pub struct GhTracker<R: CommandRunner = ProcessRunner> {
    runner: R,
    bin: String,
    repo: Option<String>,
}

impl GhTracker<ProcessRunner> {
    pub fn new(bin: impl Into<String>, repo: Option<String>) -> Self {
        Self::with_runner(ProcessRunner, bin, repo)
    }
}

impl<R: CommandRunner> GhTracker<R> {
    pub fn with_runner(runner: R, bin: impl Into<String>, repo: Option<String>) -> Self {
        Self {
            runner,
            bin: bin.into(),
            repo,
        }
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    fn gh(&self, args: &[&str]) -> Result<String> {
        let mut args: Vec<String> = args.iter().map(|a| a.to_string()).collect();
        if let Some(ref repo) = self.repo {
            args.push("--repo".to_string());
            args.push(repo.clone());
        }
        Ok(self.runner.run(&self.bin, &args, None)?)
    }

    fn gh_json<T: serde::de::DeserializeOwned>(&self, args: &[&str]) -> Result<T> {
        let out = self.gh(args)?;
        serde_json::from_str(&out).map_err(|e| {
            ImportError::Tracker(format!(
                "Failed to parse `{} {}` output: {}",
                self.bin,
                args.first().copied().unwrap_or_default(),
                e
            ))
        })
    }
}

/// Search query restricting matches to issue titles.
fn title_query(title: &str) -> String {
    format!("\"{}\" in:title", title)
}

impl<R: CommandRunner> Tracker for GhTracker<R> {
    fn list_labels(&self) -> Result<Vec<TrackerLabel>> {
        self.gh_json(&["label", "list", "--json", "name"])
    }

    fn create_label(&self, name: &str, description: &str) -> Result<()> {
        tracing::info!(label = name, "Creating label");
        self.gh(&["label", "create", name, "--description", description])?;
        Ok(())
    }

    fn search_issues(&self, title: &str) -> Result<Vec<TrackerIssue>> {
        let query = title_query(title);
        tracing::debug!(query = %query, "Searching issues");
        self.gh_json(&[
            "issue",
            "list",
            "--state",
            "all",
            "--search",
            &query,
            "--json",
            "number,title,url",
        ])
    }

    fn create_issue(&self, issue: &ClassifiedIssue) -> Result<String> {
        let labels = issue.labels_arg();
        tracing::info!(title = %issue.title, labels = %labels, "Creating issue");
        let out = self.gh(&[
            "issue",
            "create",
            "--title",
            &issue.title,
            "--body",
            &issue.body,
            "--label",
            &labels,
        ])?;
        Ok(out.trim().to_string())
    }

    fn comment_issue(&self, number: u64, body: &str) -> Result<()> {
        tracing::info!(number, "Commenting on issue");
        let number = number.to_string();
        self.gh(&["issue", "comment", &number, "--body", body])?;
        Ok(())
    }
}
