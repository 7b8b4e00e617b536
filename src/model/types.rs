use serde::{Deserialize, Serialize};
use std::fmt;

/// Labels applied to imported issues.
///
/// `Mvp` goes on every imported issue; the other seven are categories picked
/// by the classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Label {
    Mvp,
    Spec,
    Compiler,
    Runtime,
    Stdlib,
    Tooling,
    Docs,
    Infra,
}

impl Label {
    /// Every label the importer provisions, in creation order.
    pub const ALL: [Label; 8] = [
        Label::Mvp,
        Label::Spec,
        Label::Compiler,
        Label::Runtime,
        Label::Stdlib,
        Label::Tooling,
        Label::Docs,
        Label::Infra,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Label::Mvp => "mvp",
            Label::Spec => "spec",
            Label::Compiler => "compiler",
            Label::Runtime => "runtime",
            Label::Stdlib => "stdlib",
            Label::Tooling => "tooling",
            Label::Docs => "docs",
            Label::Infra => "infra",
        }
    }

    /// Description used when the label has to be created in the tracker.
    pub fn description(&self) -> &'static str {
        match self {
            Label::Mvp => "MVP scope",
            Label::Spec => "Language specification and design",
            Label::Compiler => "Compiler implementation",
            Label::Runtime => "Runtime and VM",
            Label::Stdlib => "Standard library",
            Label::Tooling => "Developer tooling",
            Label::Docs => "Documentation",
            Label::Infra => "Infrastructure and CI",
        }
    }

    /// Labels whose issues get performance-oriented subtasks and criteria.
    pub fn is_perf_sensitive(&self) -> bool {
        matches!(self, Label::Compiler | Label::Runtime)
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What happened to a CSV row during the import.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImportAction {
    Created,
    Updated,
    Failed,
}
