//! Issue body templating.
//!
//! An expanded body is made of markdown sections separated by blank lines:
//!
//! ```markdown
//! <raw body, when present>
//!
//! **Goal**
//! <raw body, or TBD>
//!
//! **Subtasks**
//! - ...
//!
//! **Acceptance criteria**
//! - ...
//!
//! **Notes**
//! - ...
//! ```
//!
//! The Notes section only appears when the body mentions breaking changes,
//! security or performance.

use crate::model::Label;

/// Maximum number of subtasks rendered.
pub const MAX_SUBTASKS: usize = 12;

/// Maximum number of acceptance criteria rendered.
pub const MAX_ACCEPTANCE: usize = 10;

const GOAL_PLACEHOLDER: &str = "TBD";

const NOTE_RULES: &[(&[&str], &str)] = &[
    (
        &["breaking", "migration", "deprecate"],
        "Potential breaking change; confirm migration path",
    ),
    (
        &["security", "auth", "secret"],
        "Review security implications and threat model",
    ),
    (
        &["perf", "performance", "latency"],
        "Track performance impact before and after",
    ),
];

/// Build the subtask checklist for an issue.
pub fn subtasks(title: &str, label: Label) -> Vec<String> {
    let mut items = vec![
        format!("Review existing context and constraints for: {}", title),
        "Define functional and non-functional requirements".to_string(),
        "Design the approach and document key decisions".to_string(),
        "Implement the core changes in a minimal, testable slice".to_string(),
        "Add/update tests to cover success and failure cases".to_string(),
        "Update docs or examples to match behavior".to_string(),
        "Run relevant checks locally and fix regressions".to_string(),
    ];
    if label.is_perf_sensitive() {
        items.insert(
            4,
            "Add targeted benchmarks or perf checks for hot paths".to_string(),
        );
    } else if label == Label::Infra {
        items.insert(4, "Validate changes in CI-like environment".to_string());
    }
    items.truncate(MAX_SUBTASKS);
    items
}

/// Build the acceptance criteria for an issue.
pub fn acceptance(title: &str, label: Label) -> Vec<String> {
    let mut items = vec![
        format!("Behavior matches the goal described for: {}", title),
        "All new/updated tests pass locally".to_string(),
        "No regressions in existing functionality are observed".to_string(),
        "Docs/examples accurately describe the new behavior".to_string(),
        "Edge cases are handled or explicitly documented".to_string(),
        "Code changes are reviewed and ready to merge".to_string(),
    ];
    if label.is_perf_sensitive() {
        items.insert(
            3,
            "Performance impact is measured and acceptable".to_string(),
        );
    } else if label == Label::Infra {
        items.insert(
            3,
            "CI/release pipeline runs successfully with changes".to_string(),
        );
    }
    items.truncate(MAX_ACCEPTANCE);
    items
}

/// Advisory notes triggered by keywords in the body. `None` when nothing matched.
pub fn notes(body: &str) -> Option<Vec<&'static str>> {
    let text = body.to_lowercase();
    let notes: Vec<_> = NOTE_RULES
        .iter()
        .filter(|(keywords, _)| keywords.iter().any(|k| text.contains(k)))
        .map(|(_, note)| *note)
        .collect();

    if notes.is_empty() { None } else { Some(notes) }
}

fn bullet_section<S: AsRef<str>>(heading: &str, items: &[S]) -> String {
    let lines: Vec<String> = items
        .iter()
        .map(|item| format!("- {}", item.as_ref()))
        .collect();
    format!("**{}**\n{}", heading, lines.join("\n"))
}

/// Render the full issue body from the raw CSV body.
pub fn expand(raw_body: &str, title: &str, label: Label) -> String {
    let body = raw_body.trim();

    let mut parts = Vec::new();
    if body.is_empty() {
        parts.push(format!("**Goal**\n{}", GOAL_PLACEHOLDER));
    } else {
        parts.push(body.to_string());
        parts.push(format!("**Goal**\n{}", body));
    }
    parts.push(bullet_section("Subtasks", &subtasks(title, label)));
    parts.push(bullet_section(
        "Acceptance criteria",
        &acceptance(title, label),
    ));
    if let Some(notes) = notes(body) {
        parts.push(bullet_section("Notes", &notes));
    }

    let mut rendered = parts.join("\n\n").trim().to_string();
    rendered.push('\n');
    rendered
}
