//! Keyword classification of issues into a category label.

use crate::model::Label;

/// Ordered classification rules. The first rule with a matching keyword wins.
const RULES: &[(Label, &[&str])] = &[
    (
        Label::Spec,
        &[
            "spec",
            "syntax",
            "grammar",
            "semantics",
            "language design",
            "proposal",
        ],
    ),
    (
        Label::Compiler,
        &[
            "compiler",
            "parser",
            "frontend",
            "backend",
            "codegen",
            "typecheck",
            "type checker",
            "optimizer",
        ],
    ),
    (
        Label::Runtime,
        &[
            "runtime",
            "vm",
            "jit",
            "gc",
            "garbage collector",
            "scheduler",
            "interpreter",
        ],
    ),
    (
        Label::Stdlib,
        &[
            "stdlib",
            "standard library",
            "library",
            "collections",
            "io",
            "fs",
            "net",
        ],
    ),
    (
        Label::Tooling,
        &[
            "tooling",
            "cli",
            "lsp",
            "formatter",
            "linter",
            "debugger",
            "ide",
            "build tool",
        ],
    ),
    (
        Label::Docs,
        &[
            "docs",
            "documentation",
            "guide",
            "tutorial",
            "reference",
            "readme",
            "examples",
        ],
    ),
    (
        Label::Infra,
        &[
            "infra",
            "ci",
            "cd",
            "pipeline",
            "release",
            "packaging",
            "docker",
            "k8s",
            "deployment",
        ],
    ),
];

/// Category used when no rule matches.
pub const FALLBACK: Label = Label::Tooling;

/// Pick the category label for an issue from its title and body.
///
/// Matching is plain substring search on the lower-cased text, so short
/// keywords such as `io` or `ci` also match inside longer words.
pub fn classify(title: &str, body: &str) -> Label {
    let text = format!("{}\n{}", title, body).to_lowercase();
    RULES
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|k| text.contains(k)))
        .map(|(label, _)| *label)
        .unwrap_or(FALLBACK)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_runtime_scenario() {
        assert_eq!(
            classify("Add GC pause metrics", "Improve runtime GC latency"),
            Label::Runtime
        );
    }

    #[test]
    fn test_first_rule_wins() {
        assert_eq!(
            classify("Tidy things", "touches the spec and the compiler"),
            Label::Spec
        );
        assert_eq!(classify("Parser docs", ""), Label::Compiler);
    }

    #[test]
    fn test_fallback_is_tooling() {
        assert_eq!(classify("Hello", "world"), Label::Tooling);
        assert_eq!(classify("", ""), Label::Tooling);
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(classify("JIT warmup", ""), Label::Runtime);
        assert_eq!(classify("Write a TUTORIAL", ""), Label::Docs);
    }

    #[test]
    fn test_substring_matches_inside_words() {
        // "action" contains "io" and so lands in stdlib before infra gets a look
        assert_eq!(classify("GitHub Action for tests", ""), Label::Stdlib);
        assert_eq!(classify("Docker image", ""), Label::Infra);
    }

    #[test]
    fn test_title_and_body_both_count() {
        assert_eq!(classify("Plain title", "needs a linter"), Label::Tooling);
        assert_eq!(classify("Release packaging", ""), Label::Infra);
    }

    #[test]
    fn test_never_returns_mvp() {
        for (label, _) in RULES {
            assert_ne!(*label, Label::Mvp);
        }
    }

    #[test]
    fn test_deterministic() {
        let a = classify("Standard library collections", "hash maps");
        let b = classify("Standard library collections", "hash maps");
        assert_eq!(a, b);
        assert_eq!(a, Label::Stdlib);
    }
}
