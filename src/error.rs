use thiserror::Error;

/// Failure reported by an external command-line tool.
///
/// The message is the tool's trimmed stderr, falling back to stdout and then
/// to a generic "<program> command failed".
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct ExternalToolError {
    pub program: String,
    pub message: String,
}

impl ExternalToolError {
    pub fn new(program: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            message: message.into(),
        }
    }

    /// Build the error from a finished process's captured output.
    pub fn from_output(program: &str, stdout: &str, stderr: &str) -> Self {
        let stderr = stderr.trim();
        let stdout = stdout.trim();
        let message = if !stderr.is_empty() {
            stderr.to_string()
        } else if !stdout.is_empty() {
            stdout.to_string()
        } else {
            format!("{} command failed", program)
        };
        Self::new(program, message)
    }
}

#[derive(Error, Debug)]
pub enum ImportError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("CSV not found: {0}")]
    CsvNotFound(String),

    #[error("Invalid CSV: {0}")]
    InvalidCsv(String),

    #[error(transparent)]
    Tool(#[from] ExternalToolError),

    #[error("Tracker error: {0}")]
    Tracker(String),

    // Wrapped errors leave their detail to the source chain, which the binary
    // prints with `{:#}`.
    #[error("IO error")]
    Io(#[from] std::io::Error),

    #[error("CSV error")]
    Csv(#[from] csv::Error),

    #[error("YAML error")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error")]
    Json(#[from] serde_json::Error),
}

impl ImportError {
    /// Whether the error stems from bad invocation or input rather than the
    /// tracker. These map to the usage exit status.
    pub fn is_usage(&self) -> bool {
        matches!(
            self,
            ImportError::Config(_)
                | ImportError::CsvNotFound(_)
                | ImportError::InvalidCsv(_)
                | ImportError::Csv(_)
                | ImportError::Yaml(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, ImportError>;
