use crate::error::ExternalToolError;
use std::io::Write;
use std::process::{Command, Stdio};

/// Runs an external program to completion and returns its stdout.
///
/// A non-zero exit status is reported as an [`ExternalToolError`] carrying
/// the program's stderr (or stdout when stderr is empty).
pub trait CommandRunner {
    fn run(
        &self,
        program: &str,
        args: &[String],
        input: Option<&str>,
    ) -> Result<String, ExternalToolError>;
}

/// [`CommandRunner`] that spawns real processes.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessRunner;

impl CommandRunner for ProcessRunner {
    fn run(
        &self,
        program: &str,
        args: &[String],
        input: Option<&str>,
    ) -> Result<String, ExternalToolError> {
        tracing::debug!(program, args = ?args, "Running external command");

        let mut command = Command::new(program);
        command
            .args(args)
            .stdin(if input.is_some() {
                Stdio::piped()
            } else {
                Stdio::null()
            })
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());

        let mut child = command.spawn().map_err(|e| {
            ExternalToolError::new(program, format!("Failed to run `{}`: {}", program, e))
        })?;

        if let (Some(text), Some(mut stdin)) = (input, child.stdin.take()) {
            stdin.write_all(text.as_bytes()).map_err(|e| {
                ExternalToolError::new(
                    program,
                    format!("Failed to write input to `{}`: {}", program, e),
                )
            })?;
        }

        let output = child.wait_with_output().map_err(|e| {
            ExternalToolError::new(program, format!("Failed to wait for `{}`: {}", program, e))
        })?;

        let stdout = String::from_utf8_lossy(&output.stdout).to_string();
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            tracing::debug!(program, status = ?output.status.code(), "External command failed");
            return Err(ExternalToolError::from_output(program, &stdout, &stderr));
        }

        Ok(stdout)
    }
}
