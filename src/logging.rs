use std::path::Path;

use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::error::{ImportError, Result};

/// Set up diagnostics on stderr, plus a JSON trace file when `trace_file` is given.
///
/// `RUST_LOG` takes precedence over `verbose`. Fails when the trace file's
/// directory cannot be created or the file cannot be opened.
pub fn init(verbose: bool, trace_file: Option<&Path>) -> Result<()> {
    let default_level = if verbose { "debug" } else { "info" };
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(default_level)));

    // stdout carries the summary
    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact();

    let file_layer = trace_file.map(trace_writer).transpose()?.map(|writer| {
        fmt::layer()
            .with_writer(writer)
            .with_ansi(false)
            .json()
    });

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .with(file_layer)
        .init();
    Ok(())
}

fn default_filter(level: &str) -> String {
    format!("issue_import={}", level)
}

/// Daily-rotated appender for `path`, creating its directory first.
fn trace_writer(path: &Path) -> Result<RollingFileAppender> {
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let name = path
        .file_name()
        .ok_or_else(|| {
            ImportError::Config(format!("Trace file has no file name: {}", path.display()))
        })?
        .to_string_lossy()
        .into_owned();

    std::fs::create_dir_all(dir).map_err(|e| {
        ImportError::Config(format!(
            "Cannot create trace directory {}: {}",
            dir.display(),
            e
        ))
    })?;

    RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(name)
        .build(dir)
        .map_err(|e| {
            ImportError::Config(format!("Cannot open trace file {}: {}", path.display(), e))
        })
}
