use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "issue-import")]
#[command(
    author,
    version,
    about = "Bulk-import issues from a CSV file into a GitHub issue tracker"
)]
pub struct Cli {
    /// CSV file with a Title column and an optional Body column
    pub csv: PathBuf,

    /// Tracker client binary
    #[arg(long = "gh", env = "ISSUE_IMPORT_GH", value_name = "PATH")]
    pub gh: Option<String>,

    /// Repository to import into (defaults to the client's current repository)
    #[arg(short = 'R', long, env = "ISSUE_IMPORT_REPO", value_name = "OWNER/NAME")]
    pub repo: Option<String>,

    /// Where to write the JSON import log
    #[arg(long, value_name = "PATH")]
    pub log_path: Option<PathBuf>,

    /// Path to config file (searches upward for .issue-import.yml by default)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Classify and expand rows without touching the tracker
    #[arg(long)]
    pub dry_run: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Also write JSON-formatted diagnostics to this file (rotated daily)
    #[arg(long, value_name = "PATH")]
    pub trace_file: Option<PathBuf>,
}
