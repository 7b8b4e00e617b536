mod dry_run;
mod import;

pub use dry_run::handle_dry_run;
pub use import::handle_import;

use crate::config::ImportConfig;
use chrono::NaiveDate;

/// Common context passed to all command handlers
pub struct CommandContext {
    pub config: ImportConfig,
    pub today: NaiveDate,
}

impl CommandContext {
    pub fn new(config: ImportConfig) -> Self {
        Self {
            config,
            today: chrono::Local::now().date_naive(),
        }
    }
}
