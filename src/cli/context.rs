//! Command execution context

use anyhow::Result;
use colored::Colorize;
use std::path::Path;

use crate::backup::BackupManager;
use crate::cli::args::Cli;
use crate::i18n::{fill, init_messages, Messages};
use crate::model::Config;
use crate::store::VariableStore;

/// Common context for command execution
pub struct Context {
    pub config: Config,
    pub store: VariableStore,
    pub assume_yes: bool,
    pub messages: &'static Messages,
}

impl Context {
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let config = crate::config::load_or_default()?;
        let messages = init_messages(&config.ui.language);

        let target = crate::config::resolve_target(cli.file.as_deref(), &config);
        let existed = target.exists();

        let mut store = VariableStore::open(&target)?;
        if config.backup.enabled && !cli.no_backup {
            store = store.with_backups(BackupManager::new(&config, &target));
        }

        let ctx = Self {
            config,
            store,
            assume_yes: cli.yes,
            messages,
        };
        if !existed {
            ctx.print_success(&fill(messages.file_created, &[target.display().to_string().as_str()]));
        }
        Ok(ctx)
    }

    pub fn new(config: Config, store: VariableStore, assume_yes: bool, messages: &'static Messages) -> Self {
        Self {
            config,
            store,
            assume_yes,
            messages,
        }
    }

    pub fn config_file(&self) -> &Path {
        self.store.path()
    }

    /// Print a success message
    pub fn print_success(&self, message: &str) {
        println!("{} {}", "✓".green(), message);
    }

    /// Print an informational message
    pub fn print_info(&self, message: &str) {
        println!("{} {}", "•".cyan(), message);
    }

    /// Print a warning message
    pub fn print_warning(&self, message: &str) {
        println!("{} {}", "⚠".yellow(), message);
    }

    /// Print an error message
    pub fn print_error(&self, message: &str) {
        eprintln!("{} {}", "✗".red(), message);
    }

    /// Print reload hint after modifying configuration
    pub fn print_reload_hint(&self) {
        let reload_cmd = format!("source {}", self.config_file().display());
        println!(
            "{} {}",
            "→".cyan(),
            fill(self.messages.reload_hint, &[reload_cmd.as_str()]).dimmed()
        );
    }
}
