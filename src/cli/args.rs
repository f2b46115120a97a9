//! CLI argument definitions using Clap

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "exvar")]
#[command(about = "Edit export declarations in a shell configuration file")]
#[command(version)]
#[command(author)]
pub struct Cli {
    /// Run a single command instead of the interactive menu
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Configuration file to edit (default: ~/.bashrc)
    #[arg(short, long, global = true, env = "EXVAR_FILE")]
    pub file: Option<PathBuf>,

    /// Answer yes to confirmation prompts
    #[arg(short, long, global = true)]
    pub yes: bool,

    /// Do not back up the file before rewriting it
    #[arg(long, global = true)]
    pub no_backup: bool,

    /// More log output on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the value of a variable
    Get {
        /// Variable name
        name: String,
    },

    /// Create or update a variable
    #[command(visible_alias = "add")]
    Set {
        /// Variable name
        name: String,
        /// New value
        value: String,
    },

    /// Delete a variable
    #[command(visible_alias = "rm")]
    Unset {
        /// Variable name
        name: String,
    },

    /// List all variables
    #[command(visible_alias = "ls")]
    List,

    /// Backup management
    Backup {
        #[command(subcommand)]
        backup_command: BackupCommands,
    },
}

#[derive(Subcommand)]
pub enum BackupCommands {
    /// List backups
    List,
    /// Restore a backup
    Restore {
        /// Backup ID
        id: String,
    },
    /// Remove old backups
    Clean {
        /// Number to keep (default: backup.max_count setting)
        #[arg(long)]
        keep: Option<usize>,
    },
}
