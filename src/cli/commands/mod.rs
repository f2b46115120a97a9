//! One-shot command implementations

pub mod backup;
pub mod get;
pub mod list;
pub mod set;
pub mod unset;

use anyhow::Result;

use super::args::Commands;
use super::Context;

/// Run a subcommand to completion
pub fn execute(ctx: &Context, command: &Commands) -> Result<()> {
    match command {
        Commands::Get { name } => get::execute(ctx, name),
        Commands::Set { name, value } => set::execute(ctx, name, value),
        Commands::Unset { name } => unset::execute(ctx, name),
        Commands::List => list::execute(ctx),
        Commands::Backup { backup_command } => backup::execute(ctx, backup_command),
    }
}
