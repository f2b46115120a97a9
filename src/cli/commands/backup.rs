//! Backup command implementation

use anyhow::Result;
use colored::Colorize;
use dialoguer::Confirm;

use crate::backup::BackupManager;
use crate::cli::args::BackupCommands;
use crate::cli::Context;
use crate::i18n::fill;

/// Execute the backup command
pub fn execute(ctx: &Context, backup_cmd: &BackupCommands) -> Result<()> {
    let backup_manager = BackupManager::new(&ctx.config, ctx.config_file());

    match backup_cmd {
        BackupCommands::List => list_backups(ctx, &backup_manager),
        BackupCommands::Restore { id } => restore_backup(ctx, &backup_manager, id),
        BackupCommands::Clean { keep } => {
            clean_backups(ctx, &backup_manager, keep.unwrap_or(ctx.config.backup.max_count))
        }
    }
}

fn list_backups(ctx: &Context, manager: &BackupManager) -> Result<()> {
    let msg = ctx.messages;
    let backups = manager.list_backups()?;

    if backups.is_empty() {
        println!("{}", msg.no_backups_found.dimmed());
        return Ok(());
    }

    println!("{}", msg.backup_list_header.bold());
    println!();

    println!(
        "{:<40} {:<20} {}",
        msg.header_id.bold().cyan(),
        msg.header_timestamp.bold().cyan(),
        msg.header_size.bold().cyan()
    );
    println!("{}", "─".repeat(70).dimmed());

    for backup in &backups {
        println!(
            "{:<40} {:<20} {}",
            backup.id.white(),
            backup.timestamp.dimmed(),
            format_size(backup.size).dimmed()
        );
    }

    println!();
    println!(
        "{}",
        fill(msg.total_backups, &[backups.len().to_string().as_str()]).dimmed()
    );

    Ok(())
}

fn restore_backup(ctx: &Context, manager: &BackupManager, id: &str) -> Result<()> {
    let msg = ctx.messages;
    let backup = match manager.get_backup(id)? {
        Some(b) => b,
        None => anyhow::bail!(fill(msg.backup_not_found, &[id])),
    };

    println!(
        "{}",
        fill(
            msg.restoring_backup,
            &[
                backup.id.cyan().to_string().as_str(),
                backup.timestamp.dimmed().to_string().as_str(),
            ],
        )
    );

    let target = ctx.config_file().display().to_string();
    if !ctx.assume_yes
        && !Confirm::new()
            .with_prompt(fill(msg.restore_confirm, &[target.as_str()]))
            .default(false)
            .interact()?
    {
        println!("{}", msg.cancelled);
        return Ok(());
    }

    manager.restore(&backup)?;

    ctx.print_success(&fill(msg.backup_restored, &[backup.id.as_str()]));
    ctx.print_reload_hint();

    Ok(())
}

fn clean_backups(ctx: &Context, manager: &BackupManager, keep: usize) -> Result<()> {
    let removed = manager.cleanup_keep(keep)?;

    if removed == 0 {
        println!("{}", ctx.messages.no_old_backups.dimmed());
    } else {
        ctx.print_success(&fill(ctx.messages.backups_removed, &[removed.to_string().as_str()]));
    }

    Ok(())
}

fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;

    if bytes >= KB {
        format!("{:.1} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}
