//! Backup management module
//!
//! Every rewrite of a target file is preceded by a copy into that target's
//! backup directory, `<backups>/<filename>/<timestamp>_<filename>.bak`.
//! A manager only sees backups of its own target, and only the newest
//! `max_count` of them are kept.

use anyhow::{Context as _, Result};
use std::path::{Path, PathBuf};
use time::macros::format_description;
use time::OffsetDateTime;

use crate::model::Config;
use crate::utils::path::write_atomic;

/// Backup entry information
#[derive(Debug, Clone)]
pub struct BackupEntry {
    pub id: String,
    pub path: PathBuf,
    pub timestamp: String,
    pub filename: String,
    pub size: u64,
}

/// Backups of a single target file
#[derive(Debug, Clone)]
pub struct BackupManager {
    backup_dir: PathBuf,
    target: PathBuf,
    max_count: usize,
}

impl BackupManager {
    pub fn new(config: &Config, target: impl Into<PathBuf>) -> Self {
        let target = target.into();
        let backup_dir = Config::backups_dir().join(target_name(&target));
        Self::with_dir(backup_dir, target, config.backup.max_count)
    }

    pub fn with_dir(
        backup_dir: impl Into<PathBuf>,
        target: impl Into<PathBuf>,
        max_count: usize,
    ) -> Self {
        Self {
            backup_dir: backup_dir.into(),
            target: target.into(),
            max_count,
        }
    }

    fn ensure_dir(&self) -> Result<()> {
        std::fs::create_dir_all(&self.backup_dir).with_context(|| {
            format!(
                "failed to create backup directory {}",
                self.backup_dir.display()
            )
        })
    }

    /// Whether `filename` is `<timestamp>_<target>.bak`
    fn owns(&self, filename: &str) -> bool {
        let suffix = format!("{}.bak", target_name(&self.target));
        filename
            .split_once('_')
            .map(|(_, rest)| rest == suffix)
            .unwrap_or(false)
    }

    /// Copy the current target file into the backup directory
    pub fn create_backup(&self) -> Result<PathBuf> {
        self.ensure_dir()?;

        let format = format_description!(
            "[year][month][day]-[hour][minute][second][subsecond digits:3]"
        );
        let timestamp = OffsetDateTime::now_utc().format(&format)?;

        let backup_path = self
            .backup_dir
            .join(format!("{}_{}.bak", timestamp, target_name(&self.target)));

        std::fs::copy(&self.target, &backup_path).with_context(|| {
            format!(
                "failed to back up {} to {}",
                self.target.display(),
                backup_path.display()
            )
        })?;
        tracing::debug!(backup = %backup_path.display(), "backup created");

        let removed = self.cleanup_keep(self.max_count)?;
        if removed > 0 {
            tracing::debug!(removed, "old backups removed");
        }

        Ok(backup_path)
    }

    /// List backups of the target, newest first
    pub fn list_backups(&self) -> Result<Vec<BackupEntry>> {
        if !self.backup_dir.exists() {
            return Ok(Vec::new());
        }

        let mut entries = Vec::new();

        for entry in std::fs::read_dir(&self.backup_dir)? {
            let entry = entry?;
            let path = entry.path();
            let filename = entry.file_name().to_string_lossy().to_string();

            if !self.owns(&filename) {
                continue;
            }

            let size = entry.metadata()?.len();
            let timestamp = filename.split('_').next().unwrap_or_default().to_string();
            let id = filename.trim_end_matches(".bak").to_string();

            entries.push(BackupEntry {
                id,
                path,
                timestamp,
                filename,
                size,
            });
        }

        entries.sort_by(|a, b| b.filename.cmp(&a.filename));

        Ok(entries)
    }

    /// Write `backup` back over the target, keeping the replaced state as a new backup
    pub fn restore(&self, backup: &BackupEntry) -> Result<()> {
        // Read first: the backup taken below may evict this one
        let content = std::fs::read(&backup.path)
            .with_context(|| format!("failed to read backup {}", backup.path.display()))?;

        if self.target.exists() {
            self.create_backup()?;
        }

        write_atomic(&self.target, &content)
            .with_context(|| format!("failed to restore {}", self.target.display()))?;
        tracing::info!(backup = %backup.id, target = %self.target.display(), "backup restored");

        Ok(())
    }

    /// Clean up backups, keeping only the specified number
    pub fn cleanup_keep(&self, keep: usize) -> Result<usize> {
        let backups = self.list_backups()?;

        if backups.len() <= keep {
            return Ok(0);
        }

        let mut removed = 0;
        for backup in backups.into_iter().skip(keep) {
            std::fs::remove_file(&backup.path)?;
            removed += 1;
        }

        Ok(removed)
    }

    /// Get a backup by its full ID or a fragment matching exactly one backup
    pub fn get_backup(&self, id: &str) -> Result<Option<BackupEntry>> {
        let backups = self.list_backups()?;
        if let Some(exact) = backups.iter().find(|b| b.id == id) {
            return Ok(Some(exact.clone()));
        }

        let mut matches: Vec<BackupEntry> = backups
            .into_iter()
            .filter(|b| b.filename.contains(id))
            .collect();
        if matches.len() > 1 {
            anyhow::bail!(
                "'{}' matches {} backups, use a longer id",
                id,
                matches.len()
            );
        }
        Ok(matches.pop())
    }
}

fn target_name(target: &Path) -> String {
    target
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| "config".to_string())
}
