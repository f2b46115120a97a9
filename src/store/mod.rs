//! Variable store over a shell configuration file
//!
//! ```text
//! lookup/upsert/delete
//!        |
//!        v
//!   read file -> parser::parse -> Vec<Line>
//!                                   |  filter by declaration_matcher(name)
//!                                   |  append new declaration (upsert)
//!                                   v
//!   backup (optional) <- parser::serialize -> temp file -> rename
//! ```
//!
//! At most one `export` line per name survives a write: upsert and delete
//! drop every line matching the name before anything is appended.

mod error;

pub use error::{StoreError, StoreResult};

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::backup::BackupManager;
use crate::model::{Line, VariableRecord};
use crate::parser::{self, declaration_matcher, unquote};
use crate::utils::path::{read_or_empty, touch, write_atomic};
use crate::utils::strings::is_single_line;

/// `export` declarations in one file
#[derive(Debug, Clone)]
pub struct VariableStore {
    path: PathBuf,
    backups: Option<BackupManager>,
}

impl VariableStore {
    /// Open the store at `path`, creating the file empty if it is missing
    pub fn open(path: impl Into<PathBuf>) -> StoreResult<Self> {
        let path = path.into();
        let created = touch(&path).map_err(|e| StoreError::io("create", &path, e))?;
        if created {
            tracing::info!(path = %path.display(), "created empty config file");
        }
        Ok(Self {
            path,
            backups: None,
        })
    }

    /// Copy the file aside before every rewrite
    pub fn with_backups(mut self, manager: BackupManager) -> Self {
        self.backups = Some(manager);
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Value of the first `export name=...` line, with one pair of
    /// surrounding double quotes removed.
    pub fn lookup(&self, name: &str) -> StoreResult<Option<VariableRecord>> {
        if name.is_empty() {
            return Ok(None);
        }
        let matcher = declaration_matcher(name);
        let found = self.load()?.iter().find_map(|line| {
            matcher
                .captures(line.text())
                .map(|caps| VariableRecord::new(name, unquote(&caps[1])))
        });
        Ok(found)
    }

    /// Replace every declaration of `name` with `export name="value"` at the end of the file
    pub fn upsert(&self, name: &str, value: &str) -> StoreResult<()> {
        if name.is_empty() {
            return Err(StoreError::Validation("variable name must not be empty"));
        }
        if value.is_empty() {
            return Err(StoreError::Validation("variable value must not be empty"));
        }
        if !is_single_line(value) {
            return Err(StoreError::Validation("variable value must be a single line"));
        }

        let matcher = declaration_matcher(name);
        let mut lines = self.load()?;
        let before = lines.len();
        lines.retain(|line| !matcher.is_match(line.text()));
        let replaced = before - lines.len();
        lines.push(parser::declaration(VariableRecord::new(name, value)));

        self.commit(&lines)?;
        tracing::info!(name, replaced, path = %self.path.display(), "variable set");
        Ok(())
    }

    /// Remove every declaration of `name`. Returns whether one existed.
    pub fn delete(&self, name: &str) -> StoreResult<bool> {
        if name.is_empty() {
            return Err(StoreError::Validation("variable name must not be empty"));
        }

        let matcher = declaration_matcher(name);
        let mut lines = self.load()?;
        let before = lines.len();
        lines.retain(|line| !matcher.is_match(line.text()));
        let removed = before - lines.len();

        if removed == 0 {
            tracing::debug!(name, "nothing to delete");
            return Ok(false);
        }

        self.commit(&lines)?;
        tracing::info!(name, removed, path = %self.path.display(), "variable deleted");
        Ok(true)
    }

    /// All declarations in file order, first occurrence per name
    pub fn list(&self) -> StoreResult<Vec<VariableRecord>> {
        let lines = self.load()?;
        let mut seen = HashSet::new();
        Ok(parser::records(&lines)
            .filter(|record| seen.insert(record.name.clone()))
            .cloned()
            .collect())
    }

    fn load(&self) -> StoreResult<Vec<Line>> {
        let content = read_or_empty(&self.path).map_err(|e| StoreError::io("read", &self.path, e))?;
        Ok(parser::parse(&content))
    }

    /// Write `lines` to a temp file next to the target and rename it into place
    fn commit(&self, lines: &[Line]) -> StoreResult<()> {
        if let Some(backups) = &self.backups {
            if self.path.exists() {
                backups.create_backup().map_err(StoreError::Backup)?;
            }
        }

        write_atomic(&self.path, parser::serialize(lines).as_bytes())
            .map_err(|e| StoreError::io("replace", &self.path, e))?;
        tracing::debug!(path = %self.path.display(), lines = lines.len(), "file rewritten");
        Ok(())
    }
}
