//! Configuration management module

use anyhow::{Context as _, Result};
use std::path::{Path, PathBuf};

use crate::model::Config;
use crate::utils::path::{default_target, expand_tilde};

/// Load the settings file, or defaults when it does not exist
pub fn load_or_default() -> Result<Config> {
    let path = Config::config_path();
    let config = Config::load()
        .with_context(|| format!("failed to load settings from {}", path.display()))?;
    tracing::debug!(path = %path.display(), "settings loaded");
    Ok(config)
}

/// Pick the file to edit: explicit path (flag or `EXVAR_FILE`), then the
/// `store.file` setting, then `~/.bashrc`.
pub fn resolve_target(explicit: Option<&Path>, config: &Config) -> PathBuf {
    if let Some(path) = explicit {
        return expand_tilde(&path.to_string_lossy());
    }
    match &config.store.file {
        Some(file) if !file.trim().is_empty() => expand_tilde(file.trim()),
        _ => default_target(),
    }
}
