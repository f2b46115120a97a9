//! Path utilities

use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

/// Expand tilde (~) in path to home directory
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix('~') {
        if let Some(home) = dirs::home_dir() {
            return home.join(stripped.trim_start_matches('/'));
        }
    }
    PathBuf::from(path)
}

/// Default target when nothing else is configured
pub fn default_target() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("~"))
        .join(".bashrc")
}

/// Create `path` empty if it does not exist, along with its parent directories
pub fn touch(path: &Path) -> std::io::Result<bool> {
    if path.exists() {
        return Ok(false);
    }
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)?;
    Ok(true)
}

/// Read a file, treating a missing file as empty
pub fn read_or_empty(path: &Path) -> std::io::Result<String> {
    match std::fs::read_to_string(path) {
        Ok(content) => Ok(content),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(String::new()),
        Err(e) => Err(e),
    }
}

/// The file that actually holds the content of `path`, following symlinks
pub fn resolve_link(path: &Path) -> PathBuf {
    if let Ok(real) = std::fs::canonicalize(path) {
        return real;
    }
    // Dangling link: write where it points
    match std::fs::read_link(path) {
        Ok(dest) => match path.parent() {
            Some(parent) => parent.join(dest),
            None => dest,
        },
        Err(_) => path.to_path_buf(),
    }
}

/// Replace the content of `path` with a temp file renamed into place.
///
/// Symlinks are followed so the link survives and its destination is
/// rewritten. The destination keeps its permissions.
pub fn write_atomic(path: &Path, content: &[u8]) -> std::io::Result<()> {
    let target = resolve_link(path);
    let dir = match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(content)?;
    tmp.as_file().sync_all()?;

    // Temp files are created 0600
    if let Ok(meta) = std::fs::metadata(&target) {
        tmp.as_file().set_permissions(meta.permissions())?;
    }

    tmp.persist(&target).map_err(|e| e.error)?;
    Ok(())
}
