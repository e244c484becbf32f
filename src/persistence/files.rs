use anyhow::{Context, Result};
use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Get the focusq directory - checks for local .focusq first, then falls back to global ~/.focusq
pub fn get_storage_dir() -> Result<PathBuf> {
    // Check for local .focusq directory
    let current_dir = env::current_dir().context("Could not determine current directory")?;
    let local_dir = find_local_storage(&current_dir);

    if let Some(dir) = local_dir {
        return Ok(dir);
    }

    // Fall back to global ~/.focusq
    let home = dirs::home_dir().context("Could not determine home directory")?;
    Ok(home.join(".focusq"))
}

/// Find local .focusq directory by walking up the directory tree
fn find_local_storage(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir;

    loop {
        let storage_dir = current.join(".focusq");
        if storage_dir.exists() && storage_dir.is_dir() {
            return Some(storage_dir);
        }

        // Move up to parent directory
        current = current.parent()?;
    }
}

/// Ensure the focusq directory exists
pub fn ensure_storage_dir() -> Result<PathBuf> {
    let dir = get_storage_dir()?;
    if !dir.exists() {
        fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create directory: {}", dir.display()))?;
    }
    Ok(dir)
}

/// Initialize a local .focusq directory in the current directory
pub fn init_local_storage() -> Result<PathBuf> {
    let current_dir = env::current_dir().context("Could not determine current directory")?;
    let storage_dir = current_dir.join(".focusq");

    if storage_dir.exists() {
        anyhow::bail!("focusq directory already exists: {}", storage_dir.display());
    }

    fs::create_dir_all(&storage_dir)
        .with_context(|| format!("Failed to create directory: {}", storage_dir.display()))?;

    Ok(storage_dir)
}

/// Atomically write content to a file using temp file + rename
pub fn atomic_write<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
    let path = path.as_ref();
    // A bare filename has an empty parent; treat it as the current directory
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    // Create temp file in the same directory
    let mut temp_file = NamedTempFile::new_in(dir)
        .context("Failed to create temporary file")?;

    // Write content
    temp_file
        .write_all(content.as_bytes())
        .context("Failed to write to temporary file")?;

    // Sync to disk
    temp_file
        .as_file()
        .sync_all()
        .context("Failed to sync temporary file")?;

    // Atomically rename temp file to target
    temp_file
        .persist(path)
        .with_context(|| format!("Failed to persist file: {}", path.display()))?;

    Ok(())
}

/// Read file content, return empty string if file doesn't exist
pub fn read_file<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = path.as_ref();
    if !path.exists() {
        return Ok(String::new());
    }
    fs::read_to_string(path)
        .with_context(|| format!("Failed to read file: {}", path.display()))
}
