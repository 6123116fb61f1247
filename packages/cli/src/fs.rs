use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Replace `path` with `contents`, creating parent directories as needed
pub fn write_over(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }

    fs::write(path, contents).with_context(|| format!("Failed to write {}", path.display()))
}
