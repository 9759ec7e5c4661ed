use anyhow::{Context, Result};
use chrono::NaiveDate;
use std::fs;
use std::path::{Path, PathBuf};

use crate::models::AppData;

pub fn backup_file_name(date: NaiveDate) -> String {
    format!("job-tracker-backup-{}.json", date.format("%Y-%m-%d"))
}

/// Writes the pretty-printed document to `dir`, named after today's UTC date.
/// An existing backup from the same day is replaced.
pub fn write_backup(data: &AppData, dir: &Path) -> Result<PathBuf> {
    let path = dir.join(backup_file_name(chrono::Utc::now().date_naive()));
    let content = serde_json::to_string_pretty(data).context("Failed to serialize data")?;
    fs::create_dir_all(dir).with_context(|| format!("Failed to create {}", dir.display()))?;
    fs::write(&path, content).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(path)
}

/// Reads a backup produced by `write_backup` (or any document of the same shape).
pub fn read_backup(path: &Path) -> Result<AppData> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read backup file: {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse backup file: {}", path.display()))
}
