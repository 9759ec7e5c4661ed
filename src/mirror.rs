use anyhow::{anyhow, Context, Result};
#[cfg(test)]
use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};

use crate::models::AppData;

/// File name of the durable mirror inside the data directory.
pub const MIRROR_FILE: &str = "job-tracker-data.json";

/// Durable copy of the whole `AppData` document.
///
/// `load` returns `Ok(None)` when nothing has been saved yet and `Err` when
/// something is there but cannot be read or parsed.
pub trait Mirror {
    fn load(&self) -> Result<Option<AppData>>;
    fn save(&self, data: &AppData) -> Result<()>;
}

impl<M: Mirror + ?Sized> Mirror for &M {
    fn load(&self) -> Result<Option<AppData>> {
        (**self).load()
    }

    fn save(&self, data: &AppData) -> Result<()> {
        (**self).save(data)
    }
}

/// Keeps the document as a single JSON file.
pub struct FileMirror {
    path: PathBuf,
}

impl FileMirror {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn in_dir(dir: &Path) -> Self {
        Self::new(dir.join(MIRROR_FILE))
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

impl Mirror for FileMirror {
    fn load(&self) -> Result<Option<AppData>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read {}", self.path.display()))?;
        let data = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse {}", self.path.display()))?;
        Ok(Some(data))
    }

    fn save(&self, data: &AppData) -> Result<()> {
        let parent = self
            .path
            .parent()
            .ok_or_else(|| anyhow!("Mirror path has no parent: {}", self.path.display()))?;
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;

        let content = serde_json::to_string(data).context("Failed to serialize data")?;

        // Write to a sibling then rename, so a crash never leaves half a document.
        let tmp_path = parent.join(format!(".{}.tmp", MIRROR_FILE));
        fs::write(&tmp_path, content)
            .with_context(|| format!("Failed to write {}", tmp_path.display()))?;
        fs::rename(&tmp_path, &self.path)
            .with_context(|| format!("Failed to replace {}", self.path.display()))?;
        Ok(())
    }
}

/// In-memory mirror for tests. Holds the serialized document so loads go
/// through the same parse path as the file mirror.
#[cfg(test)]
#[derive(Default)]
pub struct MemoryMirror {
    raw: RefCell<Option<String>>,
    saves: RefCell<usize>,
    simulate_write_error: RefCell<bool>,
}

#[cfg(test)]
impl MemoryMirror {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the slot with arbitrary text, parseable or not.
    pub fn with_raw(raw: impl Into<String>) -> Self {
        let mirror = Self::default();
        *mirror.raw.borrow_mut() = Some(raw.into());
        mirror
    }

    pub fn raw(&self) -> Option<String> {
        self.raw.borrow().clone()
    }

    pub fn save_count(&self) -> usize {
        *self.saves.borrow()
    }

    pub fn set_simulate_write_error(&self, simulate: bool) {
        *self.simulate_write_error.borrow_mut() = simulate;
    }
}

#[cfg(test)]
impl Mirror for MemoryMirror {
    fn load(&self) -> Result<Option<AppData>> {
        match self.raw.borrow().as_deref() {
            None => Ok(None),
            Some(raw) => {
                let data = serde_json::from_str(raw).context("Failed to parse stored data")?;
                Ok(Some(data))
            }
        }
    }

    fn save(&self, data: &AppData) -> Result<()> {
        if *self.simulate_write_error.borrow() {
            return Err(anyhow!("Simulated write error"));
        }
        *self.raw.borrow_mut() = Some(serde_json::to_string(data)?);
        *self.saves.borrow_mut() += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{NewApplication, Theme};

    fn sample_data() -> AppData {
        let mut data = AppData::default();
        data.applications.push(
            NewApplication {
                company_name: "Acme".to_string(),
                job_title: "Engineer".to_string(),
                salary: Some("$100k".to_string()),
                ..Default::default()
            }
            .with_id("1700000000000abcdefghi".to_string()),
        );
        data.preferences.theme = Theme::Light;
        data
    }

    #[test]
    fn test_file_mirror_missing_file_loads_none() {
        let dir = tempfile::tempdir().unwrap();
        let mirror = FileMirror::in_dir(dir.path());
        assert!(mirror.load().unwrap().is_none());
    }

    #[test]
    fn test_file_mirror_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let mirror = FileMirror::in_dir(&dir.path().join("nested"));
        let data = sample_data();

        mirror.save(&data).unwrap();
        assert!(mirror.path().exists());
        assert_eq!(mirror.load().unwrap(), Some(data));
    }

    #[test]
    fn test_file_mirror_overwrites_whole_document() {
        let dir = tempfile::tempdir().unwrap();
        let mirror = FileMirror::in_dir(dir.path());
        mirror.save(&sample_data()).unwrap();
        mirror.save(&AppData::default()).unwrap();

        assert_eq!(mirror.load().unwrap(), Some(AppData::default()));
        let leftovers: Vec<_> = fs::read_dir(dir.path()).unwrap().collect();
        assert_eq!(leftovers.len(), 1);
    }

    #[test]
    fn test_file_mirror_corrupt_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let mirror = FileMirror::in_dir(dir.path());
        fs::write(mirror.path(), "{not json").unwrap();
        assert!(mirror.load().is_err());
    }

    #[test]
    fn test_memory_mirror_round_trip() {
        let mirror = MemoryMirror::new();
        assert!(mirror.load().unwrap().is_none());
        mirror.save(&sample_data()).unwrap();
        assert_eq!(mirror.load().unwrap(), Some(sample_data()));
        assert_eq!(mirror.save_count(), 1);
    }

    #[test]
    fn test_memory_mirror_simulated_write_error() {
        let mirror = MemoryMirror::new();
        mirror.set_simulate_write_error(true);
        assert!(mirror.save(&sample_data()).is_err());
        assert!(mirror.raw().is_none());
    }
}
