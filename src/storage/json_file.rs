use super::DayStore;
use crate::errors::AppResult;
use crate::models::work_days::WorkDays;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Days kept as a JSON array in a single file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Fallible load: a missing file is an empty collection, anything else
    /// unreadable is an error.
    pub fn try_load(&self) -> AppResult<WorkDays> {
        let content = match fs::read_to_string(&self.path) {
            Ok(c) => c,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(WorkDays::new()),
            Err(e) => return Err(e.into()),
        };

        if content.trim().is_empty() {
            return Ok(WorkDays::new());
        }

        Ok(serde_json::from_str(&content)?)
    }

    pub fn try_save(&self, days: &WorkDays) -> AppResult<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(days)?;
        fs::write(&self.path, json)?;
        Ok(())
    }

    pub fn try_clear(&self) -> AppResult<()> {
        match fs::remove_file(&self.path) {
            Err(e) if e.kind() != ErrorKind::NotFound => Err(e.into()),
            _ => Ok(()),
        }
    }
}

impl DayStore for JsonFileStore {
    fn load(&self) -> WorkDays {
        match self.try_load() {
            Ok(days) => {
                tracing::debug!(path = %self.path.display(), count = days.len(), "days loaded");
                days
            }
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "unreadable day store, starting empty");
                WorkDays::new()
            }
        }
    }

    fn save(&self, days: &WorkDays) {
        if let Err(e) = self.try_save(days) {
            tracing::error!(path = %self.path.display(), error = %e, "failed to save days");
        }
    }

    fn clear(&self) {
        if let Err(e) = self.try_clear() {
            tracing::error!(path = %self.path.display(), error = %e, "failed to clear day store");
        }
    }
}
