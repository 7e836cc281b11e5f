//! Append-only activity log: one JSON object per line.

use crate::errors::AppResult;
use chrono::Local;
use serde::{Deserialize, Serialize};
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityEntry {
    pub date: String,
    pub operation: String,
    pub target: String,
    pub message: String,
}

/// Append an entry stamped with the local time in ISO 8601.
pub fn record(path: &Path, operation: &str, target: &str, message: &str) -> AppResult<()> {
    let entry = ActivityEntry {
        date: Local::now().to_rfc3339(),
        operation: operation.to_string(),
        target: target.to_string(),
        message: message.to_string(),
    };

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }

    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    writeln!(file, "{}", serde_json::to_string(&entry)?)?;
    Ok(())
}

/// Best-effort variant for command handlers: failures only reach the trace log.
pub fn record_quietly(path: &Path, operation: &str, target: &str, message: &str) {
    if let Err(e) = record(path, operation, target, message) {
        tracing::warn!(path = %path.display(), error = %e, "failed to write activity log");
    }
}

/// All readable entries, oldest first. Malformed lines are skipped.
pub fn read_entries(path: &Path) -> AppResult<Vec<ActivityEntry>> {
    let content = match fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(e.into()),
    };

    Ok(content
        .lines()
        .filter(|l| !l.trim().is_empty())
        .filter_map(|l| serde_json::from_str(l).ok())
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entries_are_appended_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("activity.log");

        record(&path, "start", "2025-10-06", "work day started at 09:00").unwrap();
        record(&path, "stop", "2025-10-06", "work day stopped at 17:00").unwrap();
        fs::OpenOptions::new()
            .append(true)
            .open(&path)
            .unwrap()
            .write_all(b"garbage\n")
            .unwrap();

        let entries = read_entries(&path).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].operation, "start");
        assert_eq!(entries[1].message, "work day stopped at 17:00");
    }

    #[test]
    fn missing_log_reads_empty() {
        let dir = tempfile::tempdir().unwrap();
        assert!(read_entries(&dir.path().join("none.log")).unwrap().is_empty());
    }
}
