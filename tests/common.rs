#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::path::PathBuf;
use tempfile::TempDir;

pub fn rpr() -> Command {
    cargo_bin_cmd!("rpresence")
}

/// A fresh store path inside its own temp dir. Keep the `TempDir` alive for
/// the whole test.
pub fn setup_test_store() -> (TempDir, String) {
    let dir = tempfile::tempdir().expect("temp dir");
    let path: PathBuf = dir.path().join("workdays.json");
    (dir, path.to_string_lossy().to_string())
}

/// Run one day action at a pinned local time, e.g. `at(store, "start", "2025-10-06T09:00")`.
pub fn at(store: &str, action: &str, now: &str) {
    rpr()
        .args(["--store", store, "--now", now, action])
        .assert()
        .success();
}

/// Record a full day: start, lunch, resume, stop.
pub fn full_day(store: &str, date: &str, start: &str, lunch: (&str, &str), end: &str) {
    at(store, "start", &format!("{date}T{start}"));
    at(store, "lunch", &format!("{date}T{}", lunch.0));
    at(store, "resume", &format!("{date}T{}", lunch.1));
    at(store, "stop", &format!("{date}T{end}"));
}
