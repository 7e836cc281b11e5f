use predicates::str::contains;
use std::fs;
use std::path::Path;

mod common;
use common::{at, full_day, rpr, setup_test_store};

#[test]
fn test_corrupt_store_degrades_to_empty() {
    let (_dir, store) = setup_test_store();
    fs::write(&store, "this is not json").unwrap();

    rpr()
        .args(["--store", &store, "--now", "2025-10-06T08:00", "status"])
        .assert()
        .success()
        .stdout(contains("Journée non commencée"));

    // the next action starts over with a clean collection
    at(&store, "start", "2025-10-06T09:00");
    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&store).unwrap()).unwrap();
    assert_eq!(json.as_array().unwrap().len(), 1);
}

#[test]
fn test_init_creates_an_empty_store() {
    let (_dir, store) = setup_test_store();

    rpr()
        .args(["--store", &store, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("initialization completed"));

    assert_eq!(fs::read_to_string(&store).unwrap(), "[]");
}

#[test]
fn test_clear_with_confirmation_flag() {
    let (_dir, store) = setup_test_store();
    full_day(&store, "2025-10-06", "09:00", ("12:00", "13:00"), "17:00");

    rpr()
        .args(["--store", &store, "clear", "--yes"])
        .assert()
        .success()
        .stdout(contains("supprimées"));

    assert!(!Path::new(&store).exists());

    rpr()
        .args(["--store", &store, "report", "--date", "2025-10-06"])
        .assert()
        .success()
        .stdout(contains("Lundi 6 octobre - Jour non travaillé."));
}

#[test]
fn test_clear_cancelled_without_confirmation() {
    let (_dir, store) = setup_test_store();
    at(&store, "start", "2025-10-06T09:00");

    rpr()
        .args(["--store", &store, "clear"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(contains("annulée"));

    assert!(Path::new(&store).exists());
}

#[test]
fn test_activity_log_lists_actions() {
    let (_dir, store) = setup_test_store();
    full_day(&store, "2025-10-06", "09:00", ("12:00", "13:00"), "17:00");

    rpr()
        .args(["--store", &store, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("start"))
        .stdout(contains("(2025-10-06)"))
        .stdout(contains("Journée terminée à 17:00"));
}
