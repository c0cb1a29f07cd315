use predicates::str::contains;
use std::fs;

mod common;
use common::{setup_home, th, today};

#[test]
fn test_audit_records_operations() {
    let home = setup_home("audit_print");
    th(&home).arg("init").assert().success();
    th(&home)
        .args(["activity", "add", "Reading"])
        .assert()
        .success();
    th(&home).args(["log", "2"]).assert().success();

    th(&home)
        .args(["audit", "--print"])
        .assert()
        .success()
        .stdout(contains("Internal log"))
        .stdout(contains("init"))
        .stdout(contains("Reading"))
        .stdout(contains("Activity added in slot 0"));
}

#[test]
fn test_audit_empty_log() {
    let home = setup_home("audit_empty");

    th(&home)
        .args(["audit", "--print"])
        .assert()
        .success()
        .stdout(contains("Internal log is empty."));
}

/// Build a headerless single-activity file: 365 records of 16 bytes.
fn legacy_v0_file(day: &str, hours: i32) -> Vec<u8> {
    let mut bytes = vec![0u8; 365 * 16];
    bytes[..day.len()].copy_from_slice(day.as_bytes());
    bytes[12..16].copy_from_slice(&hours.to_le_bytes());
    bytes
}

#[test]
fn test_legacy_file_is_migrated() {
    let home = setup_home("legacy_v0");
    let day = today().format("%Y-%m-%d").to_string();
    fs::write(home.join("tasks.dat"), legacy_v0_file(&day, 6)).unwrap();
    fs::write(home.join("activities.txt"), "Running\n").unwrap();

    th(&home)
        .arg("stats")
        .assert()
        .success()
        .stdout(contains("Hours file migrated from v0 to v2"))
        .stdout(contains("on Running."))
        .stdout(contains("Total hours this year: 6 hrs"));

    assert_eq!(fs::metadata(home.join("tasks.dat")).unwrap().len(), 58928);
    assert_eq!(
        fs::metadata(home.join("tasks.dat.v0.bak")).unwrap().len(),
        5840
    );

    th(&home)
        .args(["audit", "--print"])
        .assert()
        .success()
        .stdout(contains("migrate_to_v2"));
}

#[test]
fn test_corrupt_data_file_is_not_overwritten() {
    let home = setup_home("corrupt_data");
    fs::write(home.join("tasks.dat"), b"not an hours file").unwrap();

    th(&home)
        .args(["activity", "add", "Reading"])
        .assert()
        .failure()
        .stderr(contains("Unrecognised data file format"));

    assert_eq!(
        fs::read(home.join("tasks.dat")).unwrap(),
        b"not an hours file"
    );
}
