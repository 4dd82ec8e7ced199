use assert_cmd::cargo::cargo_bin_cmd;
use clipsift_testing::assertions::{json_ids, parse_records};
use clipsift_testing::{FixtureLayout, FixtureStore, SAMPLE_NEWEST_FIRST};
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_export_writes_every_item() {
    let fixture = FixtureStore::with_samples(FixtureLayout::Alternate).unwrap();
    let out_dir = TempDir::new().unwrap();
    let out = out_dir.path().join("history.json");

    let mut cmd = cargo_bin_cmd!("clipsift");
    fixture.configure_command(&mut cmd);
    cmd.arg("export")
        .arg(&out)
        .assert()
        .success()
        .stdout(format!("Exported 5 items to {}\n", out.display()));

    let written = fs::read(&out).unwrap();
    let records = parse_records(&written).unwrap();
    assert_eq!(json_ids(&records).unwrap(), SAMPLE_NEWEST_FIRST.to_vec());
}

#[test]
fn test_export_defaults_to_working_directory_file() {
    let fixture = FixtureStore::with_samples(FixtureLayout::Primary).unwrap();
    let work_dir = TempDir::new().unwrap();

    let mut cmd = cargo_bin_cmd!("clipsift");
    fixture.configure_command(&mut cmd);
    cmd.current_dir(work_dir.path())
        .arg("export")
        .assert()
        .success()
        .stdout("Exported 5 items to maccy-export.json\n");

    assert!(work_dir.path().join("maccy-export.json").is_file());
}

#[test]
fn test_export_empty_store_writes_empty_array() {
    let fixture = FixtureStore::new(FixtureLayout::Primary).unwrap();
    let out_dir = TempDir::new().unwrap();
    let out = out_dir.path().join("empty.json");

    let mut cmd = cargo_bin_cmd!("clipsift");
    fixture.configure_command(&mut cmd);
    cmd.arg("export").arg(&out).assert().success();

    assert_eq!(fs::read_to_string(&out).unwrap(), "[]\n");
}

#[test]
fn test_schema_describes_tables() {
    let fixture = FixtureStore::new(FixtureLayout::Alternate).unwrap();
    let mut cmd = cargo_bin_cmd!("clipsift");
    fixture.configure_command(&mut cmd);

    cmd.arg("schema")
        .assert()
        .success()
        .stdout(predicate::str::contains("Table: ZHISTORYITEM\n"))
        .stdout(predicate::str::contains("  - Z_PK (INTEGER) PRIMARY KEY"))
        .stdout(predicate::str::contains("  - ZTITLE (VARCHAR)"))
        .stdout(predicate::str::contains(
            "  - Index: ZHISTORYITEMCONTENT_ZITEM_INDEX",
        ));
}

#[test]
fn test_schema_works_on_unrecognized_store() {
    let fixture = FixtureStore::new(FixtureLayout::Unrecognized).unwrap();
    let mut cmd = cargo_bin_cmd!("clipsift");
    fixture.configure_command(&mut cmd);

    cmd.arg("schema")
        .assert()
        .success()
        .stdout(predicate::str::contains("Table: notes"));
}

#[test]
fn test_schema_export_recreates_store() {
    let fixture = FixtureStore::with_samples(FixtureLayout::Primary).unwrap();
    let out_dir = TempDir::new().unwrap();
    let out = out_dir.path().join("schema.sql");

    let mut cmd = cargo_bin_cmd!("clipsift");
    fixture.configure_command(&mut cmd);
    cmd.args(["schema", "-o"])
        .arg(&out)
        .assert()
        .success()
        .stdout(format!("Schema exported to {}\n", out.display()));

    let ddl = fs::read_to_string(&out).unwrap();
    assert!(ddl.starts_with("BEGIN TRANSACTION;\n\n"));
    assert!(ddl.ends_with("COMMIT;\n"));
    assert!(ddl.contains("CREATE INDEX idx_content_item"));

    let fresh = rusqlite::Connection::open_in_memory().unwrap();
    fresh.execute_batch(&ddl).unwrap();
    let count: i64 = fresh
        .query_row("SELECT count(*) FROM HistoryItem", [], |row| row.get(0))
        .unwrap();
    assert_eq!(count, 0);
}
