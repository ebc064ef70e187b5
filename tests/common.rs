#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rsb() -> Command {
    cargo_bin_cmd!("rshiftbalancer")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rshiftbalancer.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rsb_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize DB in test mode (no config file written)
pub fn init_db(db_path: &str) {
    rsb()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

/// Save one day with AM / PM scheduled rosters through the CLI
pub fn save_day(db_path: &str, date: &str, am: &str, pm: &str) {
    rsb()
        .args(["--db", db_path, "save", date, "--am", am, "--pm", pm])
        .assert()
        .success();
}

/// Ana works Mon..Fri of week 2024-06-03 plus Mon..Thu of the week before;
/// Bruno works Mon..Wed of week 2024-06-03 only.
pub fn init_db_with_data(db_path: &str) {
    init_db(db_path);

    for date in ["2024-05-27", "2024-05-28", "2024-05-29", "2024-05-30"] {
        save_day(db_path, date, "1234567 Ana Silva", "");
    }

    for date in ["2024-06-03", "2024-06-04", "2024-06-05"] {
        save_day(db_path, date, "1234567 Ana Silva\n7654321 Bruno Costa", "");
    }

    for date in ["2024-06-06", "2024-06-07"] {
        save_day(db_path, date, "", "[1234567 Ana Silva]");
    }
}
